//! Pointer position tracking
//!
//! Events record the latest position; the sim reads one snapshot per tick.

/// Container bounds in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContainerRect {
    /// Horizontal offset from the left edge if the point is inside
    pub fn offset_of(&self, client_x: f64, client_y: f64) -> Option<f64> {
        let inside = client_x >= self.left
            && client_x <= self.right
            && client_y >= self.top
            && client_y <= self.bottom;
        inside.then(|| client_x - self.left)
    }
}

/// Latest known pointer offset, or absent
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    offset_x: Option<f64>,
    /// Touch-primary devices never report a pointer
    suppressed: bool,
}

impl PointerTracker {
    pub fn new(suppressed: bool) -> Self {
        Self {
            offset_x: None,
            suppressed,
        }
    }

    /// Record a pointer move
    pub fn on_move(&mut self, client_x: f64, client_y: f64, rect: &ContainerRect) {
        if self.suppressed {
            return;
        }
        self.offset_x = rect.offset_of(client_x, client_y);
    }

    /// Pointer left the document
    pub fn on_leave(&mut self) {
        self.offset_x = None;
    }

    /// Snapshot for the next tick
    pub fn offset_x(&self) -> Option<f64> {
        self.offset_x
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ContainerRect = ContainerRect {
        left: 100.0,
        top: 500.0,
        right: 500.0,
        bottom: 600.0,
    };

    #[test]
    fn test_move_inside_and_outside() {
        let mut tracker = PointerTracker::new(false);
        tracker.on_move(150.0, 550.0, &RECT);
        assert_eq!(tracker.offset_x(), Some(50.0));

        tracker.on_move(150.0, 400.0, &RECT);
        assert_eq!(tracker.offset_x(), None);
    }

    #[test]
    fn test_edges_are_inside() {
        assert_eq!(RECT.offset_of(100.0, 500.0), Some(0.0));
        assert_eq!(RECT.offset_of(500.0, 600.0), Some(400.0));
        assert_eq!(RECT.offset_of(500.1, 600.0), None);
    }

    #[test]
    fn test_leave_clears() {
        let mut tracker = PointerTracker::new(false);
        tracker.on_move(150.0, 550.0, &RECT);
        tracker.on_leave();
        assert_eq!(tracker.offset_x(), None);
    }

    #[test]
    fn test_suppressed_ignores_moves() {
        let mut tracker = PointerTracker::new(true);
        tracker.on_move(150.0, 550.0, &RECT);
        assert_eq!(tracker.offset_x(), None);
        assert!(tracker.is_suppressed());
    }
}

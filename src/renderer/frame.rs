//! Sprite-sheet frame composition
//!
//! Pure function of the creature state: which cell to show and where.

use serde::Serialize;

use crate::consts::*;
use crate::sim::{CreatureState, Facing};

/// Everything the DOM layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteFrame {
    /// Top-left of the sheet cell, in source pixels
    pub sheet_x: f64,
    pub sheet_y: f64,
    /// Screen-space translation of the (unscaled) sprite element
    pub translate_x: f64,
    /// Horizontal scale; negative mirrors the sprite to face left
    pub scale_x: f64,
    pub scale_y: f64,
}

impl SpriteFrame {
    /// CSS `background-position` value
    pub fn background_position(&self) -> String {
        format!("-{}px -{}px", self.sheet_x, self.sheet_y)
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!(
            "translateX({}px) scale({},{})",
            self.translate_x, self.scale_x, self.scale_y
        )
    }
}

/// Compute the frame for the current state
pub fn compose(state: &CreatureState) -> SpriteFrame {
    let row = state.animation.def().sprite_row;
    let (translate_x, scale_x) = match state.facing {
        Facing::Right => (state.position_x, SCALE),
        // Mirroring flips around the left edge, so shift by one sprite width
        Facing::Left => (state.position_x + SCALED_SIZE, -SCALE),
    };
    SpriteFrame {
        sheet_x: state.frame_index as f64 * SPRITE_SIZE,
        sheet_y: row as f64 * SPRITE_SIZE,
        translate_x,
        scale_x,
        scale_y: SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Animation;

    #[test]
    fn test_compose_facing_right() {
        let mut state = CreatureState::new(1, 400.0);
        state.position_x = 120.0;
        state.facing = Facing::Right;
        state.set_animation(Animation::Running);
        state.frame_index = 3;

        let frame = compose(&state);
        assert_eq!(frame.background_position(), "-96px -160px");
        assert_eq!(frame.transform(), "translateX(120px) scale(2,2)");
    }

    #[test]
    fn test_compose_facing_left_mirrors() {
        let mut state = CreatureState::new(1, 400.0);
        state.position_x = 120.5;
        state.facing = Facing::Left;
        state.set_animation(Animation::Sitting);

        let frame = compose(&state);
        assert_eq!(frame.background_position(), "-0px -0px");
        assert_eq!(frame.transform(), "translateX(184.5px) scale(-2,2)");
    }

    #[test]
    fn test_compose_has_no_side_effects() {
        let state = CreatureState::new(5, 400.0);
        let before = serde_json::to_string(&state).unwrap();
        let _ = compose(&state);
        assert_eq!(serde_json::to_string(&state).unwrap(), before);
    }
}

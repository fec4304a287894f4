//! Pet driver
//!
//! Owns the creature, its frame clock and the pointer snapshot. The host
//! loop calls `frame` once per display refresh.

use crate::clock::{Clock, FrameClock};
use crate::pointer::PointerTracker;
use crate::renderer::{SpriteFrame, compose};
use crate::sim::{CreatureState, TickInput, TickReport, tick};

/// A running pet instance
#[derive(Debug, Clone)]
pub struct Pet {
    pub state: CreatureState,
    pub pointer: PointerTracker,
    clock: FrameClock,
    ticks: u64,
}

impl Pet {
    pub fn new(seed: u64, viewport_width: f64, pointer: PointerTracker) -> Self {
        log::info!("Pet created with seed {} in a {}px container", seed, viewport_width);
        Self {
            state: CreatureState::new(seed, viewport_width),
            pointer,
            clock: FrameClock::new(),
            ticks: 0,
        }
    }

    /// Advance to `timestamp_ms` and return the frame to draw
    pub fn frame(&mut self, timestamp_ms: f64, viewport_width: f64) -> (SpriteFrame, TickReport) {
        let input = TickInput {
            dt_ms: self.clock.delta_ms(timestamp_ms),
            pointer_x: self.pointer.offset_x(),
            viewport_width,
        };
        let report = tick(&mut self.state, &input);
        self.ticks += 1;

        for t in &report.transitions {
            log::debug!(
                "tick {}: {:?} -> {} at x={:.1}",
                self.ticks,
                t.cause,
                t.animation,
                self.state.position_x
            );
        }

        (compose(&self.state), report)
    }

    /// Advance using an injected clock
    pub fn advance(&mut self, clock: &mut impl Clock, viewport_width: f64) -> (SpriteFrame, TickReport) {
        let now = clock.now_ms();
        self.frame(now, viewport_width)
    }

    /// Number of frames processed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::pointer::ContainerRect;
    use crate::sim::{Animation, Facing, TransitionCause};

    const WIDTH: f64 = 400.0;
    const RECT: ContainerRect = ContainerRect {
        left: 0.0,
        top: 0.0,
        right: WIDTH,
        bottom: 100.0,
    };

    fn pet_sitting_at(x: f64) -> Pet {
        let mut pet = Pet::new(2024, WIDTH, PointerTracker::new(false));
        pet.state.position_x = x;
        pet.state.idle_remaining_ms = 60_000.0;
        pet
    }

    #[test]
    fn test_first_frame_does_not_move() {
        let mut pet = pet_sitting_at(100.0);
        let (frame, report) = pet.frame(5000.0, WIDTH);
        assert!(report.transitions.is_empty());
        assert_eq!(frame.transform(), "translateX(100px) scale(2,2)");
        assert_eq!(pet.state.frame_index, 0);
    }

    #[test]
    fn test_pointer_enters_and_cat_follows() {
        let mut pet = pet_sitting_at(100.0);
        let mut clock = ManualClock::new(16.0);
        pet.advance(&mut clock, WIDTH);

        pet.pointer.on_move(380.0, 50.0, &RECT);
        let mut reacted = false;
        for _ in 0..40 {
            let (_, report) = pet.advance(&mut clock, WIDTH);
            if report
                .transitions
                .iter()
                .any(|t| t.cause == TransitionCause::ReactionElapsed)
            {
                reacted = true;
                break;
            }
        }
        assert!(reacted);
        assert!(pet.state.moving);
        assert_eq!(pet.state.facing, Facing::Right);
    }

    #[test]
    fn test_stalled_tab_is_capped() {
        let mut pet = pet_sitting_at(100.0);
        pet.state.start_gait(Animation::Walking, 300.0);
        let mut clock = ManualClock::new(16.0);
        pet.advance(&mut clock, WIDTH);
        clock.skip(60_000.0);
        pet.advance(&mut clock, WIDTH);
        // At most one capped tick of walking (6.5px)
        assert!(pet.state.position_x <= 106.5 + 1e-9);
        assert!(pet.state.moving);
        assert_eq!(pet.ticks(), 2);
    }
}

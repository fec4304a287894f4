//! Creature state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::anim::{Animation, WANDER_SEQUENCE};
use crate::consts::*;
use crate::{clamp_x, max_x};

/// Which way the sprite faces (and moves)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing that points along a displacement
    pub fn toward(dx: f64) -> Self {
        if dx > 0.0 { Facing::Right } else { Facing::Left }
    }
}

/// Cursor into the wander script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WanderCursor {
    /// Next step starts the script from the beginning
    Reset,
    /// Index of the step played last
    At(usize),
}

impl WanderCursor {
    /// Move to the following step and return its index
    pub fn advance(&mut self) -> usize {
        let next = match *self {
            WanderCursor::Reset => 0,
            WanderCursor::At(i) => (i + 1) % WANDER_SEQUENCE.len(),
        };
        *self = WanderCursor::At(next);
        next
    }
}

/// Debounce timer for a newly-appeared pointer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReactionDelay {
    /// Not armed, or armed and already fired
    Idle,
    /// Counting down
    Pending { remaining_ms: f64 },
    /// Ran out while a reaction was not allowed (pointer gone or one-shot playing)
    Lapsed,
}

/// Complete creature state (single instance, owned by the driver)
#[derive(Debug, Clone, Serialize)]
pub struct CreatureState {
    /// Left edge of the sprite, clamped to [0, viewport_width - SCALED_SIZE]
    pub position_x: f64,
    pub facing: Facing,
    pub animation: Animation,
    pub frame_index: u32,
    pub frame_elapsed_ms: f64,
    /// Destination while moving
    pub target_x: f64,
    pub moving: bool,
    /// Pixels/second while moving
    pub speed: f64,
    /// Remaining time of a looping idle animation
    pub idle_remaining_ms: f64,
    pub wander: WanderCursor,
    pub reaction: ReactionDelay,
    pub previous_pointer_present: bool,
    /// Container width seen on the current tick
    pub viewport_width: f64,
    #[serde(skip)]
    pub rng: Pcg32,
}

impl CreatureState {
    /// Place a sitting creature at a random spot in the viewport
    pub fn new(seed: u64, viewport_width: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let position_x = rng.random::<f64>() * max_x(viewport_width);
        let wander = WanderCursor::At(rng.random_range(0..WANDER_SEQUENCE.len()));

        let mut state = Self {
            position_x,
            facing: Facing::Right,
            animation: Animation::Sitting,
            frame_index: 0,
            frame_elapsed_ms: 0.0,
            target_x: position_x,
            moving: false,
            speed: 0.0,
            idle_remaining_ms: 0.0,
            wander,
            reaction: ReactionDelay::Idle,
            previous_pointer_present: false,
            viewport_width,
            rng,
        };
        state.start_idle(Animation::Sitting);
        state
    }

    /// Horizontal centre of the sprite
    pub fn center_x(&self) -> f64 {
        self.position_x + SCALED_SIZE / 2.0
    }

    /// Distance from the sprite centre to the pointer (infinite when absent)
    pub fn distance_to(&self, pointer_x: Option<f64>) -> f64 {
        pointer_x.map_or(f64::INFINITY, |x| (x - self.center_x()).abs())
    }

    pub fn clamp(&self, x: f64) -> f64 {
        clamp_x(x, self.viewport_width)
    }

    /// Uniform random x across the viewport
    pub fn random_x(&mut self) -> f64 {
        self.rng.random::<f64>() * max_x(self.viewport_width)
    }

    /// Switch to `anim` from its first frame
    pub fn set_animation(&mut self, anim: Animation) {
        self.animation = anim;
        self.frame_index = 0;
        self.frame_elapsed_ms = 0.0;
    }

    /// Stop and play an idle (or one-shot) animation.
    ///
    /// Looping idles get a duration sampled from their range.
    pub fn start_idle(&mut self, anim: Animation) {
        self.moving = false;
        self.set_animation(anim);
        if let Some(range) = anim.idle_range() {
            self.idle_remaining_ms = range.lerp(self.rng.random::<f64>());
        }
    }

    /// Begin translating toward `target_x` at the given gait
    pub fn start_gait(&mut self, gait: Animation, target_x: f64) {
        debug_assert!(gait.is_gait());
        self.speed = if gait == Animation::Running {
            RUN_SPEED
        } else {
            WALK_SPEED
        };
        self.facing = Facing::toward(target_x - self.position_x);
        self.target_x = target_x;
        self.set_animation(gait);
        self.moving = true;
    }

    /// Coin-flip the facing direction
    pub fn randomize_facing(&mut self) {
        self.facing = if self.rng.random_bool(0.5) {
            Facing::Right
        } else {
            Facing::Left
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_within_bounds() {
        for seed in 0..50 {
            let state = CreatureState::new(seed, 400.0);
            assert!((0.0..=336.0).contains(&state.position_x));
            assert_eq!(state.animation, Animation::Sitting);
            assert!(!state.moving);
            assert!((3000.0..=5000.0).contains(&state.idle_remaining_ms));
        }
    }

    #[test]
    fn test_new_state_narrow_viewport() {
        let state = CreatureState::new(7, 10.0);
        assert_eq!(state.position_x, 0.0);
    }

    #[test]
    fn test_wander_cursor_wraps_and_resets() {
        let mut cursor = WanderCursor::At(WANDER_SEQUENCE.len() - 1);
        assert_eq!(cursor.advance(), 0);
        assert_eq!(cursor.advance(), 1);

        let mut cursor = WanderCursor::Reset;
        assert_eq!(cursor.advance(), 0);
        assert_eq!(cursor, WanderCursor::At(0));
    }

    #[test]
    fn test_distance_absent_pointer_is_infinite() {
        let state = CreatureState::new(1, 400.0);
        assert!(state.distance_to(None).is_infinite());
    }

    #[test]
    fn test_same_seed_same_start() {
        let a = CreatureState::new(99, 800.0);
        let b = CreatureState::new(99, 800.0);
        assert_eq!(a.position_x, b.position_x);
        assert_eq!(a.wander, b.wander);
        assert_eq!(a.idle_remaining_ms, b.idle_remaining_ms);
    }
}

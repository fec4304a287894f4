//! Sprite Pet - a pixel-art cat living along the bottom of a web page
//!
//! Core modules:
//! - `sim`: Behaviour state machine (animation selection, movement, timers)
//! - `clock`: Frame clock and tick delta capping
//! - `pointer`: Pointer position snapshot for the sim
//! - `renderer`: Sprite-sheet offset / transform computation and DOM output
//! - `platform`: Browser glue (container lookup, listeners, frame loop)
//! - `settings`: Page-level settings

pub mod clock;
pub mod pet;
pub mod platform;
pub mod pointer;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use clock::{Clock, FrameClock, ManualClock};
pub use pet::Pet;
pub use settings::PetSettings;

/// Behaviour constants
pub mod consts {
    /// Sprite sheet cell size (square, in source pixels)
    pub const SPRITE_SIZE: f64 = 32.0;
    /// Display scale applied to the sprite
    pub const SCALE: f64 = 2.0;
    /// On-screen sprite size
    pub const SCALED_SIZE: f64 = SPRITE_SIZE * SCALE;
    /// Visible body width (half the cell, scaled)
    pub const BODY_WIDTH: f64 = (SPRITE_SIZE / 2.0) * SCALE;

    /// Gait speeds in pixels/second
    pub const WALK_SPEED: f64 = 65.0;
    pub const RUN_SPEED: f64 = 120.0;
    /// Horizontal drift while playing the jump animation
    pub const JUMP_SPEED: f64 = 120.0;

    /// Pointer further than this is chased at a run
    pub const RUN_THRESHOLD: f64 = BODY_WIDTH * 5.0;
    /// A running cat this close to the pointer jumps at it
    pub const JUMP_THRESHOLD: f64 = BODY_WIDTH * 1.7;
    /// Pointer this close is "touching"
    pub const TOUCH_THRESHOLD: f64 = BODY_WIDTH;
    /// Moves shorter than this count as already arrived
    pub const ARRIVE_THRESHOLD: f64 = BODY_WIDTH / 2.0;

    /// Debounce before reacting to a newly-present pointer (ms)
    pub const CURSOR_REACT_DELAY_MS: f64 = 500.0;
    /// Upper bound on a single tick delta (ms)
    pub const MAX_TICK_MS: f64 = 100.0;
}

/// Clamp a sprite's left edge into a container of the given width.
///
/// Containers narrower than the sprite pin it at 0.
#[inline]
pub fn clamp_x(x: f64, viewport_width: f64) -> f64 {
    x.min(viewport_width - consts::SCALED_SIZE).max(0.0)
}

/// Rightmost valid left edge for the sprite.
#[inline]
pub fn max_x(viewport_width: f64) -> f64 {
    clamp_x(f64::INFINITY, viewport_width)
}

//! Behaviour simulation module
//!
//! All creature logic lives here. This module is pure:
//! - Time only arrives through `TickInput::dt_ms`
//! - Seeded RNG owned by the state
//! - No rendering or platform dependencies

pub mod anim;
pub mod behavior;
pub mod state;
pub mod tick;

pub use anim::{Animation, AnimationDef, IdleRange, WANDER_SEQUENCE};
pub use state::{CreatureState, Facing, ReactionDelay, WanderCursor};
pub use tick::{TickInput, TickReport, Transition, TransitionCause, tick};

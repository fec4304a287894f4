//! Per-frame simulation tick
//!
//! Advances animation, pointer edges, the reaction timer and movement, in
//! that order. Any transition takes effect immediately, so later steps in the
//! same tick see the new state.

use serde::Serialize;

use super::anim::Animation;
use super::behavior;
use super::state::{CreatureState, ReactionDelay, WanderCursor};
use crate::consts::*;

/// Inputs for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Elapsed time since the previous tick (already capped by the clock)
    pub dt_ms: f64,
    /// Pointer offset from the container's left edge, if inside it
    pub pointer_x: Option<f64>,
    /// Current container width
    pub viewport_width: f64,
}

/// Why a behaviour transition happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransitionCause {
    /// A one-shot animation finished its cycle
    CycleComplete,
    /// The pointer left while the cat was walking to it
    PointerLeft,
    /// The pointer stayed long enough to be noticed
    ReactionElapsed,
    /// Movement reached its target
    Arrived,
    /// A running cat got close enough to pounce
    JumpInterrupt,
    /// An idle loop ran out
    IdleExpired,
}

/// A transition and the animation it led to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub cause: TransitionCause,
    pub animation: Animation,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub transitions: Vec<Transition>,
}

impl TickReport {
    fn record(&mut self, cause: TransitionCause, state: &CreatureState) {
        self.transitions.push(Transition {
            cause,
            animation: state.animation,
        });
    }
}

/// Advance the creature by one frame
pub fn tick(state: &mut CreatureState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    // NaN and negative deltas become 0
    let dt = input.dt_ms.max(0.0).min(MAX_TICK_MS);
    let pointer = input.pointer_x;
    state.viewport_width = input.viewport_width;
    state.position_x = state.clamp(state.position_x);

    if advance_frame(state, dt) && state.animation.plays_once() {
        behavior::next(state, pointer);
        report.record(TransitionCause::CycleComplete, state);
    }

    handle_pointer_edges(state, pointer, &mut report);
    count_down_reaction(state, pointer, dt, &mut report);
    update_position(state, pointer, dt, &mut report);

    report
}

/// Accumulate time into the current animation.
///
/// Returns whether the frame index wrapped back to 0.
pub fn advance_frame(state: &mut CreatureState, dt: f64) -> bool {
    let def = state.animation.def();
    let frame_ms = def.frame_duration_ms();
    state.frame_elapsed_ms += dt;

    let mut wrapped = false;
    while state.frame_elapsed_ms >= frame_ms {
        state.frame_index += 1;
        if state.frame_index >= def.frame_count {
            state.frame_index = 0;
            wrapped = true;
        }
        state.frame_elapsed_ms -= frame_ms;
    }
    wrapped
}

fn handle_pointer_edges(state: &mut CreatureState, pointer: Option<f64>, report: &mut TickReport) {
    let present = pointer.is_some();
    let entered = present && !state.previous_pointer_present;
    let left = !present && state.previous_pointer_present;

    if entered {
        state.reaction = ReactionDelay::Pending {
            remaining_ms: CURSOR_REACT_DELAY_MS,
        };
    }
    if left {
        let had_reacted = state.reaction == ReactionDelay::Idle;
        state.wander = WanderCursor::Reset;
        state.reaction = ReactionDelay::Idle;
        if had_reacted && state.moving {
            state.start_idle(Animation::Sitting);
            report.record(TransitionCause::PointerLeft, state);
        }
    }

    state.previous_pointer_present = present;
}

fn count_down_reaction(
    state: &mut CreatureState,
    pointer: Option<f64>,
    dt: f64,
    report: &mut TickReport,
) {
    if let ReactionDelay::Pending { remaining_ms } = state.reaction {
        let remaining_ms = remaining_ms - dt;
        if remaining_ms > 0.0 {
            state.reaction = ReactionDelay::Pending { remaining_ms };
        } else if pointer.is_some() && !state.animation.plays_once() {
            state.reaction = ReactionDelay::Idle;
            behavior::next(state, pointer);
            report.record(TransitionCause::ReactionElapsed, state);
        } else {
            state.reaction = ReactionDelay::Lapsed;
        }
    }
}

fn update_position(state: &mut CreatureState, pointer: Option<f64>, dt: f64, report: &mut TickReport) {
    if state.moving {
        if state.animation == Animation::Running
            && pointer.is_some()
            && state.distance_to(pointer) < JUMP_THRESHOLD
        {
            // Pounce in place; drift carries on until the jump completes
            state.moving = false;
            state.set_animation(Animation::Jumping);
            report.record(TransitionCause::JumpInterrupt, state);
            return;
        }

        let step = state.facing.sign() * state.speed * dt / 1000.0;
        state.position_x = state.clamp(state.position_x + step);
        let reached = if state.facing.sign() > 0.0 {
            state.position_x >= state.target_x
        } else {
            state.position_x <= state.target_x
        };
        if reached {
            state.position_x = state.clamp(state.target_x);
            behavior::next(state, pointer);
            report.record(TransitionCause::Arrived, state);
        }
    } else {
        if state.animation == Animation::Jumping {
            let drift = state.facing.sign() * JUMP_SPEED * dt / 1000.0;
            state.position_x = state.clamp(state.position_x + drift);
        }
        if !state.animation.plays_once() {
            state.idle_remaining_ms -= dt;
            if state.idle_remaining_ms <= 0.0 {
                behavior::next(state, pointer);
                report.record(TransitionCause::IdleExpired, state);
            }
        }
    }
}

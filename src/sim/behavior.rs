//! Behaviour decisions: what the cat does next
//!
//! `next` is the single dispatch point. With a pointer present the cat
//! follows it, otherwise it steps through the wander script.

use super::anim::{Animation, WANDER_SEQUENCE};
use super::state::CreatureState;
use crate::consts::*;

/// Choose and start the next animation/movement
pub fn next(state: &mut CreatureState, pointer_x: Option<f64>) {
    match pointer_x {
        Some(x) => follow_cursor(state, x),
        None => wander(state),
    }
}

/// Walk or run to just short of the pointer; touch it when close enough
pub fn follow_cursor(state: &mut CreatureState, pointer_x: f64) {
    let dist = state.distance_to(Some(pointer_x));
    if dist < TOUCH_THRESHOLD {
        state.start_idle(Animation::Touching);
        return;
    }

    // Stop on the near side of the pointer
    let side = if pointer_x > state.center_x() { 0.75 } else { 0.25 };
    let already_running = state.moving && state.animation == Animation::Running;
    let gait = if already_running || dist > RUN_THRESHOLD {
        Animation::Running
    } else {
        Animation::Walking
    };
    begin_move(state, gait, pointer_x - SCALED_SIZE * side, Some(pointer_x));
}

/// Play the next step of the wander script
pub fn wander(state: &mut CreatureState) {
    let step = WANDER_SEQUENCE[state.wander.advance()];
    if step.is_gait() {
        let target = state.random_x();
        begin_move(state, step, target, None);
    } else {
        if step == Animation::Jumping {
            state.randomize_facing();
        }
        state.start_idle(step);
    }
}

/// Start moving toward `target_x`, or settle in place if already there
pub fn begin_move(state: &mut CreatureState, gait: Animation, target_x: f64, pointer_x: Option<f64>) {
    let target_x = state.clamp(target_x);
    let dx = target_x - state.position_x;
    if dx.abs() < ARRIVE_THRESHOLD {
        let settle = if state.distance_to(pointer_x) < TOUCH_THRESHOLD {
            Animation::Touching
        } else {
            Animation::Sitting
        };
        state.start_idle(settle);
        return;
    }
    state.start_gait(gait, target_x);
}

//! Sprite Pet entry point
//!
//! On the web, starts the pet inside the page's container. Natively, runs a
//! headless simulation and logs what the cat gets up to.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = sprite_pet::platform::web::start() {
        log::error!("Pet failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sprite_pet::pointer::{ContainerRect, PointerTracker};
    use sprite_pet::{ManualClock, Pet};

    env_logger::init();
    log::info!("Sprite Pet (native) starting headless run...");
    log::info!("Build for wasm32 and serve the page for the browser version");

    const WIDTH: f64 = 800.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const RUN_SECONDS: u32 = 120;
    let rect = ContainerRect {
        left: 0.0,
        top: 0.0,
        right: WIDTH,
        bottom: 100.0,
    };

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    let mut pet = Pet::new(seed, WIDTH, PointerTracker::new(false));
    let mut clock = ManualClock::new(FRAME_MS);

    let frames = (RUN_SECONDS as f64 * 1000.0 / FRAME_MS) as u64;
    let mut transitions = 0;
    for i in 0..frames {
        let second = (i as f64 * FRAME_MS / 1000.0) as u32;
        // Pointer visits the right side for a while, then leaves
        match second {
            30 => pet.pointer.on_move(WIDTH - 40.0, 50.0, &rect),
            45 => pet.pointer.on_move(120.0, 50.0, &rect),
            60 => pet.pointer.on_leave(),
            _ => {}
        }

        let (_, report) = pet.advance(&mut clock, WIDTH);
        for t in &report.transitions {
            transitions += 1;
            log::info!(
                "{:>6.2}s {:?} -> {} (x={:.1}, facing {:?})",
                i as f64 * FRAME_MS / 1000.0,
                t.cause,
                t.animation,
                pet.state.position_x,
                pet.state.facing
            );
        }
    }

    log::info!("Done: {} frames, {} transitions", pet.ticks(), transitions);
}

//! Browser startup and frame loop

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent, Window};

use crate::pet::Pet;
use crate::pointer::{ContainerRect, PointerTracker};
use crate::renderer::dom::SpriteElement;
use crate::settings::PetSettings;

/// Everything the frame loop touches
struct Host {
    pet: Pet,
    container: HtmlElement,
    sprite: SpriteElement,
}

/// Start the pet if the page has a container for it
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Filtered down once settings are known
    let _ = console_log::init_with_level(log::Level::Trace);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let Some(container) = document.get_element_by_id(PetSettings::CONTAINER_ID) else {
        log::info!("No #{} container, pet disabled", PetSettings::CONTAINER_ID);
        return Ok(());
    };

    let settings = PetSettings::from_attribute(
        container.get_attribute(PetSettings::DATA_ATTRIBUTE).as_deref(),
    );
    log::set_max_level(settings.log_level.to_level().to_level_filter());

    let container: HtmlElement = container.dyn_into()?;
    let sprite = SpriteElement::create(&document, &container, &settings.sprite_url)?;

    let touch = is_touch_device(&window);
    let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let width = container.offset_width() as f64;
    let pet = Pet::new(seed, width, PointerTracker::new(touch));

    let host = Rc::new(RefCell::new(Host {
        pet,
        container,
        sprite,
    }));

    if host.borrow().pet.pointer.is_suppressed() {
        log::info!("Touch device, pointer tracking disabled");
    } else {
        setup_pointer_handlers(&window, host.clone())?;
    }

    request_animation_frame(host);
    log::info!("Pet running");
    Ok(())
}

fn is_touch_device(window: &Window) -> bool {
    let has_ontouchstart = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_ontouchstart || window.navigator().max_touch_points() > 0
}

fn setup_pointer_handlers(window: &Window, host: Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let document = window.document().ok_or("no document")?;

    // Mouse move - offset relative to the container, absent when outside it
    {
        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut h = host.borrow_mut();
            let r = h.container.get_bounding_client_rect();
            let rect = ContainerRect {
                left: r.left(),
                top: r.top(),
                right: r.right(),
                bottom: r.bottom(),
            };
            h.pet
                .pointer
                .on_move(event.client_x() as f64, event.client_y() as f64, &rect);
        });
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse leaves the page
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            host.borrow_mut().pet.pointer.on_leave();
        });
        document.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn request_animation_frame(host: Rc<RefCell<Host>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        frame_loop(host, time);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
        return;
    }
    closure.forget();
}

fn frame_loop(host: Rc<RefCell<Host>>, time: f64) {
    {
        let mut h = host.borrow_mut();
        let width = h.container.offset_width() as f64;
        let (frame, _) = h.pet.frame(time, width);
        if let Err(e) = h.sprite.apply(&frame) {
            log::warn!("Sprite update failed: {:?}", e);
        }
    }

    request_animation_frame(host);
}

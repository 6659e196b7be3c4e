#![cfg(target_arch = "wasm32")]
use crate::core::{Animation, ParticleField, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod splash;

use constants::MAIN_CONTENT_ID;

thread_local! {
    // Lets the host page stop the loop; the loop itself never needs it.
    static LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

struct FieldParts {
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    surface: render::CanvasSurface,
    field: Rc<RefCell<ParticleField>>,
    pointer: Rc<RefCell<PointerState>>,
}

fn build_field(document: &web::Document) -> anyhow::Result<FieldParts> {
    let container = document
        .get_element_by_id(MAIN_CONTENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MAIN_CONTENT_ID))?;
    let canvas = dom::create_canvas(document, &container)?;
    let surface = render::CanvasSurface::new(dom::context_2d(&canvas)?);

    let config = dom::read_field_config(&container);
    let pointer = PointerState::new(config.mouse_idle_timeout, config.touch_idle_timeout);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let mut field = ParticleField::new(config, seed);
    field.resize(dom::sync_canvas_to_container(&canvas, &container));
    log::info!(
        "[field] {} points, spacing {:.0}",
        field.points().len(),
        field.config.point_spacing
    );

    Ok(FieldParts {
        container,
        canvas,
        surface,
        field: Rc::new(RefCell::new(field)),
        pointer: Rc::new(RefCell::new(pointer)),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the particle animation. Safe to call before it has started.
#[wasm_bindgen(js_name = stopAmbientField)]
pub fn stop_ambient_field() {
    LOOP.with(|l| {
        if let Some(handle) = l.borrow().as_ref() {
            handle.stop();
        }
    });
}

/// Whether the particle animation is currently running.
#[wasm_bindgen(js_name = isAmbientFieldRunning)]
pub fn is_ambient_field_running() -> bool {
    LOOP.with(|l| l.borrow().as_ref().is_some_and(|h| h.is_running()))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let FieldParts {
        container,
        canvas,
        surface,
        field,
        pointer,
    } = build_field(&document)?;

    events::wire_resize(canvas.clone(), container.clone(), field.clone());
    events::wire_input_handlers(
        events::InputWiring {
            container,
            pointer: pointer.clone(),
        },
        input::is_mobile_device(),
    );

    // The intro ending is the only start trigger.
    splash::run(&document, move || {
        dom::show_canvas(&canvas);
        let handle = frame::start_loop(frame::FrameContext {
            field,
            pointer,
            animation: Rc::new(RefCell::new(Animation::default())),
            surface,
        });
        LOOP.with(|l| *l.borrow_mut() = Some(handle));
    });

    Ok(())
}

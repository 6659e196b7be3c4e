use crate::core::ParticleField;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize the canvas and rebuild the grid on every window resize.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    container: web::Element,
    field: Rc<RefCell<ParticleField>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        let bounds = dom::sync_canvas_to_container(&canvas, &container);
        field.borrow_mut().resize(bounds);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

use crate::core::PointerState;
use crate::input;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::Element,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Desktop gets mouse listeners, touch devices get touch listeners.
pub fn wire_input_handlers(w: InputWiring, mobile: bool) {
    if mobile {
        log::info!("[pointer] touch input");
        wire_touchstart(&w);
        wire_touchmove(&w);
        wire_touchend(&w);
    } else {
        log::info!("[pointer] mouse input");
        wire_mousemove(&w);
        wire_mouseleave(&w);
    }
}

fn listen_mouse(
    target: &web::Element,
    event: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn listen_touch(
    target: &web::Element,
    event: &str,
    handler: impl FnMut(web::TouchEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::TouchEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    let target = w.container.clone();
    listen_mouse(&target, "mousemove", move |ev: web::MouseEvent| {
        let pos = input::mouse_in_element(&ev, &w.container);
        w.pointer.borrow_mut().mouse_move(pos, Instant::now());
    });
}

fn wire_mouseleave(w: &InputWiring) {
    let w = w.clone();
    let target = w.container.clone();
    listen_mouse(&target, "mouseleave", move |_ev: web::MouseEvent| {
        w.pointer.borrow_mut().mouse_leave();
    });
}

fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let target = w.container.clone();
    listen_touch(&target, "touchstart", move |ev: web::TouchEvent| {
        if let Some(pos) = input::touch_in_element(&ev, &w.container) {
            w.pointer.borrow_mut().touch_start(pos, Instant::now());
        }
    });
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let target = w.container.clone();
    listen_touch(&target, "touchmove", move |ev: web::TouchEvent| {
        if let Some(pos) = input::touch_in_element(&ev, &w.container) {
            w.pointer.borrow_mut().touch_move(pos, Instant::now());
        }
    });
}

fn wire_touchend(w: &InputWiring) {
    let w = w.clone();
    let target = w.container.clone();
    listen_touch(&target, "touchend", move |_ev: web::TouchEvent| {
        w.pointer.borrow_mut().touch_end(Instant::now());
    });
}

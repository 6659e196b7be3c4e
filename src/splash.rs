use crate::constants::{
    LOGO_ALT, LOGO_CIRCLE_CLASS, LOGO_CONTAINER_CLASS, LOGO_SRC, RISE_UP_ANIMATION, RISE_UP_CLASS,
    SPLASH_HOLD_MS, SPLASH_SCREEN_ID,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build the splash logo, hold it, play the rise-up animation and call
/// `on_finished` once it ends. Without a splash element `on_finished` runs
/// immediately.
pub fn run(document: &web::Document, on_finished: impl FnOnce() + 'static) {
    let Some(splash) = document.get_element_by_id(SPLASH_SCREEN_ID) else {
        log::info!("[splash] no #{} element, starting directly", SPLASH_SCREEN_ID);
        on_finished();
        return;
    };

    if let Err(e) = build_logo(document, &splash) {
        log::warn!("[splash] logo setup failed: {:?}", e);
    }
    wire_rise_up_end(&splash, on_finished);
    schedule_rise_up(&splash);
}

fn build_logo(
    document: &web::Document,
    splash: &web::Element,
) -> Result<(), wasm_bindgen::JsValue> {
    let container = document.create_element("div")?;
    container.set_class_name(LOGO_CONTAINER_CLASS);

    let circle = document.create_element("div")?;
    circle.set_class_name(LOGO_CIRCLE_CLASS);
    container.append_child(&circle)?;

    let logo = document.create_element("img")?;
    logo.set_attribute("src", LOGO_SRC)?;
    logo.set_attribute("alt", LOGO_ALT)?;
    container.append_child(&logo)?;

    splash.append_child(&container)?;
    Ok(())
}

fn schedule_rise_up(splash: &web::Element) {
    let splash = splash.clone();
    let closure = Closure::wrap(Box::new(move || {
        _ = splash.class_list().add_1(RISE_UP_CLASS);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SPLASH_HOLD_MS,
        );
    }
    closure.forget();
}

fn wire_rise_up_end(splash: &web::Element, on_finished: impl FnOnce() + 'static) {
    let splash_for_end = splash.clone();
    let mut on_finished = Some(on_finished);
    let closure = Closure::wrap(Box::new(move |ev: web::AnimationEvent| {
        if ev.animation_name() != RISE_UP_ANIMATION {
            return;
        }
        if let Some(f) = on_finished.take() {
            log::info!("[splash] intro finished");
            f();
            splash_for_end.remove();
        }
    }) as Box<dyn FnMut(_)>);
    _ = splash.add_event_listener_with_callback("animationend", closure.as_ref().unchecked_ref());
    closure.forget();
}

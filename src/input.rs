use crate::constants::MOBILE_UA_MARKERS;
use glam::Vec2;
use web_sys as web;

// ---------------- Pure helpers ----------------
#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m))
}

/// Client coordinates relative to an element whose bounding rect starts at
/// (`left`, `top`).
#[inline]
pub fn relative_to_rect(client_x: f64, client_y: f64, left: f64, top: f64) -> Vec2 {
    Vec2::new((client_x - left) as f32, (client_y - top) as f32)
}

// ---------------- DOM helpers ----------------
pub fn is_mobile_device() -> bool {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| is_mobile_user_agent(&ua))
        .unwrap_or(false)
}

#[inline]
pub fn mouse_in_element(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    relative_to_rect(ev.client_x() as f64, ev.client_y() as f64, rect.left(), rect.top())
}

/// Position of the first active touch, if any.
#[inline]
pub fn touch_in_element(ev: &web::TouchEvent, el: &web::Element) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    let rect = el.get_bounding_client_rect();
    Some(relative_to_rect(
        touch.client_x() as f64,
        touch.client_y() as f64,
        rect.left(),
        rect.top(),
    ))
}

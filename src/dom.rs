use crate::constants::{CANVAS_HIDDEN_STYLE, CANVAS_VISIBLE_STYLE, CONFIG_ATTR_PREFIX};
use crate::core::{Bounds, FieldConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create a hidden canvas as the last child of `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.set_attribute("style", CANVAS_HIDDEN_STYLE);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Measure `container` and size the canvas backing store to match.
pub fn sync_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
) -> Bounds {
    let rect = container.get_bounding_client_rect();
    let w = rect.width().max(0.0);
    let h = rect.height().max(0.0);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Bounds::from_size(w as f32, h as f32)
}

#[inline]
pub fn show_canvas(canvas: &web::HtmlCanvasElement) {
    _ = canvas.set_attribute("style", CANVAS_VISIBLE_STYLE);
}

/// Defaults overridden by `data-*` attributes on `container`.
pub fn read_field_config(container: &web::Element) -> FieldConfig {
    let values: Vec<(&str, String)> = FieldConfig::OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            container
                .get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key))
                .map(|v| (*key, v))
        })
        .collect();
    let config =
        FieldConfig::default().with_overrides(values.iter().map(|(k, v)| (*k, v.as_str())));
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            FieldConfig::default()
        }
    }
}

use crate::core::{Bounds, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` over a 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, bounds: &Bounds) {
        self.ctx.clear_rect(
            bounds.left as f64,
            bounds.top as f64,
            bounds.width() as f64,
            bounds.height() as f64,
        );
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, css_color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::debug!("[render] arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(css_color);
        self.ctx.fill();
    }
}

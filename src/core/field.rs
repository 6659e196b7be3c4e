use super::color::{Rgb, PALETTE};
use super::config::FieldConfig;
use super::constants::{DENSITY_MAX, DENSITY_MIN};
use super::geometry::Bounds;
use super::point::Point;
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// Anything the field can be drawn on.
pub trait Surface {
    /// Erase everything inside `bounds`.
    fn clear(&mut self, bounds: &Bounds);
    /// Fill a disc with a CSS color string.
    fn fill_disc(&mut self, center: Vec2, radius: f32, css_color: &str);
}

/// The ambient particle field: a grid of spring-anchored points that drift
/// toward a moving pointer and settle back home once it goes idle.
///
/// Nothing here touches the DOM. The web frontend supplies bounds, the current
/// attractor and a [`Surface`] to draw on.
pub struct ParticleField {
    pub config: FieldConfig,
    bounds: Option<Bounds>,
    points: Vec<Point>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            bounds: None,
            points: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_configured(&self) -> bool {
        self.bounds.is_some()
    }

    /// Discard every point and lay out a fresh grid inside `bounds`.
    pub fn configure(&mut self, bounds: Bounds, spacing: f32) {
        self.bounds = Some(bounds);
        self.points.clear();

        let (columns, rows) = grid_dimensions(&bounds, spacing);
        self.points.reserve(columns * rows);
        let half = spacing / 2.0;
        for i in 0..columns {
            for j in 0..rows {
                let origin = Vec2::new(
                    bounds.left + half + i as f32 * spacing,
                    bounds.top + half + j as f32 * spacing,
                );
                let density = self.rng.gen_range(DENSITY_MIN..DENSITY_MAX);
                let color = self.pick_color();
                self.points.push(Point::new(origin, density, color));
            }
        }
        log::debug!(
            "[field] configured {}x{} grid ({} points) in {:.0}x{:.0}",
            columns,
            rows,
            self.points.len(),
            bounds.width(),
            bounds.height()
        );
    }

    /// Rebuild for new bounds using the configured spacing.
    pub fn resize(&mut self, bounds: Bounds) {
        let spacing = self.config.point_spacing;
        self.configure(bounds, spacing);
    }

    /// Advance every point by one frame. A no-op until configured.
    pub fn tick(&mut self, attractor: Option<Vec2>, elapsed: Duration) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let attractor = attractor.filter(|_| self.config.interaction_enabled);
        let fade = self.config.fade_duration;
        let return_force = self.config.return_force();
        for p in &mut self.points {
            p.fade_in(elapsed, fade);
            p.step(attractor, return_force, &bounds);
        }
    }

    /// Clear the surface and draw every visible point.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some(bounds) = self.bounds else {
            return;
        };
        surface.clear(&bounds);
        for p in self.points.iter().filter(|p| p.is_visible()) {
            let color = p.color().css_rgba(p.opacity());
            surface.fill_disc(p.position, p.radius(), &color);
        }
    }

    fn pick_color(&mut self) -> Rgb {
        PALETTE.choose(&mut self.rng).copied().unwrap_or(PALETTE[0])
    }
}

/// Columns and rows of a grid with `spacing` that fits inside `bounds`.
pub fn grid_dimensions(bounds: &Bounds, spacing: f32) -> (usize, usize) {
    if !(spacing.is_finite() && spacing > 0.0) || bounds.is_empty() {
        return (0, 0);
    }
    let columns = (bounds.width() / spacing).floor();
    let rows = (bounds.height() / spacing).floor();
    if !(columns.is_finite() && rows.is_finite()) {
        return (0, 0);
    }
    (columns as usize, rows as usize)
}

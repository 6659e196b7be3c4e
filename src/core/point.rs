use super::color::Rgb;
use super::constants::{
    boundary_buffer, velocity_decay, ATTRACTION_FACTOR, MAX_DISTANCE, MAX_OPACITY, MAX_SPEED,
    POINT_RADIUS, RESTITUTION, RETURN_RAMP_DISTANCE,
};
use super::geometry::Bounds;
use glam::Vec2;
use std::time::Duration;

/// One particle of the field, anchored to its grid cell by a spring.
#[derive(Clone, Debug)]
pub struct Point {
    pub position: Vec2,
    pub origin: Vec2,
    pub velocity: Vec2,
    density: f32,
    color: Rgb,
    opacity: f32,
}

impl Point {
    pub fn new(origin: Vec2, density: f32, color: Rgb) -> Self {
        Self {
            position: origin,
            origin,
            velocity: Vec2::ZERO,
            density,
            color,
            opacity: 0.0,
        }
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        POINT_RADIUS
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Linear ramp from 0 to `MAX_OPACITY` over `fade`.
    pub fn fade_in(&mut self, elapsed: Duration, fade: Duration) {
        self.opacity = fade_opacity(elapsed, fade);
    }

    /// Advance one frame. `attractor` is the pointer position when the pointer
    /// is currently moving; `return_force` is the spring constant in use.
    pub fn step(&mut self, attractor: Option<Vec2>, return_force: f32, bounds: &Bounds) {
        let pull = attractor.and_then(|p| {
            let delta = p - self.position;
            let d = delta.length();
            (d < MAX_DISTANCE).then_some((delta, d))
        });
        match pull {
            Some((delta, d)) => {
                // coincident with the pointer: no direction to push along
                if d > 0.0 {
                    let force = (MAX_DISTANCE - d) / MAX_DISTANCE;
                    self.velocity += delta / d * force * self.density * ATTRACTION_FACTOR;
                }
            }
            None => {
                let delta = self.origin - self.position;
                let d = delta.length();
                let factor = (d / RETURN_RAMP_DISTANCE).min(1.0) * return_force;
                self.velocity += delta * factor;
            }
        }

        self.velocity *= velocity_decay();

        let speed = self.velocity.length();
        if speed > MAX_SPEED {
            self.velocity *= MAX_SPEED / speed;
        }

        self.position += self.velocity;
        self.collide(bounds);
    }

    fn collide(&mut self, bounds: &Bounds) {
        let buffer = boundary_buffer();
        let (min_x, max_x) = (bounds.left + buffer, bounds.right - buffer);
        let (min_y, max_y) = (bounds.top + buffer, bounds.bottom - buffer);
        if self.position.x < min_x || self.position.x > max_x {
            self.velocity.x *= RESTITUTION;
            self.position.x = clamp_axis(self.position.x, min_x, max_x);
        }
        if self.position.y < min_y || self.position.y > max_y {
            self.velocity.y *= RESTITUTION;
            self.position.y = clamp_axis(self.position.y, min_y, max_y);
        }
    }
}

/// Opacity after `elapsed` of a fade lasting `fade`.
pub fn fade_opacity(elapsed: Duration, fade: Duration) -> f32 {
    if fade.is_zero() {
        return MAX_OPACITY;
    }
    let progress = elapsed.as_secs_f64() / fade.as_secs_f64();
    ((progress * MAX_OPACITY as f64) as f32).min(MAX_OPACITY)
}

// `f32::clamp` panics when min > max, which happens for fields narrower than
// twice the buffer; the lower edge wins there.
#[inline]
fn clamp_axis(v: f32, min: f32, max: f32) -> f32 {
    min.max(v.min(max))
}

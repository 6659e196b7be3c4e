// Physics and timing constants for the ambient particle field.
// Distances are CSS pixels; velocities are pixels per frame.

// Grid layout
pub const POINT_SPACING: f32 = 30.0; // distance between neighbouring rest positions
pub const POINT_RADIUS: f32 = 2.0;

// Pointer attraction
pub const MAX_DISTANCE: f32 = 100.0; // attraction reach around the pointer
pub const ATTRACTION_FACTOR: f32 = 0.5;

// Return-to-origin spring
pub const RETURN_FORCE: f32 = 0.03;
pub const RETURN_RAMP_DISTANCE: f32 = 50.0; // displacement where the spring reaches full strength
pub const SNAPPY_RETURN_BOOST: f32 = 1.5;

// Damping and limits
pub const DRAG_FORCE: f32 = 0.975;
pub const DAMPING: f32 = 0.98;
pub const MAX_SPEED: f32 = 2.5;
pub const RESTITUTION: f32 = -0.5; // velocity multiplier on wall contact

// Per-point density range [min, max)
pub const DENSITY_MIN: f32 = 1.0;
pub const DENSITY_MAX: f32 = 21.0;

// Opacity
pub const MAX_OPACITY: f32 = 0.3;
pub const FADE_DURATION_MS: u64 = 1000;

// Pointer idle timeouts
pub const MOUSE_IDLE_TIMEOUT_MS: u64 = 100;
pub const TOUCH_IDLE_TIMEOUT_MS: u64 = 150;

/// Velocity multiplier applied once per tick.
#[inline]
pub const fn velocity_decay() -> f32 {
    DRAG_FORCE * DAMPING
}

/// Distance kept between a point and each edge of the field.
#[inline]
pub const fn boundary_buffer() -> f32 {
    POINT_RADIUS * 2.0
}

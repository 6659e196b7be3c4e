// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_within_reasonable_bounds() {
    // Decay must shrink velocity every tick
    assert!(velocity_decay() > 0.0 && velocity_decay() < 1.0);
    assert!((velocity_decay() - 0.9555).abs() < 1e-6);

    // Restitution reflects and loses energy
    assert!(RESTITUTION < 0.0 && RESTITUTION > -1.0);

    // Springs and limits
    assert!(RETURN_FORCE > 0.0 && RETURN_FORCE < 1.0);
    assert!(SNAPPY_RETURN_BOOST > 1.0);
    assert!(MAX_SPEED > 0.0);
    assert!(MAX_DISTANCE > POINT_SPACING);

    // Opacity
    assert!(MAX_OPACITY > 0.0 && MAX_OPACITY <= 1.0);
    assert!(FADE_DURATION_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_and_boundary_relationships() {
    // Buffer is twice the radius and fits between a cell center and its edge
    assert_eq!(boundary_buffer(), POINT_RADIUS * 2.0);
    assert!(boundary_buffer() < POINT_SPACING / 2.0);
    assert!(DENSITY_MIN >= 1.0 && DENSITY_MAX > DENSITY_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_timeouts_favour_touch() {
    assert!(MOUSE_IDLE_TIMEOUT_MS > 0);
    assert!(TOUCH_IDLE_TIMEOUT_MS > MOUSE_IDLE_TIMEOUT_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn splash_and_dom_constants_are_consistent() {
    assert!(SPLASH_HOLD_MS > 1200);
    assert!(!MAIN_CONTENT_ID.is_empty() && !SPLASH_SCREEN_ID.is_empty());
    assert_ne!(MAIN_CONTENT_ID, SPLASH_SCREEN_ID);
    assert!(MOBILE_UA_MARKERS.iter().all(|m| m.chars().all(|c| c.is_ascii_lowercase())));
    assert!(CONFIG_ATTR_PREFIX.ends_with('-'));
}

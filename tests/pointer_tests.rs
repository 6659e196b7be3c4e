// Host-side tests for pointer activity and the animation lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod animation {
    include!("../src/core/animation.rs");
}

use animation::*;
use glam::Vec2;
use instant::Instant;
use pointer::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn no_reports_means_not_moving() {
    let p = PointerState::default();
    let now = Instant::now();
    assert!(!p.is_moving(now));
    assert_eq!(p.position(now), None);
    assert_eq!(p.attractor(now), None);
}

#[test]
fn mouse_goes_idle_after_100ms() {
    let mut p = PointerState::default();
    let t0 = Instant::now();
    let pos = Vec2::new(40.0, 60.0);
    p.mouse_move(pos, t0);

    assert!(p.is_moving(t0));
    assert!(p.is_moving(t0 + ms(99)));
    assert_eq!(p.attractor(t0 + ms(50)), Some(pos));

    let later = t0 + ms(100) + Duration::from_micros(1);
    assert!(!p.is_moving(later));
    assert_eq!(p.attractor(later), None);
    // the mouse position itself is kept for when it moves again
    assert_eq!(p.position(later), Some(pos));
}

#[test]
fn each_movement_restarts_the_idle_window() {
    let mut p = PointerState::default();
    let t0 = Instant::now();
    p.mouse_move(Vec2::new(1.0, 1.0), t0);
    p.mouse_move(Vec2::new(2.0, 2.0), t0 + ms(80));

    assert!(p.is_moving(t0 + ms(150)));
    assert_eq!(p.attractor(t0 + ms(150)), Some(Vec2::new(2.0, 2.0)));
    assert!(!p.is_moving(t0 + ms(181)));
}

#[test]
fn clock_going_backwards_counts_as_zero_elapsed() {
    let mut p = PointerState::default();
    let t0 = Instant::now();
    p.mouse_move(Vec2::new(1.0, 1.0), t0 + ms(500));
    assert!(p.is_moving(t0));
}

#[test]
fn mouse_leave_forgets_position() {
    let mut p = PointerState::default();
    let t0 = Instant::now();
    p.mouse_move(Vec2::new(10.0, 10.0), t0);
    p.mouse_leave();
    assert!(!p.is_moving(t0));
    assert_eq!(p.position(t0), None);
    assert_eq!(p.attractor(t0), None);
}

#[test]
fn held_touch_stays_active() {
    let mut p = PointerState::default();
    let t0 = Instant::now();
    let pos = Vec2::new(120.0, 80.0);
    p.touch_start(pos, t0);
    assert!(p.is_moving(t0 + Duration::from_secs(10)));
    assert_eq!(p.attractor(t0 + Duration::from_secs(10)), Some(pos));

    let moved = Vec2::new(130.0, 90.0);
    p.touch_move(moved, t0 + ms(20));
    assert_eq!(p.attractor(t0 + ms(5000)), Some(moved));
}

#[test]
fn released_touch_lapses_after_150ms_and_forgets_position() {
    let mut p = PointerState::default();
    let t0 = Instant::now();
    let pos = Vec2::new(5.0, 5.0);
    p.touch_start(pos, t0);
    let released = t0 + ms(300);
    p.touch_end(released);

    assert!(p.is_moving(released + ms(149)));
    assert_eq!(p.position(released + ms(149)), Some(pos));

    let idle = released + ms(150);
    assert!(!p.is_moving(idle));
    assert_eq!(p.position(idle), None);
    assert_eq!(p.attractor(idle), None);
}

#[test]
fn mouse_after_touch_uses_mouse_timeout() {
    let mut p = PointerState::default();
    let t0 = Instant::now();
    p.touch_start(Vec2::new(1.0, 1.0), t0);
    p.touch_end(t0);
    p.mouse_move(Vec2::new(3.0, 3.0), t0 + ms(10));
    assert!(p.is_moving(t0 + ms(109)));
    assert!(!p.is_moving(t0 + ms(111)));
    assert_eq!(p.position(t0 + ms(500)), Some(Vec2::new(3.0, 3.0)));
}

#[test]
fn custom_timeouts_apply() {
    let mut p = PointerState::new(ms(30), ms(60));
    let t0 = Instant::now();
    p.mouse_move(Vec2::ZERO, t0);
    assert!(!p.is_moving(t0 + ms(30)));
    p.touch_start(Vec2::ZERO, t0);
    p.touch_end(t0);
    assert!(p.is_moving(t0 + ms(59)));
    assert!(!p.is_moving(t0 + ms(60)));
}

#[test]
fn animation_starts_dormant() {
    let a = Animation::default();
    assert_eq!(a.phase(), Phase::Dormant);
    assert!(!a.is_running());
    assert_eq!(a.elapsed(Instant::now()), None);
}

#[test]
fn animation_start_is_single_shot_while_running() {
    let mut a = Animation::default();
    let t0 = Instant::now();
    assert!(a.start(t0));
    assert!(!a.start(t0 + ms(10)));
    assert_eq!(a.elapsed(t0 + ms(250)), Some(ms(250)));
    assert_eq!(a.elapsed(t0), Some(Duration::ZERO));
}

#[test]
fn animation_stop_and_restart() {
    let mut a = Animation::default();
    let t0 = Instant::now();
    a.stop();
    assert_eq!(a.phase(), Phase::Dormant);

    a.start(t0);
    a.stop();
    assert_eq!(a.phase(), Phase::Stopped);
    assert_eq!(a.elapsed(t0 + ms(5)), None);

    let t1 = t0 + ms(1000);
    assert!(a.start(t1));
    assert_eq!(a.elapsed(t1 + ms(40)), Some(ms(40)));
}

#[test]
fn shared_animation_reports_stop_to_every_holder() {
    let animation = std::rc::Rc::new(std::cell::RefCell::new(Animation::default()));
    let handle = animation.clone();
    assert!(!handle.borrow().is_running());

    assert!(animation.borrow_mut().start(Instant::now()));
    assert!(handle.borrow().is_running());

    handle.borrow_mut().stop();
    assert!(!animation.borrow().is_running());
    assert_eq!(animation.borrow().elapsed(Instant::now()), None);
}

use super::constants::{MOUSE_IDLE_TIMEOUT_MS, TOUCH_IDLE_TIMEOUT_MS};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Last known pointer position plus a "moving" signal that lapses once no
/// movement has been reported for the idle timeout.
///
/// The timeout is evaluated lazily against the caller's clock: every report
/// overwrites the activity timestamp, so there is never more than one pending
/// expiry.
#[derive(Clone, Debug)]
pub struct PointerState {
    position: Option<Vec2>,
    last_activity: Option<Instant>,
    timeout: Duration,
    touch_held: bool,
    // touch positions are forgotten once the release timeout lapses
    forget_on_idle: bool,
    mouse_idle_timeout: Duration,
    touch_idle_timeout: Duration,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(MOUSE_IDLE_TIMEOUT_MS),
            Duration::from_millis(TOUCH_IDLE_TIMEOUT_MS),
        )
    }
}

impl PointerState {
    pub fn new(mouse_idle_timeout: Duration, touch_idle_timeout: Duration) -> Self {
        Self {
            position: None,
            last_activity: None,
            timeout: mouse_idle_timeout,
            touch_held: false,
            forget_on_idle: false,
            mouse_idle_timeout,
            touch_idle_timeout,
        }
    }

    pub fn mouse_move(&mut self, pos: Vec2, now: Instant) {
        self.position = Some(pos);
        self.last_activity = Some(now);
        self.timeout = self.mouse_idle_timeout;
        self.touch_held = false;
        self.forget_on_idle = false;
    }

    /// Pointer left the interactive area.
    pub fn mouse_leave(&mut self) {
        self.position = None;
        self.last_activity = None;
        self.touch_held = false;
    }

    pub fn touch_start(&mut self, pos: Vec2, now: Instant) {
        self.position = Some(pos);
        self.last_activity = Some(now);
        self.timeout = self.touch_idle_timeout;
        self.touch_held = true;
        self.forget_on_idle = true;
    }

    #[inline]
    pub fn touch_move(&mut self, pos: Vec2, now: Instant) {
        self.touch_start(pos, now);
    }

    pub fn touch_end(&mut self, now: Instant) {
        self.touch_held = false;
        self.last_activity = Some(now);
        self.timeout = self.touch_idle_timeout;
    }

    pub fn is_moving(&self, now: Instant) -> bool {
        if self.touch_held {
            return true;
        }
        match self.last_activity {
            Some(t) => elapsed_between(t, now) < self.timeout,
            None => false,
        }
    }

    /// Last reported position, or `None` if the pointer left or a released
    /// touch has gone idle.
    pub fn position(&self, now: Instant) -> Option<Vec2> {
        if self.forget_on_idle && !self.is_moving(now) {
            return None;
        }
        self.position
    }

    /// The point the field should be pulled toward right now, if any.
    pub fn attractor(&self, now: Instant) -> Option<Vec2> {
        if self.is_moving(now) {
            self.position
        } else {
            None
        }
    }
}

// Saturates at zero; `Instant` subtraction must not go negative.
#[inline]
fn elapsed_between(earlier: Instant, now: Instant) -> Duration {
    if now > earlier {
        now - earlier
    } else {
        Duration::ZERO
    }
}

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Dormant,
    Running { started_at: Instant },
    Stopped,
}

/// Lifecycle of the frame loop: dormant until the start trigger, running
/// until stopped. The start instant doubles as the fade-in origin.
#[derive(Clone, Debug)]
pub struct Animation {
    phase: Phase,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            phase: Phase::Dormant,
        }
    }
}

impl Animation {
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Begin running at `now`. Returns false if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = Phase::Running { started_at: now };
        true
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            self.phase = Phase::Stopped;
        }
    }

    /// Time since start, while running.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            Phase::Running { started_at } if now > started_at => Some(now - started_at),
            Phase::Running { .. } => Some(Duration::ZERO),
            _ => None,
        }
    }
}

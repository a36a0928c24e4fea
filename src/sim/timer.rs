//! Countdown clock for one round
//!
//! The timer is advanced from the fixed-step tick, clamps at zero, and
//! reports completion exactly once per arming. Starting an already-running
//! timer is refused rather than restarted so a stray begin request cannot
//! stretch a round.

use crate::sim::observer::Listeners;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Finished,
}

/// Count-down timer driven by `advance`.
#[derive(Debug)]
pub struct RoundTimer {
    duration: f32,
    remaining: f32,
    running: bool,
    listeners: Listeners<TimerEvent>,
}

impl RoundTimer {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
            listeners: Listeners::new(),
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arm the timer at its full duration. Refused while already running.
    pub fn start(&mut self) {
        if self.running {
            log::debug!("timer start ignored, already running");
            return;
        }
        self.remaining = self.duration;
        self.running = true;
        self.listeners.emit(&TimerEvent::Started);
    }

    /// Halt without firing. Used when a round is abandoned.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Re-arm at full duration without starting. No events.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.duration;
    }

    /// Burn `dt` seconds off the clock. Returns true on the single advance
    /// that exhausts it; the timer unarms itself at that moment.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        if self.remaining == 0.0 {
            self.running = false;
            self.listeners.emit(&TimerEvent::Finished);
            true
        } else {
            false
        }
    }

    pub fn on_event(&mut self, callback: impl FnMut(&TimerEvent) + 'static) {
        self.listeners.subscribe(callback);
    }
}

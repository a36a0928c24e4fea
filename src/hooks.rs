//! Outbound boundary between the simulation and its shell
//!
//! The sim never talks to a window, a speaker, or the OS directly. It calls
//! these traits, and the shell decides what a screen or a sound actually is.
//! Every hook is optional: a headless run (tests, autoplay) attaches nothing
//! and the sim behaves identically, it just goes unheard.

use crate::persistence::ScoreStore;
use crate::sim::state::ItemColor;

/// Full-screen overlays the shell can present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title card with the begin control
    Start,
    /// Results card with the restart control
    End,
}

/// Text fields the sim keeps up to date on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    /// Big center overlay during warmup ("3", "2", "1", "GO!")
    Countdown,
    /// Live score during a round
    Score,
    /// Score shown on the results card
    FinalScore,
    /// Session best shown on the results card
    Best,
}

/// Something that can present screens and text
pub trait DisplaySink {
    fn show_screen(&mut self, screen: Screen);
    fn hide_screen(&mut self, screen: Screen);
    fn set_text(&mut self, slot: TextSlot, text: &str);
}

/// Juice channel: sounds, particles, haptics, whatever the shell has
pub trait FxSink {
    /// A warmup step became visible
    fn countdown_step(&mut self, label: &str);
    /// Control just unlocked
    fn round_started(&mut self);
    /// An item landed in its matching collector
    fn item_collected(&mut self, color: ItemColor);
    /// An item hit the wrong collector and bounced back
    fn wrong_drop(&mut self, color: ItemColor);
    /// The round timer ran out
    fn round_over(&mut self, score: u32, new_best: bool);
}

/// Authority to end the process
pub trait ProcessControl {
    fn terminate(&mut self);
}

/// Bundle of everything the sim can call out to. All slots optional.
#[derive(Default)]
pub struct GameHooks {
    pub display: Option<Box<dyn DisplaySink>>,
    pub fx: Option<Box<dyn FxSink>>,
    pub process: Option<Box<dyn ProcessControl>>,
    pub store: Option<Box<dyn ScoreStore>>,
}

impl GameHooks {
    /// No hooks attached. Tests and autoplay runs use this.
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn show_screen(&mut self, screen: Screen) {
        if let Some(display) = &mut self.display {
            display.show_screen(screen);
        }
    }

    pub fn hide_screen(&mut self, screen: Screen) {
        if let Some(display) = &mut self.display {
            display.hide_screen(screen);
        }
    }

    pub fn set_text(&mut self, slot: TextSlot, text: &str) {
        if let Some(display) = &mut self.display {
            display.set_text(slot, text);
        }
    }

    pub fn countdown_step(&mut self, label: &str) {
        if let Some(fx) = &mut self.fx {
            fx.countdown_step(label);
        }
    }

    pub fn round_started(&mut self) {
        if let Some(fx) = &mut self.fx {
            fx.round_started();
        }
    }

    pub fn item_collected(&mut self, color: ItemColor) {
        if let Some(fx) = &mut self.fx {
            fx.item_collected(color);
        }
    }

    pub fn wrong_drop(&mut self, color: ItemColor) {
        if let Some(fx) = &mut self.fx {
            fx.wrong_drop(color);
        }
    }

    pub fn round_over(&mut self, score: u32, new_best: bool) {
        if let Some(fx) = &mut self.fx {
            fx.round_over(score, new_best);
        }
    }

    /// Persist a new session best. Dropping the value silently would lose
    /// player progress, so a missing store is worth a warning.
    pub fn save_high_score(&mut self, value: u32) {
        match &mut self.store {
            Some(store) => store.set_high_score(value),
            None => log::warn!("no score store attached, best {value} not saved"),
        }
    }

    /// Ask the shell to exit. The sim cannot exit by itself.
    pub fn terminate(&mut self) {
        match &mut self.process {
            Some(process) => process.terminate(),
            None => log::warn!("terminate requested but no process control attached"),
        }
    }
}

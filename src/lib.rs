//! Bauble Rush - a timed sort-the-ornaments game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (placement, drag, scoring, round flow)
//! - `hooks`: Outbound traits the shell implements (display, fx, process)
//! - `persistence`: Best-score save/load
//! - `tuning`: Data-driven game balance
//! - `demo`: Scripted player for headless runs

pub mod demo;
pub mod hooks;
pub mod persistence;
pub mod sim;
pub mod tuning;

pub use hooks::GameHooks;
pub use sim::{GameState, TickInput, tick};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Collector row, centered below the tree
    pub const COLLECTOR_WIDTH: f32 = 80.0;
    pub const COLLECTOR_HEIGHT: f32 = 50.0;
    pub const COLLECTOR_ROW_Y: f32 = -185.0;
    pub const COLLECTOR_SPACING: f32 = 90.0;

    /// Per-tick multiplicative decay of drag emphasis (scale and tilt)
    pub const EMPHASIS_DECAY: f32 = 0.85;
    /// Remainder below which emphasis snaps back to rest
    pub const EMPHASIS_SNAP: f32 = 0.001;
}

//! Data-driven game balance
//!
//! Every knob a designer might want to turn lives here, loadable from a
//! JSON file next to the binary. The file may be partial: any field it
//! leaves out keeps its shipped default, so `{"round_secs": 20}` is a
//! complete, valid override.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Balance knobs for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Round ===
    /// Round length in seconds
    pub round_secs: f32,
    /// How long each countdown step stays up
    pub warmup_step_secs: f32,

    // === Placement ===
    /// Items scattered per round
    pub item_count: usize,
    /// Minimum center-to-center spacing between scattered items
    pub min_spacing: f32,
    /// Placement attempts per item before anchoring
    pub max_attempts: u32,
    /// Keep-out band above the silhouette's bottom edge
    pub spawn_bottom_margin: f32,

    // === Scoring ===
    /// Seconds a released item stays eligible for judgement
    pub grace_secs: f32,
    /// Points for a drop into the matching collector
    pub points_correct: i32,
    /// Points for a mismatched drop (negative)
    pub points_wrong: i32,

    // === Feel ===
    /// Pointer pick-up reach around an item's center
    pub item_radius: f32,
    /// Scale applied to a held item
    pub drag_scale: f32,
    /// Tilt in radians applied to a held item
    pub drag_tilt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            round_secs: 12.0,
            warmup_step_secs: 0.8,

            item_count: 12,
            min_spacing: 34.0,
            max_attempts: 48,
            spawn_bottom_margin: 70.0,

            grace_secs: 0.35,
            points_correct: 12,
            points_wrong: -6,

            item_radius: 14.0,
            drag_scale: 1.15,
            drag_tilt: 0.12,
        }
    }
}

impl Tuning {
    /// Default file name, looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "bauble_rush_tuning.json";

    /// Load from a JSON file. Any problem falls back to defaults; a broken
    /// tuning file should never keep the game from starting.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("bad tuning file {}: {err}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("could not read {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the current values out, handy for seeding a file to edit.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("could not write {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("could not encode tuning: {err}"),
        }
    }
}

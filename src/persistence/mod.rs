//! Best-score persistence
//!
//! One number survives the process: the best round score. It lives in a
//! small JSON envelope so the format can grow fields later without breaking
//! files already on disk. Reads and writes never fail the game; a missing
//! or unreadable file just means starting from zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the best score lives between runs
pub trait ScoreStore {
    fn get_high_score(&self) -> u32;
    fn set_high_score(&mut self, value: u32);
}

/// On-disk envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
struct ScoreFile {
    high_score: u32,
}

/// File-backed store
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Default file name, created in the working directory
    pub const DEFAULT_FILE: &'static str = "bauble_rush_highscore.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_file(path: &Path) -> io::Result<ScoreFile> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(io::Error::other)
    }
}

impl ScoreStore for JsonScoreStore {
    fn get_high_score(&self) -> u32 {
        match Self::read_file(&self.path) {
            Ok(file) => file.high_score,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no score file at {}, starting fresh", self.path.display());
                0
            }
            Err(err) => {
                log::warn!("could not read {}: {err}", self.path.display());
                0
            }
        }
    }

    fn set_high_score(&mut self, value: u32) {
        let file = ScoreFile { high_score: value };
        match serde_json::to_string_pretty(&file) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("could not write {}: {err}", self.path.display());
                } else {
                    log::info!("best score {value} saved");
                }
            }
            Err(err) => log::warn!("could not encode score file: {err}"),
        }
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScoreStore {
    high_score: u32,
}

impl MemoryScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get_high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, value: u32) {
        self.high_score = value;
    }
}

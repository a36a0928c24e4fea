//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by spawn order, ids never reused)
//! - No rendering or platform dependencies; outbound effects go through
//!   the hook traits and never feed back into state
//!
//! Same seed, same input script, same state, tick for tick.

pub mod collector;
pub mod drag;
pub mod observer;
pub mod placement;
pub mod round;
pub mod score;
pub mod shape;
pub mod state;
pub mod tick;
pub mod timer;

pub use observer::Listeners;
pub use placement::{PlacementBatch, PlacementParams, place_batch};
pub use score::{ScoreEvent, ScoreTracker};
pub use shape::{MaskSilhouette, PolygonSilhouette, Rect, Silhouette, tree_silhouette};
pub use state::{
    Collector, DragGrip, GamePhase, GameState, Item, ItemColor, ItemState, WARMUP_STEPS, Warmup,
    collector_row,
};
pub use tick::{TickInput, tick};
pub use timer::{RoundTimer, TimerEvent};

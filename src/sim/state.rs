//! Core state for the collection game
//!
//! Everything the simulation mutates lives here. Items carry stable ids,
//! vectors keep insertion order, and all randomness flows through the seeded
//! generator, so the same seed and input script replay identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::placement::{PlacementParams, place_batch};
use crate::sim::score::ScoreTracker;
use crate::sim::shape::{PolygonSilhouette, Rect, tree_silhouette};
use crate::sim::timer::RoundTimer;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen up, waiting for a begin request
    Idle,
    /// Countdown overlay running, input locked
    Starting,
    /// Active play, round timer burning down
    Running,
    /// Results screen up, waiting for a restart request
    EndScreen,
}

/// Progress through the pre-round countdown
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Warmup {
    /// Index into [`WARMUP_STEPS`]
    pub index: usize,
    /// Seconds spent on the current step
    pub elapsed: f32,
}

/// Item and collector colors. Dropping an item into the matching collector
/// scores, any other collector bounces it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemColor {
    Red,
    Green,
    Blue,
    Gold,
}

impl ItemColor {
    /// All colors, in collector-row order
    pub const ALL: [ItemColor; 4] = [
        ItemColor::Red,
        ItemColor::Green,
        ItemColor::Blue,
        ItemColor::Gold,
    ];
}

/// Lifecycle of a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// On the tree, or in flight under the cursor
    Active,
    /// Banked in its collector, out of play
    Collected,
}

/// One draggable ornament
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique id (stable for the session)
    pub id: u32,
    /// Which collector accepts it
    pub color: ItemColor,
    /// Spawn position, restored after a wrong drop
    pub origin: Vec2,
    /// Current position
    pub pos: Vec2,
    /// Lifecycle state
    pub state: ItemState,
    /// Whether a grip currently holds it
    pub dragging: bool,
    /// Seconds left in which this item, once released, may still be scored
    pub release_window: f32,
    /// Visual scale, pumped up while dragged
    pub scale: f32,
    /// Visual tilt in radians, applied while dragged
    pub tilt: f32,
}

impl Item {
    pub fn new(id: u32, color: ItemColor, pos: Vec2) -> Self {
        Self {
            id,
            color,
            origin: pos,
            pos,
            state: ItemState::Active,
            dragging: false,
            release_window: 0.0,
            scale: 1.0,
            tilt: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == ItemState::Active
    }

    /// Snap back to the spawn position
    pub fn return_to_origin(&mut self) {
        self.pos = self.origin;
    }
}

/// One drop target along the bottom edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collector {
    /// Color of items it accepts
    pub color: ItemColor,
    /// Drop region in world space
    pub region: Rect,
}

/// The four collectors, one per color, spaced along a row below the tree
pub fn collector_row() -> Vec<Collector> {
    ItemColor::ALL
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let center = Vec2::new((i as f32 - 1.5) * COLLECTOR_SPACING, COLLECTOR_ROW_Y);
            Collector {
                color: *color,
                region: Rect::from_center(
                    center,
                    Vec2::new(COLLECTOR_WIDTH * 0.5, COLLECTOR_HEIGHT * 0.5),
                ),
            }
        })
        .collect()
}

/// An item held by the pointer. The offset preserves where on the item the
/// press landed so it does not jump to center under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGrip {
    /// Id of the held item
    pub item_id: u32,
    /// Item position minus cursor position at press time
    pub offset: Vec2,
}

/// Complete game state (deterministic)
#[derive(Debug)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded generator, consumed only by placement
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Countdown progress, `Some` only while `Starting`
    pub warmup: Option<Warmup>,
    /// Items in spawn order (stable ids)
    pub items: Vec<Item>,
    /// Drop targets, one per color
    pub collectors: Vec<Collector>,
    /// Round score and session best
    pub score: ScoreTracker,
    /// Round countdown clock
    pub timer: RoundTimer,
    /// Active pointer grip, if any
    pub drag: Option<DragGrip>,
    /// Spawn surface items scatter across
    pub tree: PolygonSilhouette,
    /// Balance knobs
    pub tuning: Tuning,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Next item ID to allocate
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with items already scattered, sitting on the
    /// start screen.
    pub fn new(seed: u64, tuning: Tuning, best_score: u32) -> Self {
        let timer = RoundTimer::new(tuning.round_secs);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            warmup: None,
            items: Vec::new(),
            collectors: collector_row(),
            score: ScoreTracker::new(best_score),
            timer,
            drag: None,
            tree: tree_silhouette(),
            tuning,
            time_ticks: 0,
            next_id: 1,
        };

        state.spawn_items();

        state
    }

    /// Allocate a new item ID
    pub fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace all items with a fresh scatter over the tree. Colors cycle
    /// in a fixed order so every batch splits evenly across collectors.
    pub fn spawn_items(&mut self) {
        let params = PlacementParams::from_tuning(&self.tuning);
        let batch = place_batch(&self.tree, &params, &mut self.rng);
        self.items.clear();
        for (i, pos) in batch.positions.into_iter().enumerate() {
            let id = self.next_item_id();
            let color = ItemColor::ALL[i % ItemColor::ALL.len()];
            self.items.push(Item::new(id, color, pos));
        }
    }

    /// Whether a begin request would be honored right now
    pub fn begin_enabled(&self) -> bool {
        self.phase == GamePhase::Idle
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: u32) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Items still in play
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    pub fn collector_for(&self, color: ItemColor) -> Option<&Collector> {
        self.collectors.iter().find(|c| c.color == color)
    }
}

/// Countdown overlay text, one entry per warmup step
pub const WARMUP_STEPS: [&str; 4] = ["3", "2", "1", "GO!"];

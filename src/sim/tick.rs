//! Fixed timestep game tick
//!
//! Advances the whole game one step in a fixed order: control requests,
//! then the drag, then collector judgement, then the clock, then the
//! countdown. The order is part of the contract; a release and the drop
//! judgement it triggers land on the same tick, and the round can only end
//! after that judgement has had its chance.

use glam::Vec2;

use crate::hooks::GameHooks;
use crate::sim::state::GameState;
use crate::sim::{collector, drag, round};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in world space
    pub cursor: Vec2,
    /// Pointer went down this tick
    pub press: bool,
    /// Pointer came up this tick
    pub release: bool,
    /// Begin request from the start screen
    pub begin: bool,
    /// Restart request from the results screen
    pub restart: bool,
    /// Quit request, honored in any phase
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, hooks: &mut GameHooks, input: &TickInput, dt: f32) {
    // Quit preempts everything else this tick
    if input.quit {
        log::info!("quit requested in {:?}", state.phase);
        hooks.terminate();
        return;
    }

    if input.begin {
        round::request_begin(state, hooks);
    }
    if input.restart {
        round::request_restart(state, hooks);
    }

    state.time_ticks += 1;

    drag::process(state, input);
    collector::evaluate(state, hooks, dt);

    if state.timer.advance(dt) {
        round::handle_timer_complete(state, hooks);
    }

    round::advance_warmup(state, hooks, dt);
}

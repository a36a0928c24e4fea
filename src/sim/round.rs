//! Round lifecycle: Idle, Starting, Running, EndScreen
//!
//! Phase changes only happen here. Control requests that arrive in the
//! wrong phase are logged and dropped rather than honored, so a double
//! click on begin or a stale restart cannot corrupt a round in progress.
//! The one path out of `Running` is the timer running dry.

use crate::hooks::{GameHooks, Screen, TextSlot};
use crate::sim::drag;
use crate::sim::state::{GamePhase, GameState, WARMUP_STEPS, Warmup};

/// Honor a begin request from the start screen. A no-op in any other phase.
pub fn request_begin(state: &mut GameState, hooks: &mut GameHooks) {
    if state.phase != GamePhase::Idle {
        log::debug!("begin request ignored in {:?}", state.phase);
        return;
    }
    hooks.hide_screen(Screen::Start);
    enter_starting(state, hooks);
}

/// Honor a restart request from the results screen. Respawns the scatter
/// before counting down again. A no-op in any other phase.
pub fn request_restart(state: &mut GameState, hooks: &mut GameHooks) {
    if state.phase != GamePhase::EndScreen {
        log::debug!("restart request ignored in {:?}", state.phase);
        return;
    }
    hooks.hide_screen(Screen::End);
    state.spawn_items();
    enter_starting(state, hooks);
}

/// Begin the countdown. Score and timer reset together here so a new round
/// can never inherit either from the last one.
fn enter_starting(state: &mut GameState, hooks: &mut GameHooks) {
    state.phase = GamePhase::Starting;
    state.score.reset();
    state.timer.reset();
    state.warmup = Some(Warmup::default());
    hooks.set_text(TextSlot::Score, "0");
    hooks.set_text(TextSlot::Countdown, WARMUP_STEPS[0]);
    hooks.countdown_step(WARMUP_STEPS[0]);
}

/// Walk the countdown forward. Large `dt` values may cross several steps in
/// one call; each crossed step is still announced, in order.
pub fn advance_warmup(state: &mut GameState, hooks: &mut GameHooks, dt: f32) {
    if state.phase != GamePhase::Starting {
        return;
    }
    let step_secs = state.tuning.warmup_step_secs;
    // Announcements are deferred to avoid holding the warmup borrow
    // across hook calls
    let mut announce: Vec<&'static str> = Vec::new();
    let mut finished = false;
    match &mut state.warmup {
        Some(warmup) => {
            warmup.elapsed += dt;
            while warmup.elapsed >= step_secs {
                warmup.elapsed -= step_secs;
                warmup.index += 1;
                if warmup.index >= WARMUP_STEPS.len() {
                    finished = true;
                    break;
                }
                announce.push(WARMUP_STEPS[warmup.index]);
            }
        }
        None => {
            log::debug!("warmup state missing while Starting, restarting countdown");
            state.warmup = Some(Warmup::default());
            return;
        }
    }
    for label in announce {
        hooks.set_text(TextSlot::Countdown, label);
        hooks.countdown_step(label);
    }
    if finished {
        state.warmup = None;
        begin_running(state, hooks);
    }
}

/// Unlock control and arm the clock.
fn begin_running(state: &mut GameState, hooks: &mut GameHooks) {
    state.phase = GamePhase::Running;
    state.timer.start();
    hooks.set_text(TextSlot::Countdown, "");
    hooks.round_started();
}

/// React to the round timer running dry. Any live drag is cancelled in
/// place without a grace window; nothing scores after time.
pub fn handle_timer_complete(state: &mut GameState, hooks: &mut GameHooks) {
    if state.phase != GamePhase::Running {
        log::debug!("timer completion ignored in {:?}", state.phase);
        return;
    }
    drag::cancel_drag(state);
    state.phase = GamePhase::EndScreen;

    let final_score = state.score.value();
    let new_best = state.score.finalize_round();
    if new_best {
        hooks.save_high_score(state.score.best());
    }

    hooks.set_text(TextSlot::FinalScore, &final_score.to_string());
    hooks.set_text(TextSlot::Best, &state.score.best().to_string());
    hooks.show_screen(Screen::End);
    hooks.round_over(final_score, new_best);
}

//! Pointer grip: picking items up, carrying them, letting them go
//!
//! A press grabs the nearest active item within reach and remembers where on
//! the item it landed, so the item tracks the cursor without snapping to
//! center. A release does not score anything here; it only opens the item's
//! grace window and leaves judgement to the collectors.

use crate::consts::*;
use crate::sim::state::{DragGrip, GamePhase, GameState};
use crate::sim::tick::TickInput;

/// Advance the drag for one tick: grab on press, follow the cursor, open
/// the grace window on release, and relax emphasis on everything not held.
pub fn process(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    if input.press && state.drag.is_none() {
        let reach_sq = state.tuning.item_radius * state.tuning.item_radius;
        let mut nearest: Option<(usize, f32)> = None;
        for (idx, item) in state.items.iter().enumerate() {
            if !item.is_active() || item.dragging {
                continue;
            }
            let dist_sq = item.pos.distance_squared(input.cursor);
            if dist_sq <= reach_sq && nearest.is_none_or(|(_, best)| dist_sq < best) {
                nearest = Some((idx, dist_sq));
            }
        }
        if let Some((idx, _)) = nearest {
            let item = &mut state.items[idx];
            item.dragging = true;
            // A re-grab voids any evaluation still pending from the last drop
            item.release_window = 0.0;
            item.scale = state.tuning.drag_scale;
            item.tilt = state.tuning.drag_tilt;
            let grip = DragGrip {
                item_id: item.id,
                offset: item.pos - input.cursor,
            };
            state.drag = Some(grip);
        }
    }

    // Carry the held item
    if let Some(grip) = state.drag {
        match state.item_mut(grip.item_id) {
            Some(item) => item.pos = input.cursor + grip.offset,
            None => {
                log::debug!("grip held missing item {}, dropping it", grip.item_id);
                state.drag = None;
            }
        }
    }

    if input.release {
        if let Some(grip) = state.drag.take() {
            let grace_secs = state.tuning.grace_secs;
            if let Some(item) = state.item_mut(grip.item_id) {
                item.dragging = false;
                item.release_window = grace_secs;
            }
        }
    }

    // Decay drag emphasis back to rest
    for item in &mut state.items {
        if item.dragging {
            continue;
        }
        item.scale = 1.0 + (item.scale - 1.0) * EMPHASIS_DECAY;
        if (item.scale - 1.0).abs() < EMPHASIS_SNAP {
            item.scale = 1.0;
        }
        item.tilt *= EMPHASIS_DECAY;
        if item.tilt.abs() < EMPHASIS_SNAP {
            item.tilt = 0.0;
        }
    }
}

/// Drop any held item in place without opening a grace window, and put all
/// emphasis back to rest. Called when a round ends out from under a drag.
pub fn cancel_drag(state: &mut GameState) {
    if let Some(grip) = state.drag.take() {
        if let Some(item) = state.item_mut(grip.item_id) {
            item.dragging = false;
        }
    }
    for item in &mut state.items {
        item.release_window = 0.0;
        item.scale = 1.0;
        item.tilt = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::new(1, Tuning::default(), 0);
        state.phase = GamePhase::Running;
        state.timer.start();
        state
    }

    fn press_at(cursor: Vec2) -> TickInput {
        TickInput {
            cursor,
            press: true,
            ..Default::default()
        }
    }

    fn release_at(cursor: Vec2) -> TickInput {
        TickInput {
            cursor,
            release: true,
            ..Default::default()
        }
    }

    fn move_to(cursor: Vec2) -> TickInput {
        TickInput {
            cursor,
            ..Default::default()
        }
    }

    #[test]
    fn test_press_grabs_item_within_reach() {
        let mut state = running_state();
        let target = state.items[0].pos;
        let cursor = target + Vec2::new(5.0, 0.0);

        process(&mut state, &press_at(cursor));

        let grip = state.drag.unwrap();
        assert_eq!(grip.item_id, state.items[0].id);
        assert_eq!(grip.offset, Vec2::new(-5.0, 0.0));
        assert!(state.items[0].dragging);
        assert_eq!(state.items[0].scale, state.tuning.drag_scale);
        assert_eq!(state.items[0].tilt, state.tuning.drag_tilt);
    }

    #[test]
    fn test_press_beyond_reach_grabs_nothing() {
        let mut state = running_state();
        process(&mut state, &press_at(Vec2::new(10_000.0, 0.0)));
        assert!(state.drag.is_none());
        assert!(state.items.iter().all(|i| !i.dragging));
    }

    #[test]
    fn test_press_outside_running_is_ignored() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        let target = state.items[0].pos;
        process(&mut state, &press_at(target));
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_held_item_tracks_cursor_with_offset() {
        let mut state = running_state();
        let target = state.items[0].pos;
        process(&mut state, &press_at(target + Vec2::new(3.0, -2.0)));

        let away = Vec2::new(50.0, -120.0);
        process(&mut state, &move_to(away));
        assert_eq!(state.items[0].pos, away + Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn test_release_opens_grace_window_and_drops_grip() {
        let mut state = running_state();
        let target = state.items[0].pos;
        process(&mut state, &press_at(target));
        process(&mut state, &release_at(target));

        assert!(state.drag.is_none());
        assert!(!state.items[0].dragging);
        assert_eq!(state.items[0].release_window, state.tuning.grace_secs);
    }

    #[test]
    fn test_regrab_voids_pending_window() {
        let mut state = running_state();
        let target = state.items[0].pos;
        process(&mut state, &press_at(target));
        process(&mut state, &release_at(target));
        assert!(state.items[0].release_window > 0.0);

        let pos = state.items[0].pos;
        process(&mut state, &press_at(pos));
        assert!(state.items[0].dragging);
        assert_eq!(state.items[0].release_window, 0.0);
    }

    #[test]
    fn test_emphasis_relaxes_after_release() {
        let mut state = running_state();
        let target = state.items[0].pos;
        process(&mut state, &press_at(target));
        process(&mut state, &release_at(target));

        let pumped = state.items[0].scale;
        process(&mut state, &move_to(Vec2::ZERO));
        assert!(state.items[0].scale < pumped);
        assert!(state.items[0].scale > 1.0);

        for _ in 0..200 {
            process(&mut state, &move_to(Vec2::ZERO));
        }
        assert_eq!(state.items[0].scale, 1.0);
        assert_eq!(state.items[0].tilt, 0.0);
    }

    #[test]
    fn test_cancel_drag_clears_everything() {
        let mut state = running_state();
        let target = state.items[0].pos;
        process(&mut state, &press_at(target));

        cancel_drag(&mut state);
        assert!(state.drag.is_none());
        assert!(!state.items[0].dragging);
        assert_eq!(state.items[0].scale, 1.0);
        assert_eq!(state.items[0].tilt, 0.0);
        assert!(state.items.iter().all(|i| i.release_window == 0.0));
    }
}

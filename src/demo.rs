//! Scripted player for headless runs
//!
//! Reads the public state and produces the input a competent player would:
//! begin from the start screen, then ferry items to their collectors one at
//! a time. Drives the demo binary and makes it possible to soak a build
//! without a window attached.

use crate::sim::state::{GamePhase, GameState};
use crate::sim::tick::TickInput;

/// Produce the next tick's input for the current state.
pub fn autoplay_input(state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::Idle => TickInput {
            begin: true,
            ..Default::default()
        },
        GamePhase::Running => {
            if let Some(grip) = state.drag {
                // Holding something: park it over its collector and let go
                let Some(item) = state.item(grip.item_id) else {
                    return TickInput::default();
                };
                let Some(collector) = state.collector_for(item.color) else {
                    return TickInput::default();
                };
                TickInput {
                    cursor: collector.region.center() - grip.offset,
                    release: true,
                    ..Default::default()
                }
            } else if let Some(item) = state.items.iter().find(|i| i.is_active()) {
                TickInput {
                    cursor: item.pos,
                    press: true,
                    ..Default::default()
                }
            } else {
                // Tree cleared, nothing left but to watch the clock
                TickInput::default()
            }
        }
        GamePhase::Starting | GamePhase::EndScreen => TickInput::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::GameHooks;
    use crate::sim::state::ItemState;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;

    #[test]
    fn test_requests_begin_from_the_start_screen() {
        let state = GameState::new(3, Tuning::default(), 0);
        let input = autoplay_input(&state);
        assert!(input.begin);
        assert!(!input.press && !input.release && !input.quit);
    }

    #[test]
    fn test_carries_held_item_over_its_collector() {
        let mut state = GameState::new(3, Tuning::default(), 0);
        let mut hooks = GameHooks::headless();
        state.phase = GamePhase::Running;
        state.timer.start();

        let grab = autoplay_input(&state);
        assert!(grab.press);
        tick(&mut state, &mut hooks, &grab, 0.25);
        let grip = state.drag.unwrap();
        let color = state.item(grip.item_id).unwrap().color;

        let carry = autoplay_input(&state);
        assert!(carry.release);
        let center = state.collector_for(color).unwrap().region.center();
        assert_eq!(carry.cursor + grip.offset, center);
    }

    #[test]
    fn test_autoplay_clears_the_tree_and_banks_every_point() {
        let mut state = GameState::new(3, Tuning::default(), 0);
        let mut hooks = GameHooks::headless();

        let mut guard = 0;
        while state.phase != GamePhase::EndScreen && guard < 1_000 {
            let input = autoplay_input(&state);
            tick(&mut state, &mut hooks, &input, 0.25);
            guard += 1;
        }

        assert_eq!(state.phase, GamePhase::EndScreen);
        assert!(state.items.iter().all(|i| i.state == ItemState::Collected));
        // Twelve items, twelve points each, nothing dropped wrong
        assert_eq!(state.score.value(), 144);
        assert_eq!(state.score.best(), 144);
    }
}

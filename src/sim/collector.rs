//! Drop judgement at the collector row
//!
//! Released items carry a short grace window. While it is open, the first
//! tick that finds the item's center inside a collector box judges it: a
//! color match banks the item, a mismatch sends it back to the tree. Either
//! way the window is consumed on the spot, so one drop is judged at most
//! once even if the item lingers over a box afterwards.

use crate::hooks::{GameHooks, TextSlot};
use crate::sim::state::{GamePhase, GameState, ItemState};

/// Judge pending drops, then burn down the grace windows.
pub fn evaluate(state: &mut GameState, hooks: &mut GameHooks, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    let before = state.score.value();

    for item in &mut state.items {
        if item.state != ItemState::Active || item.dragging || item.release_window <= 0.0 {
            continue;
        }
        let Some(collector) = state
            .collectors
            .iter()
            .find(|c| c.region.contains(item.pos))
        else {
            continue;
        };

        // One judgement per drop
        item.release_window = 0.0;

        if collector.color == item.color {
            item.state = ItemState::Collected;
            item.pos = collector.region.center();
            state.score.apply(state.tuning.points_correct);
            hooks.item_collected(item.color);
        } else {
            item.return_to_origin();
            state.score.apply(state.tuning.points_wrong);
            hooks.wrong_drop(item.color);
        }
    }

    for item in &mut state.items {
        if item.release_window > 0.0 {
            item.release_window = (item.release_window - dt).max(0.0);
        }
    }

    if state.score.value() != before {
        hooks.set_text(TextSlot::Score, &state.score.value().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{DisplaySink, Screen};
    use crate::sim::state::ItemColor;
    use crate::tuning::Tuning;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn running_state() -> GameState {
        let mut state = GameState::new(1, Tuning::default(), 0);
        state.phase = GamePhase::Running;
        state.timer.start();
        state
    }

    /// Park an item over a collector box as if it had just been released.
    fn drop_over(state: &mut GameState, item_id: u32, target: ItemColor, window: f32) {
        let center = state.collector_for(target).unwrap().region.center();
        let item = state.item_mut(item_id).unwrap();
        item.pos = center;
        item.dragging = false;
        item.release_window = window;
    }

    #[test]
    fn test_matching_drop_banks_item_and_scores() {
        let mut state = running_state();
        let mut hooks = GameHooks::headless();
        let id = state.items[0].id;
        let color = state.items[0].color;
        drop_over(&mut state, id, color, 0.5);

        evaluate(&mut state, &mut hooks, 0.25);

        let item = state.item(id).unwrap();
        assert_eq!(item.state, ItemState::Collected);
        assert_eq!(item.release_window, 0.0);
        assert_eq!(
            item.pos,
            state.collector_for(color).unwrap().region.center()
        );
        assert_eq!(state.score.value(), 12);
    }

    #[test]
    fn test_wrong_drop_penalizes_and_returns_item() {
        let mut state = running_state();
        let mut hooks = GameHooks::headless();

        // Bank a red first so the penalty is visible above the floor
        let red = state
            .items
            .iter()
            .find(|i| i.color == ItemColor::Red)
            .unwrap()
            .id;
        drop_over(&mut state, red, ItemColor::Red, 0.5);
        evaluate(&mut state, &mut hooks, 0.25);
        assert_eq!(state.score.value(), 12);

        // Now a green into the red box
        let green = state
            .items
            .iter()
            .find(|i| i.color == ItemColor::Green)
            .unwrap()
            .id;
        drop_over(&mut state, green, ItemColor::Red, 0.5);
        evaluate(&mut state, &mut hooks, 0.25);

        let item = state.item(green).unwrap();
        assert_eq!(state.score.value(), 6);
        assert_eq!(item.state, ItemState::Active);
        assert_eq!(item.pos, item.origin);
        assert_eq!(item.release_window, 0.0);
    }

    #[test]
    fn test_judgement_happens_at_most_once() {
        let mut state = running_state();
        let mut hooks = GameHooks::headless();
        let id = state.items[0].id;
        let color = state.items[0].color;
        drop_over(&mut state, id, color, 10.0);

        evaluate(&mut state, &mut hooks, 0.25);
        assert_eq!(state.score.value(), 12);

        // Item is banked and its window consumed; more ticks change nothing
        evaluate(&mut state, &mut hooks, 0.25);
        evaluate(&mut state, &mut hooks, 0.25);
        assert_eq!(state.score.value(), 12);
    }

    #[test]
    fn test_held_item_is_not_judged() {
        let mut state = running_state();
        let mut hooks = GameHooks::headless();
        let id = state.items[0].id;
        let color = state.items[0].color;
        drop_over(&mut state, id, color, 0.5);
        state.item_mut(id).unwrap().dragging = true;

        evaluate(&mut state, &mut hooks, 0.25);
        assert_eq!(state.item(id).unwrap().state, ItemState::Active);
        assert_eq!(state.score.value(), 0);
    }

    #[test]
    fn test_window_expires_over_open_ground() {
        let mut state = running_state();
        let mut hooks = GameHooks::headless();
        let id = state.items[0].id;
        {
            let item = state.item_mut(id).unwrap();
            item.release_window = 0.5;
            // Released on the tree, nowhere near the collector row
        }

        evaluate(&mut state, &mut hooks, 0.25);
        assert_eq!(state.item(id).unwrap().release_window, 0.25);
        evaluate(&mut state, &mut hooks, 0.25);
        assert_eq!(state.item(id).unwrap().release_window, 0.0);
        assert_eq!(state.item(id).unwrap().state, ItemState::Active);
        assert_eq!(state.score.value(), 0);
    }

    #[test]
    fn test_no_judgement_outside_running() {
        let mut state = running_state();
        let mut hooks = GameHooks::headless();
        let id = state.items[0].id;
        let color = state.items[0].color;
        drop_over(&mut state, id, color, 0.5);
        state.phase = GamePhase::EndScreen;

        evaluate(&mut state, &mut hooks, 0.25);
        assert_eq!(state.item(id).unwrap().state, ItemState::Active);
        assert_eq!(state.score.value(), 0);
    }

    struct TextProbe {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl DisplaySink for TextProbe {
        fn show_screen(&mut self, _screen: Screen) {}
        fn hide_screen(&mut self, _screen: Screen) {}
        fn set_text(&mut self, slot: TextSlot, text: &str) {
            if slot == TextSlot::Score {
                self.log.borrow_mut().push(text.to_string());
            }
        }
    }

    #[test]
    fn test_score_text_updates_only_on_change() {
        let mut state = running_state();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = GameHooks::headless();
        hooks.display = Some(Box::new(TextProbe { log: log.clone() }));

        let id = state.items[0].id;
        let color = state.items[0].color;
        drop_over(&mut state, id, color, 0.5);
        evaluate(&mut state, &mut hooks, 0.25);

        // A tick with nothing pending leaves the display alone
        evaluate(&mut state, &mut hooks, 0.25);
        assert_eq!(*log.borrow(), vec!["12"]);
    }
}

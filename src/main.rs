//! Bauble Rush entry point
//!
//! Headless shell: wires console-backed hooks into the sim and lets the
//! scripted player run one round at a fixed timestep. A windowed shell
//! would use the same loop shape and swap in real sinks.

use std::time::{SystemTime, UNIX_EPOCH};

use bauble_rush::consts::SIM_DT;
use bauble_rush::demo::autoplay_input;
use bauble_rush::hooks::{DisplaySink, FxSink, GameHooks, ProcessControl, Screen, TextSlot};
use bauble_rush::persistence::{JsonScoreStore, ScoreStore};
use bauble_rush::sim::state::{GamePhase, ItemColor};
use bauble_rush::sim::tick;
use bauble_rush::{GameState, Tuning};

/// Prints screens and text slots to the terminal.
struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn show_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Start => println!("== BAUBLE RUSH =="),
            Screen::End => println!("== TIME! =="),
        }
    }

    fn hide_screen(&mut self, _screen: Screen) {}

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        match slot {
            TextSlot::Countdown if !text.is_empty() => println!("  {text}"),
            TextSlot::FinalScore => println!("  final score: {text}"),
            TextSlot::Best => println!("  session best: {text}"),
            _ => {}
        }
    }
}

/// Narrates game events where a windowed shell would play sounds.
struct ConsoleFx;

impl FxSink for ConsoleFx {
    fn countdown_step(&mut self, _label: &str) {}

    fn round_started(&mut self) {
        println!("  go! sort the baubles");
    }

    fn item_collected(&mut self, color: ItemColor) {
        println!("  + {color:?} banked");
    }

    fn wrong_drop(&mut self, color: ItemColor) {
        println!("  - {color:?} bounced back");
    }

    fn round_over(&mut self, score: u32, new_best: bool) {
        if new_best {
            println!("  new best: {score}!");
        }
    }
}

struct ExitControl;

impl ProcessControl for ExitControl {
    fn terminate(&mut self) {
        log::info!("terminating at shell request");
        std::process::exit(0);
    }
}

fn main() {
    env_logger::init();
    log::info!("Bauble Rush (headless) starting...");

    let tuning = Tuning::load_or_default(Tuning::DEFAULT_FILE);
    let store = JsonScoreStore::new(JsonScoreStore::DEFAULT_FILE);
    let best = store.get_high_score();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(42);
    log::info!("session seed {seed}, best so far {best}");

    let mut state = GameState::new(seed, tuning, best);
    let mut hooks = GameHooks {
        display: Some(Box::new(ConsoleDisplay)),
        fx: Some(Box::new(ConsoleFx)),
        process: Some(Box::new(ExitControl)),
        store: Some(Box::new(store)),
    };
    state
        .score
        .on_change(|e| log::debug!("score {} ({:+})", e.total, e.delta));

    hooks.show_screen(Screen::Start);

    // Fixed-step loop, as fast as it will go
    let mut guard = 0u32;
    while state.phase != GamePhase::EndScreen && guard < 100_000 {
        let input = autoplay_input(&state);
        tick(&mut state, &mut hooks, &input, SIM_DT);
        guard += 1;
    }

    println!();
    println!(
        "round over after {} ticks: {}/{} items banked, score {}, best {}",
        state.time_ticks,
        state.items.len() - state.active_count(),
        state.items.len(),
        state.score.value(),
        state.score.best()
    );
}

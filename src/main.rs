//! Health Dash entry point
//!
//! Headless demo: the built-in pilot plays one run to completion while
//! the driver exercises the full external surface - notifications,
//! best-score persistence, and closing-message resolution.

use std::time::{SystemTime, UNIX_EPOCH};

use health_dash::BestScore;
use health_dash::notify::{LogSink, forward};
use health_dash::sim::{
    GameEvent, GameState, MessagePool, Phase, SummaryGenerator, TickInput, tick,
};

/// Demo length cap - a run that outlasts this is stopped, not abandoned
const MAX_TICKS: u64 = 100_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("seed {seed}");

    let mut best = BestScore::load();
    let mut generator = MessagePool::new(seed.rotate_left(17));
    let mut sink = LogSink;

    let mut state = GameState::new(seed);
    state.set_best(best.score);
    state.start();

    let input = TickInput {
        auto_play: true,
        ..Default::default()
    };
    let mut summary_request = None;

    for _ in 0..MAX_TICKS {
        let events = tick(&mut state, &input);
        forward(&events, &mut sink);
        for event in &events {
            if let GameEvent::RunEnded {
                score,
                health,
                generation,
                new_best,
            } = *event
            {
                if new_best && best.record(score) {
                    best.save();
                }
                summary_request = Some((generation, score, health));
            }
        }
        if let Some(hud) = state.take_hud_delta() {
            log::debug!(
                "score {} health {} level {} best {}",
                hud.score,
                hud.health,
                hud.level,
                hud.best
            );
        }
        if state.phase == Phase::Ended {
            break;
        }
    }

    // The pilot can outlive the demo cap; end the run cleanly
    if state.phase != Phase::Ended {
        if let Some(GameEvent::RunEnded {
            score,
            health,
            generation,
            new_best,
        }) = state.stop()
        {
            if new_best && best.record(score) {
                best.save();
            }
            summary_request = Some((generation, score, health));
        }
    }

    // Resolve the closing message the way a remote host would: after the
    // fact, guarded by the run generation
    if let Some((generation, score, health)) = summary_request {
        let result = generator.summarize(score, health);
        state.resolve_summary(generation, result);
    }

    let hud = state.hud();
    println!(
        "Game over! Score {} (best {}), health {}, level {}",
        hud.score, hud.best, hud.health, hud.level
    );
    if let Some(message) = state.closing_message() {
        println!("{message}");
    }
}

//! Block Dodge entry point
//!
//! Headless demo run: drives the game loop at a synthetic 60 fps with
//! scripted input until the run ends, then reports the final score and
//! updates the local leaderboard. A real host would wire `GameDriver` to a
//! canvas and keyboard instead.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use block_dodge::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use block_dodge::sim::GamePhase;
use block_dodge::{FrameControl, GameDriver, HighScores, Settings};

const SETTINGS_PATH: &str = "block_dodge_settings.json";
const SCORES_PATH: &str = "block_dodge_scores.json";

/// Hard cap on the demo run, in simulated seconds
const DEMO_TIME_LIMIT: f64 = 120.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("block dodge demo on a {FIELD_WIDTH}x{FIELD_HEIGHT} field, seed {seed}");

    let settings = Settings::load(Path::new(SETTINGS_PATH));
    let mut driver = GameDriver::with_settings(seed, &settings);

    let frame_ms = 1000.0 / 60.0;
    let mut now_ms = 0.0;
    while now_ms < DEMO_TIME_LIMIT * 1000.0 {
        now_ms += frame_ms;
        script_input(&mut driver, now_ms / 1000.0);
        if driver.frame(now_ms) == FrameControl::Exit {
            break;
        }
    }

    let state = driver.state();
    let frame = driver.render();
    println!(
        "run over: phase {:?}, score {}, survived {:.1}s, {} draw commands in the last frame",
        state.phase,
        state.player.score,
        state.difficulty.elapsed,
        frame.commands.len()
    );

    if state.phase == GamePhase::GameOver {
        let mut scores = HighScores::load(Path::new(SCORES_PATH));
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        if let Some(rank) =
            scores.add_score(state.player.score, state.difficulty.elapsed as u32, timestamp_ms)
        {
            println!("new high score, rank {rank}");
            if let Err(err) = scores.save(Path::new(SCORES_PATH)) {
                log::warn!("could not save high scores: {err}");
            }
        }
    }

    driver.teardown();
}

/// A bot that sweeps the field: down-right, then up, then holds center-left
fn script_input(driver: &mut GameDriver, t: f64) {
    // Keys are re-pressed every frame; key_down is idempotent for held keys
    match (t as u64) % 8 {
        0 | 1 => {
            driver.key_up("w");
            driver.key_down("d");
            driver.key_down("s");
        }
        2 | 3 => {
            driver.key_up("d");
            driver.key_up("s");
            driver.key_down("w");
        }
        4 | 5 => {
            driver.key_up("w");
            driver.key_down("a");
        }
        _ => {
            driver.key_up("a");
            driver.key_down(" ");
        }
    }
}

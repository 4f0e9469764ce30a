//! Headless runner: plays the dungeon with the autopilot and logs what happens.
//!
//! Usage: `wizard-crawl [frames]`
//!
//! `WIZARD_CRAWL_CONFIG` and `WIZARD_CRAWL_FRAMES` point at JSON tuning and
//! frame-table files; both fall back to built-in defaults. `RUST_LOG` and
//! `LOG_FORMAT=json` control logging, `WIZARD_CRAWL_PROFILE` turns on puffin
//! scopes.

use std::path::PathBuf;

use wizard_crawl::config::SimConfig;
use wizard_crawl::engine::{step_frame, Autopilot, GameState};
use wizard_crawl::events::GameEvent;
use wizard_crawl::frames::FrameTables;
use wizard_crawl::systems::HeartRow;

const DEFAULT_FRAMES: u64 = 60 * 120;
const FRAME_DT: f32 = 1.0 / 60.0;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    puffin::set_scopes_on(std::env::var_os("WIZARD_CRAWL_PROFILE").is_some());

    let config = match env_path("WIZARD_CRAWL_CONFIG") {
        Some(path) => SimConfig::load(&path)?,
        None => SimConfig::default(),
    };
    let frames = match env_path("WIZARD_CRAWL_FRAMES") {
        Some(path) => FrameTables::load(&path)?,
        None => FrameTables::builtin(),
    };
    let max_frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };

    let mut state = GameState::new(config, frames);
    let mut pilot = Autopilot::new();
    let mut rooms_cleared = 0u32;

    tracing::info!(max_frames, "starting run");

    while state.frame < max_frames {
        puffin::GlobalProfiler::lock().new_frame();

        let input = pilot.next_input(&state, FRAME_DT);
        let report = step_frame(&mut state, &input, FRAME_DT);
        pilot.observe(report.boundary);

        for event in &report.events {
            match event {
                GameEvent::RoomCleared { room } => {
                    rooms_cleared += 1;
                    tracing::info!(x = room.x, y = room.y, "doors open");
                }
                GameEvent::RoomGenerated { room, monsters } => {
                    tracing::info!(x = room.x, y = room.y, monsters, "new room");
                }
                GameEvent::PlayerDied { .. } => {
                    tracing::warn!(frame = state.frame, "game over");
                }
                other => tracing::trace!(?other, "event"),
            }
        }

        if state.is_game_over() {
            break;
        }
    }

    let hearts = state
        .player
        .and_then(|id| state.registry.get(id))
        .map(|p| HeartRow::from_health(p.hp, p.hp_max));

    tracing::info!(
        frames = state.frame,
        rooms_visited = state.dungeon.generated_count(),
        rooms_cleared,
        hearts = ?hearts,
        "run finished"
    );
    Ok(())
}

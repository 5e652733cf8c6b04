//! Arkanoid main entry point.
//!
//! A breakout game on a stack of game states:
//! - **bevy_ecs** for the entity store, resources and system schedules
//! - **raylib** (feature `window`) for windowing, graphics and input
//! - a headless runner replaying scripted input otherwise
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing)
//! 2. Build the world and push the main menu
//! 3. Every frame: poll input, advance time, update the top state and apply
//!    its transition
//! 4. Stop every remaining state on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features window
//! cargo run -- --headless --frames 120 --script "Enter,.,Escape"
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "window"),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;

use arkanoid::backend::headless::{RecordingSurface, ScriptedInput};
use arkanoid::error::EngineError;
use arkanoid::game::Game;
use arkanoid::resources::gameconfig::GameConfig;
use arkanoid::states::FrameStatus;
use clap::Parser;

/// Fixed step used by the headless runner.
const HEADLESS_DT: f32 = 1.0 / 60.0;

/// Arkanoid, a breakout game.
#[derive(Parser)]
#[command(version, about = "A breakout game on a stack of game states.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Run without a window, replaying --script.
    #[arg(long)]
    headless: bool,

    /// Frames to run headless.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Headless input: comma-separated frames, codes joined with '+', '.' idle.
    #[arg(long, default_value = "")]
    script: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EngineError> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        match e {
            // unreadable file: keep defaults
            EngineError::Config(ref msg) if !cli.config.exists() => {
                log::warn!("No config loaded ({}), using defaults", msg);
            }
            e => return Err(e),
        }
    }

    let game = Game::new(config)?;

    if cli.headless || !cfg!(feature = "window") {
        return run_headless(game, cli.frames, &cli.script);
    }

    #[cfg(feature = "window")]
    {
        arkanoid::backend::raylib::run_window(game)
    }
    #[cfg(not(feature = "window"))]
    {
        Ok(())
    }
}

fn run_headless(mut game: Game, frames: u32, script: &str) -> Result<(), EngineError> {
    let mut input = ScriptedInput::parse(script);
    let mut surface = RecordingSurface::new();
    log::info!(
        "Running headless for {} frames ({} scripted)",
        frames,
        input.len()
    );

    for frame in 0..frames {
        if game.frame(&input, &mut surface, HEADLESS_DT)? == FrameStatus::Quit {
            log::info!("Quit after {} frames", frame + 1);
            return Ok(());
        }
        input.advance();
    }

    log::info!(
        "Stopped in {:?} after {} frames; last frame drew {} sprites, texts {:?}",
        game.machine().top_name(),
        frames,
        surface.sprite_count(),
        surface.texts()
    );
    game.shutdown()
}

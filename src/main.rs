//! Brick Breaker entry point
//!
//! Runs the game on the headless platform with the recording renderer. A
//! windowed backend plugs in through the same `Platform` and `Renderer`
//! traits.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use brick_breaker::assets::{AssetLoader, FsAssets, MemoryAssets};
use brick_breaker::platform::HeadlessPlatform;
use brick_breaker::renderer::RecordingRenderer;
use brick_breaker::{Game, RunOutcome, Settings};

#[derive(Parser, Debug)]
#[command(name = "brick-breaker", about = "Breakout clone")]
struct Cli {
    /// JSON settings file (missing fields use defaults; an unreadable or
    /// invalid file falls back to defaults)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Asset root containing models/ and images/. Without it, assets are
    /// stand-in handles.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long, default_value_t = 60 * 60 * 5)]
    max_frames: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Read keys instead of letting the autopilot play
    #[arg(long)]
    manual: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Brick Breaker starting...");

    let settings = match &cli.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut assets: Box<dyn AssetLoader> = match &cli.assets {
        Some(root) => {
            let fs_assets = FsAssets::new(root);
            log::info!("Loading assets from {}", fs_assets.root().display());
            Box::new(fs_assets)
        }
        None => Box::new(MemoryAssets::new()),
    };

    let mut game = Game::new(&settings, assets.as_mut()).context("loading game assets")?;
    game.autopilot = !cli.manual;

    let mut platform = HeadlessPlatform::new(1.0 / cli.fps, Some(cli.max_frames));
    let mut renderer = RecordingRenderer::new();

    let outcome = game.run(&mut platform, &mut renderer);
    match outcome {
        RunOutcome::Finished(result) => log::info!(
            "{:?} after {} frames: score {}, lives {}",
            result,
            renderer.frames(),
            game.state.score,
            game.state.lives
        ),
        RunOutcome::Closed => log::info!(
            "Stopped after {} frames: score {}, lives {}, {} bricks left",
            renderer.frames(),
            game.state.score,
            game.state.lives,
            game.state.bricks_alive()
        ),
    }

    Ok(())
}

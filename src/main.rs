//! fight-ring: a 2D fighting-simulation sandbox
//!
//! Two fighters (red and blue corner) random-walk inside a rectangular ring.
//! Positions saturate at the ropes; there is no combat, AI or win condition.
//! The window shows each fighter as a colored circle.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod logging;
mod render;
mod sim;

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::{get_time, is_key_pressed, is_quit_requested, next_frame, prevent_quit, Conf, KeyCode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use config::{FpsLimit, SimConfig, WindowSettings};
use sim::{generate_random_fighter, Fight, Fighter, FighterProfile, Ring};

#[derive(Parser)]
#[command(name = "fight-ring")]
#[command(version, about = "Two fighters wandering a bounded ring")]
struct Cli {
    /// RON configuration file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,
    /// Print the effective configuration as RON and exit
    #[arg(long)]
    dump_config: bool,
}

fn window_conf(settings: &WindowSettings) -> Conf {
    Conf {
        window_title: settings.title.clone(),
        window_width: i32::try_from(settings.width).unwrap_or(i32::MAX),
        window_height: i32::try_from(settings.height).unwrap_or(i32::MAX),
        window_resizable: false,
        ..Default::default()
    }
}

/// Fighter for one corner: the configured profile, or a generated one
fn corner_fighter(
    profile: Option<&FighterProfile>,
    rng: &mut ChaCha8Rng,
    size: f32,
    i: u32,
) -> Result<Fighter> {
    match profile {
        Some(profile) => Ok(Fighter::new(profile.clone())),
        None => generate_random_fighter(rng, size, i)
            .with_context(|| format!("generating fighter {}", i)),
    }
}

fn build_fight(config: &SimConfig, seed: u64) -> Result<Fight> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let size = config.generator.size;
    let red = corner_fighter(config.red.as_ref(), &mut rng, size, 1)?;
    let blue = corner_fighter(config.blue.as_ref(), &mut rng, size, 2)?;

    let ring = Ring::with_fighters(
        config.ring.name.clone(),
        config.ring.x_size,
        config.ring.y_size,
        red,
        blue,
    )?;
    Ok(Fight::new(ring, rng, config.motion.max_step))
}

/// Sleep off the rest of the frame budget
fn limit_frame_rate(frame_start: f64, fps_limit: FpsLimit) {
    let Some(target_frame_time) = fps_limit.frame_time() else {
        return;
    };
    // Native: sleep for the bulk, then spin-wait the last 2ms for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002;
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: no thread::sleep, spin only
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
}

async fn run(mut fight: Fight, settings: WindowSettings, max_ticks: Option<u64>) {
    // Handle window close ourselves so the exit gets logged
    prevent_quit();

    loop {
        let frame_start = get_time();

        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            tracing::info!(ticks = fight.ticks(), "quit requested");
            break;
        }
        if max_ticks.is_some_and(|limit| fight.ticks() >= limit) {
            tracing::info!(ticks = fight.ticks(), "tick limit reached");
            break;
        }

        if let Err(e) = fight.step() {
            tracing::error!(error = %e, ticks = fight.ticks(), "simulation step failed");
            break;
        }
        render::draw_ring(fight.ring(), &settings);

        limit_frame_rate(frame_start, settings.fps_limit);
        next_frame().await;
    }

    tracing::info!(fighters_created = Fighter::created_count(), "fight over");
}

fn main() -> Result<()> {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    logging::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    if cli.dump_config {
        println!("{}", config.to_ron_string()?);
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let fight = build_fight(&config, seed).context("setting up the fight")?;

    tracing::info!(
        version = VERSION,
        seed,
        fps = config.window.fps_limit.label(),
        max_step = fight.max_step(),
        "starting fight"
    );
    tracing::info!("\n{}", fight.ring());
    for (corner, fighter, _) in fight.ring().occupied() {
        tracing::debug!(%corner, "\n{}", fighter);
    }

    let conf = window_conf(&config.window);
    macroquad::Window::from_config(conf, run(fight, config.window, cli.ticks));
    Ok(())
}

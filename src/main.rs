//! Gridsweep headless driver.
//!
//! Runs the motion systems on a scene for a fixed number of ticks and logs
//! where everything ended up. Useful for reproducing collision behavior
//! without a renderer.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --scene scene.json --ticks 120
//! cargo run --release -- --random 200 --seed 7 --borders
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;

use gridsweep::components::position::Position;
use gridsweep::components::rectangle::Rectangle;
use gridsweep::components::solid::{Solid, TouchingSolid};
use gridsweep::components::velocity::Velocity;
use gridsweep::game::{motion_schedule, run_tick, setup_world, spawn_playfield_borders};
use gridsweep::resources::motionconfig::MotionConfig;
use gridsweep::scene::SceneData;

/// Gridsweep headless motion simulation
#[derive(Parser)]
#[command(version, about = "Sweep-resolved grid motion, headless.")]
struct Cli {
    /// INI configuration file. Defaults are used when omitted and ./motion.ini is missing.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON scene to spawn before the first tick.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 60)]
    ticks: u32,

    /// Scatter this many random solid movers over the playfield.
    #[arg(long, default_value_t = 0)]
    random: usize,

    /// Seed for --random.
    #[arg(long)]
    seed: Option<u64>,

    /// Wall the playfield in with four solid borders.
    #[arg(long)]
    borders: bool,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let mut config = MotionConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            config
        }
        None => {
            let mut config = MotionConfig::new();
            config.load_from_file().ok(); // ignore errors, use defaults
            config
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let playfield = config.playfield();
    let mut world = World::new();
    setup_world(&mut world, playfield);

    if cli.borders {
        spawn_playfield_borders(&mut world, &playfield);
    }

    if let Some(path) = &cli.scene {
        match SceneData::load_from_file(&path.to_string_lossy()) {
            Ok(scene) => {
                let spawned = scene.spawn_into(&mut world);
                log::info!("Spawned {} bodies from {}", spawned.len(), path.display());
            }
            Err(e) => {
                eprintln!("Failed to load scene from {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    if cli.random > 0 {
        let mut rng = match cli.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        for _ in 0..cli.random {
            let x = rng.i32(playfield.x..playfield.x + playfield.width);
            let y = rng.i32(playfield.y..playfield.y + playfield.height);
            let size = rng.i32(4..=16);
            let angle = rng.f32() * std::f32::consts::TAU;
            let speed = 20.0 + rng.f32() * 100.0;
            world.spawn((
                Position::from_ints(x, y),
                Rectangle::new(-size / 2, -size / 2, size, size),
                Velocity(Vec2::from_angle(angle) * speed),
                Solid,
            ));
        }
        log::info!("Scattered {} random solid movers", cli.random);
    }

    let mut schedule = motion_schedule();
    let dt = config.tick_seconds();
    for _ in 0..cli.ticks {
        run_tick(&mut world, &mut schedule, dt);
    }

    let mut bodies = world.query::<(Entity, &Position, Option<&TouchingSolid>)>();
    let mut remaining = 0;
    let mut contacts = 0;
    for (entity, position, touching) in bodies.iter(&world) {
        remaining += 1;
        match touching {
            Some(touching) if !touching.is_empty() => {
                contacts += touching.len();
                let others: Vec<Entity> = touching.iter().collect();
                log::info!("{:?} at {} touching {:?}", entity, position, others);
            }
            _ => log::debug!("{:?} at {}", entity, position),
        }
    }
    log::info!(
        "Simulated {} ticks: {} bodies remain, {} touching contacts",
        cli.ticks,
        remaining,
        contacts / 2
    );
}

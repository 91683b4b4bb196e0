//! # movement
//!
//! Builds a world with two moving entities, runs a few ticks, and prints the
//! result.

mod systems;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use components::{Health, Name, Position, Speed};
use minecs_world::{TickConfig, World};
use systems::{LogPositions, Movement};

#[derive(Parser)]
#[command(name = "movement", about = "Move entities by their speed each tick")]
struct Args {
    /// Number of ticks to run
    #[arg(short, long, default_value_t = 1)]
    ticks: u64,

    /// Target ticks per second (0 runs ticks back to back)
    #[arg(short = 'r', long, default_value_t = 60.0, value_parser = parse_tick_rate)]
    tick_rate: f64,

    /// Print the final entities as JSON
    #[arg(long)]
    json: bool,
}

fn parse_tick_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    TickConfig::new(rate, 1)
        .tick_duration()
        .map(|_| rate)
        .map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut world = World::new();
    world.create_entity((Name::new("a"), Position::new(0.0, 0.0), Speed::new(5.0, 10.0)))?;
    world.create_entity((
        Name::new("b"),
        Position::new(10.0, 5.0),
        Speed::new(1.0, 2.0),
        Health(100),
    ))?;

    world.add_system(Movement);
    world.add_system(LogPositions);
    info!(systems = ?world.system_names(), entities = world.manager().len(), "world ready");

    if args.ticks > 0 {
        world.run(&TickConfig::new(args.tick_rate, args.ticks))?;
    }

    let snapshots: Vec<_> = world.manager().iter().map(|e| e.snapshot()).collect();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    } else {
        for snapshot in &snapshots {
            println!("{}", snapshot.id);
            for (kind, value) in &snapshot.components {
                println!("  {kind}: {value}");
            }
        }
    }

    Ok(())
}

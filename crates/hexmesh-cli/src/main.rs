//! hexmesh CLI
//!
//! Builds a hexagonal board from the environment and answers queries about it.
//!
//! Usage:
//!   hexmesh path <from> <to>
//!   hexmesh distance <from> <to>
//!   hexmesh neighbours <coord> [mask]
//!   hexmesh groups [coord...]
//!   hexmesh rotate <left|right> [times] [center]
//!   hexmesh export

mod commands;
mod config;

use commands::Command;
use config::BoardConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_usage() {
    eprintln!("hexmesh - Query a hexagonal board");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  hexmesh path <from> <to>                  Shortest path between two cells");
    eprintln!("  hexmesh distance <from> <to>              Hop count between two cells");
    eprintln!("  hexmesh neighbours <coord> [mask]         Stored neighbours (mask 0..63, default 63)");
    eprintln!("  hexmesh groups [coord...]                 Connected groups (default: whole board)");
    eprintln!("  hexmesh rotate <left|right> [n] [center]  Rotate the board n sixty degree steps");
    eprintln!("  hexmesh export                            Print every cell");
    eprintln!();
    eprintln!("Coordinates are written QxR, e.g. 2x-1.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HEXMESH_RADIUS  Board radius (default: 3)");
    eprintln!("  HEXMESH_CENTER  Board centre (default: 0x0)");
    eprintln!("  HEXMESH_HOLES   Comma separated cells to leave out");
    eprintln!("  RUST_LOG        Log filter (default: hexmesh=info,hexmesh_grid=info)");
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexmesh=info,hexmesh_grid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut grid = config.build();
    tracing::info!(
        radius = config.radius,
        center = %config.center,
        holes = config.holes.len(),
        cells = grid.len(),
        "Board ready"
    );

    let report = command
        .run(&mut grid)
        .and_then(|value| Ok(serde_json::to_string_pretty(&value)?));

    match report {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

//! Run a random world until it dies out or repeats.
//!
//! Usage: `cargo run -p ndlife --example driver [DIM...]`
//!
//! With no arguments the world is 5×5×10×20. Set `RUST_LOG=ndlife_engine=trace`
//! to see per-step metrics.

use std::error::Error;
use std::io::{IsTerminal, Write};

use ndlife::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIMS: [u32; 4] = [5, 5, 10, 20];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ndlife_engine=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let dims: Vec<u32> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse())
        .collect::<Result<_, _>>()?;
    let dims = if dims.is_empty() {
        DEFAULT_DIMS.to_vec()
    } else {
        dims
    };

    let stdout = std::io::stdout();
    let clearer = if stdout.is_terminal() { "\x1b[H\x1b[2J" } else { "" };
    let mut out = stdout.lock();

    writeln!(out, "{clearer}Creating the world....")?;
    let world = World::new(WorldConfig::with_dimensions(dims))?;
    writeln!(
        out,
        "rules {}, seed {}",
        world.rules(),
        world.seed().unwrap_or_default()
    )?;

    let mut driver = Driver::new(world);
    let mut io_result = Ok(());
    let report = driver.run(|frame| {
        if io_result.is_ok() {
            io_result = write!(
                out,
                "{clearer}Generation {} ({} cells)\n{}",
                frame.generation, frame.population, frame.dump
            )
            .and_then(|()| out.flush());
        }
    });
    io_result?;

    writeln!(out)?;
    writeln!(out, "{}", report.outcome)?;
    writeln!(
        out,
        "Calculation time averaged {:.6}us per cell over {} generations",
        report.mean_us_per_cell(),
        report.generations
    )?;
    Ok(())
}

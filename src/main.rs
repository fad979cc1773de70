//! Topple Sim entry point
//!
//! Thin native launcher: places a target, then flies each angle/speed pair
//! given on the command line until the target topples.
//!
//! Usage: `topple-sim [--config PATH] [--seed N] ANGLE_DEG SPEED [ANGLE_DEG SPEED ...]`

#[cfg(not(target_arch = "wasm32"))]
use std::error::Error;

#[cfg(not(target_arch = "wasm32"))]
use topple_sim::{Launch, LogSink, Session, SimConfig};

#[cfg(not(target_arch = "wasm32"))]
struct Args {
    config: Option<String>,
    seed: Option<u64>,
    launches: Vec<Launch>,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, Box<dyn Error>> {
    let mut config = None;
    let mut seed = None;
    let mut numbers = Vec::new();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => config = Some(raw.next().ok_or("--config needs a path")?),
            "--seed" => seed = Some(raw.next().ok_or("--seed needs a value")?.parse()?),
            value => numbers.push(
                value
                    .parse::<f64>()
                    .map_err(|e| format!("bad number {value:?}: {e}"))?,
            ),
        }
    }

    if numbers.is_empty() || numbers.len() % 2 != 0 {
        return Err("expected one or more ANGLE_DEG SPEED pairs".into());
    }

    let launches = numbers
        .chunks_exact(2)
        .map(|pair| Launch::from_degrees(pair[0], pair[1]))
        .collect();

    Ok(Args {
        config,
        seed,
        launches,
    })
}

/// Seed from the wall clock when none is given
#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut session = Session::new(config, seed)?;
    println!("Target placed at x = {:.2} m", session.target().position_x());

    let mut sink = LogSink;
    for launch in args.launches {
        let outcome = session.attempt(launch, &mut sink)?;
        println!(
            "Attempt {} ({:.1}°, {:.2} m/s): {}",
            session.attempts(),
            launch.angle.to_degrees(),
            launch.speed,
            outcome.message()
        );
        if session.is_over() {
            break;
        }
    }

    if !session.is_over() {
        println!("Target still standing after {} attempts", session.attempts());
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No native launcher on the web; hosts drive `Session` directly
}

//! Headless tuning simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # 100 autopilot runs
//!   cargo run --bin simulate -- -n 1000        # more runs
//!   cargo run --bin simulate -- --seed 42      # reproducible run

use skyhopper::config::GameConfig;
use skyhopper::simulator::{run_simulation, SimConfig};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let sim = parse_args(&args);

    let game = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid game config: {}", e);
            process::exit(1);
        }
    };

    println!("Sky Hopper tuning simulator");
    println!();
    println!("  Runs:      {}", sim.runs);
    println!("  Max ticks: {}", sim.max_ticks);
    if let Some(seed) = sim.seed {
        println!("  Seed:      {}", seed);
    }
    println!();

    match run_simulation(&sim, &game) {
        Ok(report) => print!("{}", report.to_text()),
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut sim = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    sim.runs = args[i + 1].parse().unwrap_or(sim.runs);
                    i += 1;
                }
            }
            "-t" | "--max-ticks" => {
                if i + 1 < args.len() {
                    sim.max_ticks = args[i + 1].parse().unwrap_or(sim.max_ticks);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    sim.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("Usage: simulate [-n RUNS] [-t MAX_TICKS] [-s SEED]");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    sim
}

//! Maze balance simulator CLI.
//!
//! Plays batches of complete sessions headlessly with seeded random
//! policies and reports win/loss/score aggregates.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 100 runs, Apprentice
//!   cargo run --bin simulate -- -n 500 --seed 7   # bigger, reproducible
//!   cargo run --bin simulate -- --preset master --skill 0.9

use quizmaze::build_info::{BUILD_DATE, BUILD_VERSION};
use quizmaze::difficulty::DifficultyPreset;
use quizmaze::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("quizmaze simulator v{BUILD_VERSION} ({BUILD_DATE})");
    println!();
    println!("Configuration:");
    println!("  Runs:     {}", config.runs);
    println!("  Seed:     {}", config.seed);
    println!("  Preset:   {}", config.preset.name());
    println!("  Skill:    {:.0}%", config.answer_skill * 100.0);
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        println!("{}", report.to_json());
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().unwrap_or(42);
                    i += 1;
                }
            }
            "--preset" => {
                if i + 1 < args.len() {
                    config.preset = preset_by_name(&args[i + 1]).unwrap_or(config.preset);
                    i += 1;
                }
            }
            "--skill" => {
                if i + 1 < args.len() {
                    config.answer_skill = args[i + 1].parse().unwrap_or(0.7);
                    i += 1;
                }
            }
            "--steps" => {
                if i + 1 < args.len() {
                    config.max_steps = args[i + 1].parse().unwrap_or(5_000);
                    i += 1;
                }
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn preset_by_name(name: &str) -> Option<DifficultyPreset> {
    DifficultyPreset::ALL
        .into_iter()
        .find(|preset| preset.name().eq_ignore_ascii_case(name))
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs N      Sessions to simulate (default: 100)");
    println!("  -s, --seed N      RNG seed (default: 42)");
    println!("      --preset P    novice | apprentice | journeyman | master");
    println!("      --skill F     Correct-answer probability 0.0-1.0 (default: 0.7)");
    println!("      --steps N     Step cap per run (default: 5000)");
    println!("      --json        Also print the report as JSON");
    println!("  -h, --help        Show this help");
}

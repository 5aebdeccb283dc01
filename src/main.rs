//! Skirmish - command line entry point
//!
//! Reads a battlefield map, runs the combat (or the Elf attack-power search)
//! and prints the outcome as text or JSON.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use skirmish::battle::{
    find_flawless_attack_power, parse_battlefield, CombatEngine, CombatOutcome, RoundObserver,
    RoundReport,
};
use skirmish::core::error::Result;
use skirmish::core::CombatConfig;

/// Turn-based Goblin vs Elf grid combat
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Simulate grid combat and report rounds x remaining hit points")]
struct Args {
    /// Map file: `#` wall, `.` floor, `G` goblin, `E` elf
    input: PathBuf,

    /// TOML file with hit points, attack powers and round limit
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the Elves' attack power
    #[arg(long)]
    elf_attack: Option<i32>,

    /// Find the lowest Elf attack power that wins without Elf deaths
    #[arg(long)]
    search: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the board after every full round
    #[arg(long)]
    show_rounds: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct Report<'a> {
    elf_attack: i32,
    outcome: &'a CombatOutcome,
}

/// Prints the board after each completed round
struct BoardPrinter;

impl RoundObserver for BoardPrinter {
    fn round_completed(&mut self, engine: &CombatEngine, report: &RoundReport) {
        println!("After {} rounds:", report.round);
        println!("{}", engine.battlefield());
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skirmish=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CombatConfig::load_from_toml(path)?,
        None => CombatConfig::default(),
    };
    if let Some(elf_attack) = args.elf_attack {
        config = config.with_elf_attack(elf_attack);
    }

    let input = std::fs::read_to_string(&args.input)?;
    let field = parse_battlefield(&input, &config)?;
    tracing::info!(
        "Loaded {}x{} battlefield from {}",
        field.grid.width,
        field.grid.height,
        args.input.display()
    );

    let (elf_attack, outcome, final_board) = if args.search {
        let result = find_flawless_attack_power(&field, &config)?;
        (result.attack_power, result.outcome, None)
    } else {
        let mut engine = CombatEngine::new(field, config.clone())?;
        let outcome = if args.show_rounds {
            println!("Initially:");
            println!("{}", engine.battlefield());
            engine.simulate_with(&mut BoardPrinter)?
        } else {
            engine.simulate()?
        };
        (config.elf_attack, outcome, Some(engine.battlefield().to_string()))
    };

    match args.format {
        OutputFormat::Json => {
            let report = Report {
                elf_attack,
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if let Some(board) = final_board {
                println!("{}", board);
            }
            if args.search {
                println!("Elf attack power: {}", elf_attack);
            }
            println!("{}", outcome);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_text() {
        let args = Args::try_parse_from(["skirmish", "map.txt"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_format_json() {
        let args = Args::try_parse_from(["skirmish", "map.txt", "--format", "json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Args::try_parse_from(["skirmish", "map.txt", "--format", "xml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}

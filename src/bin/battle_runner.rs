//! Headless Battle Runner
//!
//! Runs a full battle from a catalog file and outputs a JSON result,
//! deterministic under a fixed `--seed`.

use clap::Parser;
use serde::Serialize;

use skirmish::battle::{BattleOutcome, BattleState};
use skirmish::core::constants::DEFAULT_MAX_BATTLE_TICKS;
use skirmish::core::types::Side;
use skirmish::unit::catalog::UnitCatalog;
use skirmish::unit::instance::HealthSnapshot;

/// Headless battle runner - resolve a battle and print the result
#[derive(Parser, Debug)]
#[command(name = "battle_runner")]
#[command(about = "Run an automated battle from a unit catalog and output the result")]
struct Args {
    /// Path to the unit catalog TOML file
    #[arg(long, default_value = "data/units.toml")]
    catalog: String,

    /// Unit names fielded by Side 1 (repeatable)
    #[arg(long = "side1", required = true)]
    side_one: Vec<String>,

    /// Unit names fielded by Side 2 (repeatable)
    #[arg(long = "side2", required = true)]
    side_two: Vec<String>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum ticks before the battle is called a draw
    #[arg(long, default_value_t = DEFAULT_MAX_BATTLE_TICKS)]
    max_ticks: u64,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct BattleResult {
    outcome: String,
    winner: Option<String>,
    ticks: u64,
    side_one_survivors: Vec<HealthSnapshot>,
    side_two_survivors: Vec<HealthSnapshot>,
    log: Vec<String>,
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("skirmish=info")
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);

    let catalog = match UnitCatalog::load(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load catalog '{}': {}", args.catalog, e);
            std::process::exit(1);
        }
    };

    let mut battle = BattleState::with_seed(seed);
    for (side, names) in [(Side::One, &args.side_one), (Side::Two, &args.side_two)] {
        for name in names {
            let assigned = catalog
                .require(name)
                .and_then(|template| battle.enlist(side, template));
            if let Err(e) = assigned {
                eprintln!("Cannot field '{}' on {}: {}", name, side, e);
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = battle.start() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let outcome = battle.run_to_completion(args.max_ticks);

    let result = BattleResult {
        outcome: match outcome {
            BattleOutcome::SideWon(_) => "victory".to_string(),
            BattleOutcome::Draw => "draw".to_string(),
            BattleOutcome::Aborted => "aborted".to_string(),
            BattleOutcome::Undecided => "undecided".to_string(),
        },
        winner: battle.winner().map(|side| side.to_string()),
        ticks: battle.tick(),
        side_one_survivors: battle.snapshots(Side::One),
        side_two_survivors: battle.snapshots(Side::Two),
        log: battle.log().messages().map(str::to_string).collect(),
        seed,
    };

    match args.format.as_str() {
        "text" => {
            for line in &result.log {
                println!("{}", line);
            }
            println!(
                "Finished after {} ticks ({})",
                result.ticks,
                result.winner.as_deref().unwrap_or("no winner")
            );
        }
        _ => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        },
    }
}

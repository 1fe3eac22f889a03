//! Skirmish - Entry Point
//!
//! Interactive front end for the battle engine: load a unit catalog,
//! assign units to the two sides, then step or auto-run the battle while
//! the log and roster health are printed each tick.

use skirmish::battle::{BattleOutcome, BattlePhase, BattleState};
use skirmish::core::config::BattleConfig;
use skirmish::core::error::Result;
use skirmish::core::types::Side;
use skirmish::unit::catalog::UnitCatalog;

use std::io::{self, Write};
use std::time::Duration;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("skirmish=debug")
        .init();

    tracing::info!("Skirmish starting...");

    let config = BattleConfig::default();

    // The async runtime paces auto-run ticks
    let rt = Runtime::new()?;

    let catalog = match UnitCatalog::load("data/units.toml") {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("could not load data/units.toml ({}); starting with an empty catalog", e);
            UnitCatalog::new()
        }
    };

    let mut battle = BattleState::with_seed(config.seed);

    // Display welcome message
    println!("\n=== SKIRMISH ===");
    println!("An automated turn-based battle simulator");
    println!();
    println!("Commands:");
    println!("  units              - List catalog units");
    println!("  assign <name> <1|2> - Add a unit to a side");
    println!("  start              - Begin the battle");
    println!("  tick / t           - Advance the battle by one tick");
    println!("  run <n>            - Run n ticks");
    println!("  auto               - Run to completion, one tick per second");
    println!("  status / s         - Show rosters and the battle log");
    println!("  abort              - Cancel the battle");
    println!("  quit / q           - Exit");
    println!();

    // Main command loop
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "units" {
            if catalog.is_empty() {
                println!("Catalog is empty.");
            }
            for unit in catalog.units() {
                println!(
                    "  {} (attack {}, health {}, weakness {})",
                    unit.name,
                    unit.attack,
                    unit.health,
                    unit.weakness.as_deref().unwrap_or("None")
                );
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("assign ") {
            match parse_assignment(rest) {
                Some((name, side)) => match catalog.require(name) {
                    Ok(template) => match battle.enlist(side, template) {
                        Ok(()) => println!("{} joins {}.", name, side),
                        Err(e) => println!("Cannot assign: {}", e),
                    },
                    Err(e) => println!("{}", e),
                },
                None => println!("Usage: assign <name> <1|2>"),
            }
            continue;
        }

        if input == "start" {
            match battle.start() {
                Ok(()) => println!("Battle begins!"),
                Err(e) => println!("{}", e),
            }
            continue;
        }

        if input == "tick" || input == "t" {
            step_and_print(&mut battle);
            continue;
        }

        if let Some(rest) = input.strip_prefix("run ") {
            if let Ok(n) = rest.parse::<u32>() {
                for _ in 0..n {
                    if battle.is_finished() {
                        break;
                    }
                    step_and_print(&mut battle);
                }
            } else {
                println!("Usage: run <number>");
            }
            continue;
        }

        if input == "auto" {
            if !matches!(battle.phase(), BattlePhase::InProgress) {
                println!("No battle in progress.");
                continue;
            }
            let interval = Duration::from_millis(config.tick_interval_ms);
            rt.block_on(async {
                while !battle.is_finished() && battle.tick() < config.max_ticks {
                    step_and_print(&mut battle);
                    if !battle.is_finished() {
                        tokio::time::sleep(interval).await;
                    }
                }
            });
            if !battle.is_finished() {
                battle.run_to_completion(config.max_ticks);
                print_new_messages(&battle, battle.log().len().saturating_sub(1));
            }
            continue;
        }

        if input == "status" || input == "s" {
            display_status(&battle);
            continue;
        }

        if input == "abort" {
            battle.abort();
            battle.run_tick();
            println!("Battle aborted.");
            continue;
        }

        println!(
            "Unknown command. Available: units, assign <name> <1|2>, start, tick, run <n>, auto, status, abort, quit"
        );
    }

    tracing::info!("Skirmish shutting down");
    Ok(())
}

fn parse_assignment(rest: &str) -> Option<(&str, Side)> {
    let (name, side) = rest.rsplit_once(' ')?;
    let side = match side.trim() {
        "1" => Side::One,
        "2" => Side::Two,
        _ => return None,
    };
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some((name, side))
    }
}

/// Run one tick and print whatever it appended to the log
fn step_and_print(battle: &mut BattleState) {
    let before = battle.log().len();
    battle.run_tick();
    print_new_messages(battle, before);
}

fn print_new_messages(battle: &BattleState, from: usize) {
    for event in &battle.log().events()[from..] {
        println!("  [tick {}] {}", event.tick, event.text);
    }
}

fn display_status(battle: &BattleState) {
    println!("Phase: {:?} (tick {})", battle.phase(), battle.tick());
    if let BattleOutcome::SideWon(side) = battle.outcome() {
        println!("Winner: {}", side);
    }
    for side in [Side::One, Side::Two] {
        println!("{}:", side);
        let snapshots = battle.snapshots(side);
        if snapshots.is_empty() {
            println!("  (no units)");
        }
        for snap in snapshots {
            println!(
                "  {} - {:.1} / {} HP",
                snap.name, snap.current_health, snap.health
            );
        }
    }
    println!("Battle log ({} entries):", battle.log().len());
    for message in battle.log().messages() {
        println!("  {}", message);
    }
}

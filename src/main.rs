//! Paldex Advisor - command line front end
//!
//! Loads the catalog and the player's progress from JSON, runs one of the
//! advisors and prints the result as text or JSON.

use clap::{Parser, Subcommand, ValueEnum};
use paldex_advisor::advisor::{
    capacity_for_base_level, recommend_battle_team, recommend_work_team, resolve_structures,
    BattleRecommendation, WorkRecommendation, STRUCTURES,
};
use paldex_advisor::catalog::load_catalog;
use paldex_advisor::combat::{get_boss, BOSSES};
use paldex_advisor::core::error::{AdvisorError, Result};
use paldex_advisor::core::{config, set_config, AdvisorConfig};
use paldex_advisor::progress::{
    evaluate_achievements, AchievementCategory, ProgressFacts, ACHIEVEMENTS, USED_BASE_ADVISOR,
    USED_BATTLE_ADVISOR,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "paldex")]
#[command(about = "Recommend base and battle teams from your discovered Pals")]
struct Args {
    /// Catalog JSON file (array of items)
    #[arg(long, global = true, default_value = "data/pals.json")]
    catalog: PathBuf,

    /// Progress JSON file (discovered, defeated_bosses, flags)
    #[arg(long, global = true, default_value = "data/progress.json")]
    progress: PathBuf,

    /// Optional TOML file overriding scoring constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Record feature usage in the progress file
    #[arg(long, global = true)]
    track: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend a work team for a set of base structures
    Base {
        /// Base level (1-20), sets the team capacity
        #[arg(long, default_value_t = 10)]
        level: u32,

        /// Structure to staff (repeatable)
        #[arg(long = "structure", short = 's')]
        structures: Vec<String>,
    },
    /// Recommend a team against a boss
    Battle {
        /// Boss name
        #[arg(long)]
        boss: Option<String>,

        /// Team size (1-5)
        #[arg(long, default_value_t = 5)]
        team_size: usize,
    },
    /// Show unlocked achievements and boss progress
    Achievements {
        /// Only show one category (discovery, combat, exploration)
        #[arg(long)]
        category: Option<String>,
    },
    /// List known structures
    Structures,
    /// List known bosses
    Bosses,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("paldex_advisor=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(path) = &args.config {
        let loaded = AdvisorConfig::load(path)?;
        if set_config(loaded).is_err() {
            tracing::warn!("config already initialised, ignoring {}", path.display());
        }
    }
    let config = config();

    match &args.command {
        Command::Structures => {
            for s in STRUCTURES {
                let skills = if s.is_passive() { "passive".to_string() } else { s.skills.join(", ") };
                println!("{:<34} priority {}  {}", s.name, s.priority, skills);
            }
            return Ok(());
        }
        Command::Bosses => {
            for b in BOSSES {
                let types: Vec<&str> = b.types.iter().map(|t| t.name()).collect();
                println!("{:<24} Lv.{:<3} {:<10} {:<18} {}", b.name, b.level, b.category, types.join("/"), b.location);
            }
            return Ok(());
        }
        _ => {}
    }

    let catalog = load_catalog(&args.catalog)?;
    let mut facts = if args.progress.exists() {
        ProgressFacts::load(&args.progress)?
    } else {
        tracing::info!("no progress file at {}, starting empty", args.progress.display());
        ProgressFacts::new()
    };
    let collection = facts.collection();

    match &args.command {
        Command::Base { level, structures } => {
            let selected = resolve_structures(structures)?;
            let capacity = capacity_for_base_level(*level, config);
            let result = recommend_work_team(&catalog, &collection, &selected, capacity, config);
            emit(args.format, &result, || print_work(&result, capacity))?;
            if args.track {
                facts.set_flag(USED_BASE_ADVISOR, true);
                save_progress(&args.progress, &facts)?;
            }
        }
        Command::Battle { boss, team_size } => {
            let boss = match boss {
                Some(name) => Some(get_boss(name).ok_or_else(|| AdvisorError::UnknownBoss(name.clone()))?),
                None => None,
            };
            let result = recommend_battle_team(&catalog, &collection, boss, *team_size, config);
            emit(args.format, &result, || print_battle(&result))?;
            if args.track {
                facts.set_flag(USED_BATTLE_ADVISOR, true);
                save_progress(&args.progress, &facts)?;
            }
        }
        Command::Achievements { category } => {
            let category = category.as_deref().map(str::parse::<AchievementCategory>).transpose()?;
            let report = evaluate_achievements(&facts, &catalog);
            emit(args.format, &report, || {
                println!(
                    "{}/{} achievements ({}%), {}/{} discovered, {} bosses defeated",
                    report.unlocked_count(),
                    report.total,
                    report.completion_percent(),
                    report.discovered,
                    report.catalog_total,
                    report.defeated
                );
                for progress in &report.category_progress {
                    println!("  {:<12} {}/{}", progress.category, progress.defeated, progress.total);
                }
                println!();
                for (achievement, unlocked) in report.filter(ACHIEVEMENTS, category) {
                    let mark = if unlocked { "x" } else { " " };
                    println!("[{mark}] {:<22} {}", achievement.name, achievement.description);
                }
            })?;
        }
        Command::Structures | Command::Bosses => {}
    }

    Ok(())
}

fn emit<T: Serialize>(format: Format, value: &T, text: impl FnOnce()) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
        Format::Text => text(),
    }
    Ok(())
}

fn save_progress(path: &Path, facts: &ProgressFacts) -> Result<()> {
    std::fs::write(path, facts.to_json()?)?;
    Ok(())
}

fn print_work(result: &WorkRecommendation, capacity: usize) {
    match result {
        WorkRecommendation::NoGoalSelected => {
            println!("Select at least one structure to get team recommendations.")
        }
        WorkRecommendation::NoCollection => {
            println!("You haven't discovered any Pals yet! Search for Pals to build your collection.")
        }
        WorkRecommendation::PassiveOnly { team } => {
            println!("Selected structures don't require Pal work. These are passive structures.");
            for (i, c) in team.iter().enumerate() {
                println!("{:>2}. {} ({})", i + 1, c.name, c.types);
            }
        }
        WorkRecommendation::Recommended(plan) => {
            println!("Recommended Team ({}/{} Pals)", plan.team.len(), capacity);
            for (i, c) in plan.team.iter().enumerate() {
                let relevant = if c.matched.is_empty() { "General support".to_string() } else { c.matched.join(", ") };
                println!("{:>2}. {:<16} score {:<5} {}", i + 1, c.name, c.score, relevant);
            }
            println!();
            println!("Work Coverage");
            for cov in &plan.coverage {
                if cov.covered {
                    println!(
                        "  {:<14} needed by {}: covered (Lv.{} - {} pal(s))",
                        cov.skill,
                        cov.demand,
                        cov.level,
                        cov.contributors.len()
                    );
                } else {
                    println!("  {:<14} needed by {}: NOT covered", cov.skill, cov.demand);
                }
            }
            if plan.has_passive_structures {
                println!("  (some selected structures are passive)");
            }
        }
    }
}

fn print_battle(result: &BattleRecommendation) {
    match result {
        BattleRecommendation::NoBossSelected => println!("Select a boss to get team recommendations."),
        BattleRecommendation::NoCollection => {
            println!("You haven't discovered any Pals yet! Search for Pals to build your collection.")
        }
        BattleRecommendation::Recommended(plan) => {
            println!(
                "{} (Lv.{}, {}) - {}",
                plan.boss.name,
                plan.boss.level,
                plan.boss.type_set(),
                plan.boss.location
            );
            for (i, c) in plan.team.iter().enumerate() {
                println!(
                    "{:>2}. {:<16} {:<16} x{:<5} {:<16} suggested Lv.{}",
                    i + 1,
                    c.name,
                    c.types.to_string(),
                    c.offensive,
                    c.effectiveness.label(),
                    c.suggested_level
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_base() {
        let args = Args::try_parse_from(["paldex", "base", "--level", "4", "-s", "Stone Pit", "-s", "Furnace"]).unwrap();
        match args.command {
            Command::Base { level, structures } => {
                assert_eq!(level, 4);
                assert_eq!(structures, vec!["Stone Pit".to_string(), "Furnace".to_string()]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_args_global_format() {
        let args = Args::try_parse_from(["paldex", "battle", "--boss", "Bushi", "--format", "json"]).unwrap();
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn test_achievements_category_flag() {
        let args = Args::try_parse_from(["paldex", "achievements", "--category", "cooking"]).unwrap();
        let Command::Achievements { category: Some(raw) } = args.command else {
            panic!("expected achievements command");
        };
        let err = raw.parse::<AchievementCategory>().unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownCategory(_)));
        assert_eq!("combat".parse::<AchievementCategory>().unwrap(), AchievementCategory::Combat);
    }
}

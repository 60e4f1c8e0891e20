mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fairway_core::config::{FairwayConfig, MatchAllocation};
use fairway_core::handicap::{self, HandicapAllocation};
use fairway_core::hole::HoleSpec;
use fairway_core::scorecard::Scorecard;
use fairway_core::ScoringMethod;
use fairway_engine::ScoringEngine;

#[derive(Debug, Parser)]
#[command(name = "fairway", version, about = "Golf handicaps and leaderboards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the scorecards in a JSON file.
    Leaderboard {
        /// JSON array of scorecards.
        file: PathBuf,
        /// stroke_play, match_play, stableford or skins.
        #[arg(short, long, default_value = "stroke_play")]
        method: String,
        /// Apply handicap strokes (net scoring).
        #[arg(long)]
        net: bool,
        /// In match play, allocate only the strokes given from the lowest handicap.
        #[arg(long)]
        relative: bool,
        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Course and playing handicap for a tee.
    Handicap {
        #[arg(long)]
        index: f64,
        #[arg(long)]
        slope: f64,
        #[arg(long)]
        rating: f64,
        #[arg(long)]
        par: i32,
        #[arg(short, long, default_value = "stroke_play")]
        method: String,
    },
    /// How an allowance spreads over holes ranked by stroke index.
    Allocation {
        #[arg(long, allow_negative_numbers = true)]
        allowance: i32,
        #[arg(long, default_value_t = 18)]
        holes: u8,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = FairwayConfig::load();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Leaderboard {
            file,
            method,
            net,
            relative,
            json,
        } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let scorecards = load_scorecards(&contents)
                .with_context(|| format!("loading scorecards from {}", file.display()))?;

            let mut options = config.engine;
            if relative {
                options.match_allocation = MatchAllocation::Relative;
            }
            let result = ScoringEngine::new(options)
                .leaderboard_by_name(&scorecards, &method, net)
                .context("scoring leaderboard")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::leaderboard_table(&result));
            }
        },
        Command::Handicap {
            index,
            slope,
            rating,
            par,
            method,
        } => {
            let method: ScoringMethod = method.parse()?;
            let course = handicap::course_handicap(index, slope, rating, par)?;
            let playing = handicap::playing_handicap(course, method, &config.allowances)?;
            println!("Course handicap:  {course}");
            println!("Playing handicap: {playing} ({method})");
        },
        Command::Allocation { allowance, holes } => {
            // Hole n carries stroke index n, so rows read hardest first
            let specs = (1..=holes).map(|n| HoleSpec::new(n, 4, n));
            let allocation = HandicapAllocation::for_holes(specs, allowance);
            print!("{}", render::allocation_table(&allocation));
        },
    }

    Ok(())
}

/// Parse a JSON array of cards. Totals left out of the export are filled
/// from the holes; totals that were given must match them.
fn load_scorecards(json: &str) -> anyhow::Result<Vec<Scorecard>> {
    let mut scorecards: Vec<Scorecard> = serde_json::from_str(json)?;
    for card in &mut scorecards {
        card.fill_missing_totals();
        card.validate()?;
    }
    Ok(scorecards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_engine::calculate_leaderboard;

    const DEMO: &str = include_str!("../../../demos/two_ball.json");

    #[test]
    fn demo_scorecards_load_and_validate() {
        let cards = load_scorecards(DEMO).unwrap();
        assert_eq!(cards.len(), 2);
        // Null strokes on Ada's fifth hole load as unplayed
        assert_eq!(cards[0].hole(5).map(|h| h.is_played()), Some(false));
    }

    #[test]
    fn cards_without_totals_get_them_from_holes() {
        let json = r#"[{
            "game_id": "g", "user_id": "u1", "player_name": "Ada",
            "holes": [
                {"hole_number": 1, "par": 4, "strokes": 5, "putts": 2, "stroke_index": 1},
                {"hole_number": 2, "par": 3, "strokes": 3, "putts": 1, "stroke_index": 2}
            ]
        }]"#;
        let cards = load_scorecards(json).unwrap();
        assert_eq!((cards[0].total_strokes, cards[0].total_putts), (8, 3));
    }

    #[test]
    fn wrong_totals_still_rejected() {
        let json = r#"[{
            "game_id": "g", "user_id": "u1", "player_name": "Ada", "total_strokes": 7,
            "holes": [{"hole_number": 1, "par": 4, "strokes": 5, "putts": 2, "stroke_index": 1}]
        }]"#;
        let err = load_scorecards(json).unwrap_err();
        assert!(err.to_string().contains("total_strokes is 7"), "{err}");
    }

    #[test]
    fn demo_match_skips_hole_not_finished() {
        let cards: Vec<Scorecard> = serde_json::from_str(DEMO).unwrap();
        let result = calculate_leaderboard(&cards, ScoringMethod::MatchPlay, false).unwrap();
        // Holes 1-4 compared: Grace wins 1 and 4, Ada wins 3, 2 halved
        let grace = result.entry_for("u2").unwrap();
        assert_eq!(grace.position, 1);
        assert_eq!(grace.score, 2.5);
    }

    #[test]
    fn cli_parses_leaderboard_flags() {
        let cli = Cli::try_parse_from([
            "fairway",
            "leaderboard",
            "cards.json",
            "--method",
            "skins",
            "--net",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Leaderboard { ref method, net: true, json: false, relative: false, .. }
                if method == "skins"
        ));
    }

    #[test]
    fn cli_accepts_negative_allowance() {
        let cli = Cli::try_parse_from(["fairway", "allocation", "--allowance", "-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Allocation {
                allowance: -2,
                holes: 18
            }
        ));
    }
}

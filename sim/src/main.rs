//! Batch battle simulator
//!
//! Runs many seeded battles between two demo-roster collectibles and
//! reports win rates and round counts. Each battle gets its own RNG seeded
//! with `base_seed + index`, so any single result can be replayed.

use clap::Parser;
use log::info;
use rayon::prelude::*;
use serde::Serialize;

use cca_core::roster::{demo_roster, find_by_token};
use cca_core::sim::simulate_battle;
use cca_core::state::Side;
use cca_core::{GameResult, XorShiftRng};

#[derive(Parser, Debug)]
#[command(name = "cca-sim", about = "Batch battle simulator for Crypto Combat Arena")]
struct Args {
    /// Token id of the player-side collectible
    #[arg(long, default_value = "1")]
    player: String,

    /// Token id of the opponent-side collectible
    #[arg(long, default_value = "2")]
    opponent: String,

    /// Number of battles to run
    #[arg(long, default_value_t = 1000)]
    battles: u64,

    /// Base RNG seed; battle i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit the summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// List the demo roster and exit
    #[arg(long)]
    roster: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    player: String,
    opponent: String,
    battles: u64,
    player_wins: u64,
    opponent_wins: u64,
    average_rounds: f64,
    longest_battle: usize,
}

fn main() -> GameResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.roster {
        for def in demo_roster() {
            println!(
                "{}: {} ({:?}) atk {} def {} spd {} hp {} en {}",
                def.token_id,
                def.name,
                def.rarity,
                def.stats.attack,
                def.stats.defense,
                def.stats.speed,
                def.stats.health,
                def.stats.energy
            );
        }
        return Ok(());
    }

    let player = find_by_token(&args.player)?;
    let opponent = find_by_token(&args.opponent)?;
    player.validate()?;
    opponent.validate()?;

    info!(
        "simulating {} battles: {} vs {}",
        args.battles, player.name, opponent.name
    );

    let results: Vec<(Side, usize)> = (0..args.battles)
        .into_par_iter()
        .map(|i| {
            let mut rng = XorShiftRng::seed_from_u64(args.seed.wrapping_add(i));
            let report = simulate_battle(&player, &opponent, &mut rng);
            (report.winner, report.rounds.len())
        })
        .collect();

    let player_wins = results.iter().filter(|(w, _)| *w == Side::Player1).count() as u64;
    let total_rounds: usize = results.iter().map(|(_, r)| r).sum();
    let summary = Summary {
        player: player.name.clone(),
        opponent: opponent.name.clone(),
        battles: args.battles,
        player_wins,
        opponent_wins: args.battles - player_wins,
        average_rounds: total_rounds as f64 / args.battles.max(1) as f64,
        longest_battle: results.iter().map(|(_, r)| *r).max().unwrap_or(0),
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("failed to serialize summary: {}", e),
        }
    } else {
        println!(
            "{} vs {}: {} battles, {} / {} wins, avg {:.1} rounds (longest {})",
            summary.player,
            summary.opponent,
            summary.battles,
            summary.player_wins,
            summary.opponent_wins,
            summary.average_rounds,
            summary.longest_battle
        );
    }

    Ok(())
}

//! Fire-and-forget battles for the sandbox screen
//!
//! The UI calls this to preview a matchup without driving rounds itself; the
//! full report (winner, per-round transcript, final state) comes back as one
//! JS object.

use cca_core::roster::find_by_token;
use cca_core::sim::simulate_battle;
use cca_core::XorShiftRng;
use log::debug;
use wasm_bindgen::prelude::*;

/// Run a complete simulated battle between two demo-roster collectibles
#[wasm_bindgen]
pub fn run_sandbox_battle(
    player_token: &str,
    opponent_token: &str,
    seed: u64,
) -> Result<JsValue, String> {
    let player = find_by_token(player_token).map_err(|e| e.to_string())?;
    let opponent = find_by_token(opponent_token).map_err(|e| e.to_string())?;

    debug!("sandbox battle: {} vs {} (seed {})", player.name, opponent.name, seed);

    let mut rng = XorShiftRng::seed_from_u64(seed);
    let report = simulate_battle(&player, &opponent, &mut rng);

    serde_wasm_bindgen::to_value(&report).map_err(|e| e.to_string())
}

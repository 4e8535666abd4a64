//! Non-interactive battle resolution
//!
//! Drives the engine and the opponent policy round by round until an end
//! condition holds, recording a per-round summary for replay. A hard cap on
//! recorded rounds guarantees termination even if the engine's own round-cap
//! logic were misconfigured.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::CombatEngine;
use crate::opponents::choose_action;
use crate::rng::BattleRng;
use crate::state::{BattlePhase, BattleState, Side};
use crate::types::{BattleAction, CharacterDef};

/// Hard safety cap on recorded rounds, independent of the engine's round cap
pub const MAX_SIM_ROUNDS: usize = 50;

/// What happened in one resolved round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub round_number: i32,
    pub player1_action: BattleAction,
    pub player2_action: BattleAction,
    /// Health player2 lost this round
    pub damage: i32,
    /// Side ahead on current health after the round (tie goes to player2)
    pub leader: Side,
}

/// Full record of a simulated battle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    pub winner: Side,
    pub rounds: Vec<RoundSummary>,
    pub final_state: BattleState,
}

impl BattleReport {
    fn finish(winner: Side, rounds: Vec<RoundSummary>, mut state: BattleState) -> Self {
        state.phase = BattlePhase::Finished;
        Self {
            winner,
            rounds,
            final_state: state,
        }
    }
}

/// Simulate a battle where player1 plays the trivial "always attack" script
/// and player2 plays the opponent policy.
pub fn simulate_battle(
    a: &CharacterDef,
    b: &CharacterDef,
    rng: &mut impl BattleRng,
) -> BattleReport {
    simulate_battle_with(a, b, rng, |_| BattleAction::Attack)
}

/// Simulate a battle with a caller-supplied script for player1's actions.
/// Player2 is always driven by the opponent policy.
pub fn simulate_battle_with(
    a: &CharacterDef,
    b: &CharacterDef,
    rng: &mut impl BattleRng,
    mut script: impl FnMut(&BattleState) -> BattleAction,
) -> BattleReport {
    let engine = CombatEngine::new();
    let mut state = engine.initialize_battle(a, b);
    let mut rounds = Vec::new();

    loop {
        let end = engine.check_battle_end(&state);
        if end.ended {
            let winner = end.winner.unwrap_or(Side::Player1);
            debug!("battle over after {} rounds, {:?} wins", rounds.len(), winner);
            return BattleReport::finish(winner, rounds, state);
        }

        let player1_action = script(&state);
        let player2_action = choose_action(&state.player2, &state.player1, rng);

        let round_number = state.current_round;
        let health_before = state.player2.current_health;
        state = engine.process_round(&state, player1_action.clone(), player2_action.clone(), rng);

        rounds.push(RoundSummary {
            round_number,
            player1_action,
            player2_action,
            damage: (health_before - state.player2.current_health).abs(),
            leader: if state.player1.current_health > state.player2.current_health {
                Side::Player1
            } else {
                Side::Player2
            },
        });

        if rounds.len() >= MAX_SIM_ROUNDS {
            break;
        }
    }

    // Safety-cap fallback: whoever holds more health takes the match.
    let winner = if state.player1.current_health > state.player2.current_health {
        Side::Player1
    } else {
        Side::Player2
    };
    debug!("simulation hit the round cap, {:?} declared winner", winner);
    BattleReport::finish(winner, rounds, state)
}

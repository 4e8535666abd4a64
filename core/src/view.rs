//! View types for UI serialization
//!
//! Lightweight snapshots of the battle state for the frame UI. Rendering is
//! not this crate's business; the view is just the JSON contract.

use serde::{Deserialize, Serialize};

use crate::state::{BattleCharacter, BattlePhase, BattleState};
use crate::types::Rarity;

/// One combatant as the UI sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterView {
    pub token_id: String,
    pub name: String,
    pub image_url: String,
    pub rarity: Rarity,
    pub current_health: i32,
    pub max_health: i32,
    pub current_energy: i32,
    pub max_energy: i32,
    /// Display names of active status effects
    pub active_effects: Vec<String>,
    /// Ids of abilities that are affordable and off cooldown
    pub ready_abilities: Vec<String>,
}

impl From<&BattleCharacter> for CharacterView {
    fn from(character: &BattleCharacter) -> Self {
        Self {
            token_id: character.def.token_id.clone(),
            name: character.def.name.clone(),
            image_url: character.def.image_url.clone(),
            rarity: character.def.rarity,
            current_health: character.current_health,
            max_health: character.max_health(),
            current_energy: character.current_energy,
            max_energy: character.max_energy(),
            active_effects: character
                .status_effects
                .iter()
                .map(|e| e.name.clone())
                .collect(),
            ready_abilities: character
                .def
                .abilities
                .iter()
                .filter(|a| {
                    character.ability_ready(&a.id) && character.current_energy >= a.energy_cost
                })
                .map(|a| a.id.clone())
                .collect(),
        }
    }
}

/// The complete battle view sent to the frame UI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleView {
    pub player1: CharacterView,
    pub player2: CharacterView,
    pub round: i32,
    pub phase: BattlePhase,
    pub timer: i32,
}

impl BattleView {
    pub fn from_state(state: &BattleState) -> Self {
        Self {
            player1: CharacterView::from(&state.player1),
            player2: CharacterView::from(&state.player2),
            round: state.current_round,
            phase: state.phase,
            timer: state.timer,
        }
    }
}

//! Collectible definitions, status effects and battle actions
//!
//! The serde attributes mirror the JSON the frame UI already speaks:
//! camelCase fields, snake_case effect tags, `type`-tagged actions.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::state::{ATTACK_ENERGY_COST, DEFEND_ENERGY_COST};

/// Collectible rarity tiers (cosmetic, irrelevant to combat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Base stats of a collectible, immutable for the whole battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStats {
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    /// Maximum health
    pub health: i32,
    /// Maximum energy
    pub energy: i32,
}

/// Named effects an ability or status instance can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    DefenseBoost,
    DamageAbsorption,
    SpeedBoost,
    Poison,
    Regeneration,
}

/// An ability owned by a character definition, never mutated in battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Rounds before the ability can be used again
    pub cooldown: i32,
    pub energy_cost: i32,
    /// Flat damage component, if the ability deals damage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    /// Status effect applied on use, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectKind>,
}

/// The collectible a battle character is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDef {
    pub token_id: String,
    pub contract_address: String,
    pub name: String,
    pub image_url: String,
    pub rarity: Rarity,
    pub stats: CharacterStats,
    pub abilities: Vec<Ability>,
}

impl CharacterDef {
    /// Look up an owned ability by id
    pub fn ability(&self, id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.id == id)
    }

    /// Fail fast on a corrupted definition.
    ///
    /// Mid-battle illegal input is a wasted turn, but a malformed definition
    /// is a caller bug and is rejected here before a battle ever starts.
    pub fn validate(&self) -> GameResult<()> {
        let stats = [
            ("attack", self.stats.attack),
            ("defense", self.stats.defense),
            ("speed", self.stats.speed),
            ("health", self.stats.health),
            ("energy", self.stats.energy),
        ];
        for (stat, value) in stats {
            if value < 0 {
                return Err(GameError::NegativeStat {
                    stat: stat.into(),
                    value,
                });
            }
        }
        if self.stats.health == 0 {
            return Err(GameError::ZeroMaxHealth);
        }
        if self.stats.energy == 0 {
            return Err(GameError::ZeroMaxEnergy);
        }
        for (i, ability) in self.abilities.iter().enumerate() {
            if ability.cooldown < 0 || ability.energy_cost < 0 {
                return Err(GameError::InvalidAbility {
                    ability_id: ability.id.clone(),
                });
            }
            if self.abilities[..i].iter().any(|a| a.id == ability.id) {
                return Err(GameError::DuplicateAbilityId {
                    ability_id: ability.id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A timed modifier attached to exactly one battle character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEffect {
    pub id: String,
    pub name: String,
    /// Remaining rounds; purged once the per-round decrement reaches 0
    pub duration: i32,
    pub effect: EffectKind,
}

impl StatusEffect {
    pub fn new(id: &str, name: &str, duration: i32, effect: EffectKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            effect,
        }
    }
}

/// One side's chosen action for a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BattleAction {
    Attack,
    Defend,
    #[serde(rename_all = "camelCase")]
    Ability { ability_id: String },
}

impl BattleAction {
    /// Energy the actor must pay to execute this action.
    ///
    /// An unknown ability id costs nothing; the engine turns it into a no-op
    /// anyway.
    pub fn energy_cost(&self, actor: &CharacterDef) -> i32 {
        match self {
            BattleAction::Attack => ATTACK_ENERGY_COST,
            BattleAction::Defend => DEFEND_ENERGY_COST,
            BattleAction::Ability { ability_id } => actor
                .ability(ability_id)
                .map(|a| a.energy_cost)
                .unwrap_or(0),
        }
    }

    /// Attack and ability actions are offensive; defend is not
    pub fn is_offensive(&self) -> bool {
        !matches!(self, BattleAction::Defend)
    }
}

//! Mutable battle state and tuning constants

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{CharacterDef, EffectKind, StatusEffect};

/// Energy cost of a plain attack
pub const ATTACK_ENERGY_COST: i32 = 20;
/// Energy cost of defending
pub const DEFEND_ENERGY_COST: i32 = 10;
/// Energy restored to both sides at the end of every round
pub const ENERGY_REGEN: i32 = 20;
/// Seconds the UI gives each side to pick an action (advisory only)
pub const BATTLE_TIMER: i32 = 30;
/// Rounds after which the battle is forced to a decision
pub const ROUND_CAP: i32 = 20;

/// Health lost per round while poisoned
pub const POISON_DAMAGE: i32 = 50;
/// Health restored per round while regenerating
pub const REGEN_HEAL: i32 = 30;

/// Defense multiplier while a defense boost is active
pub const DEFENSE_BOOST_MULTIPLIER: f64 = 1.5;
/// Speed multiplier while a speed boost is active
pub const SPEED_BOOST_MULTIPLIER: f64 = 1.5;
/// Fraction of defense that still counts against ability damage
pub const ABILITY_DEFENSE_FACTOR: f64 = 0.3;
/// Fraction of incoming damage kept while damage absorption is active
pub const ABSORPTION_FACTOR: f64 = 0.5;

/// Duration of the self-applied "Defending" effect
pub const DEFEND_EFFECT_DURATION: i32 = 1;
/// Duration of an ability-granted defense boost
pub const DEFENSE_BOOST_DURATION: i32 = 3;
/// Duration of an ability-granted damage absorption shield
pub const ABSORPTION_DURATION: i32 = 2;
/// Duration of an ability-granted speed boost
pub const SPEED_BOOST_DURATION: i32 = 2;
/// Duration of poison applied to the defender
pub const POISON_DURATION: i32 = 3;
/// Duration of an ability-granted regeneration
pub const REGEN_DURATION: i32 = 3;

/// One of the two symmetric sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }
}

/// Linear phase progression; the engine sets `Action` after each round,
/// the simulation driver sets `Finished` once an end condition holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BattlePhase {
    Preparation,
    Action,
    Resolution,
    Finished,
}

/// One side's in-match combatant state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleCharacter {
    /// The immutable collectible this combatant was built from
    pub def: CharacterDef,
    pub current_health: i32,
    pub current_energy: i32,
    /// Active effects; order carries no priority, all tick independently
    pub status_effects: Vec<StatusEffect>,
    /// Ability id -> rounds remaining (0 or absent = ready)
    pub cooldowns: BTreeMap<String, i32>,
}

impl BattleCharacter {
    /// Build a combatant at full health and energy with a clean slate
    pub fn from_def(def: CharacterDef) -> Self {
        let current_health = def.stats.health;
        let current_energy = def.stats.energy;
        Self {
            def,
            current_health,
            current_energy,
            status_effects: Vec::new(),
            cooldowns: BTreeMap::new(),
        }
    }

    pub fn max_health(&self) -> i32 {
        self.def.stats.health
    }

    pub fn max_energy(&self) -> i32 {
        self.def.stats.energy
    }

    pub fn health_fraction(&self) -> f64 {
        if self.max_health() == 0 {
            return 0.0;
        }
        f64::from(self.current_health) / f64::from(self.max_health())
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health <= 0
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.status_effects.iter().any(|e| e.effect == kind)
    }

    /// Speed used for turn ordering, including an active speed boost
    pub fn effective_speed(&self) -> f64 {
        let base = f64::from(self.def.stats.speed);
        if self.has_effect(EffectKind::SpeedBoost) {
            base * SPEED_BOOST_MULTIPLIER
        } else {
            base
        }
    }

    /// Whether an owned ability is off cooldown
    pub fn ability_ready(&self, ability_id: &str) -> bool {
        self.cooldowns.get(ability_id).copied().unwrap_or(0) == 0
    }

    pub fn add_status(&mut self, effect: StatusEffect) {
        self.status_effects.push(effect);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current_health = (self.current_health - amount).max(0);
    }

    pub fn heal(&mut self, amount: i32) {
        self.current_health = (self.current_health + amount).min(self.max_health());
    }

    pub fn regen_energy(&mut self, amount: i32) {
        self.current_energy = (self.current_energy + amount).min(self.max_energy());
    }
}

/// The complete state of one battle, exclusively owned by its creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    pub player1: BattleCharacter,
    pub player2: BattleCharacter,
    /// 1-indexed, incremented after each resolved round
    pub current_round: i32,
    pub phase: BattlePhase,
    /// UI countdown; the engine only resets it, never enforces it
    pub timer: i32,
}

impl BattleState {
    pub fn character(&self, side: Side) -> &BattleCharacter {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    pub fn character_mut(&mut self, side: Side) -> &mut BattleCharacter {
        match side {
            Side::Player1 => &mut self.player1,
            Side::Player2 => &mut self.player2,
        }
    }

    /// Borrow the acting side and its opponent at the same time
    pub fn pair_mut(&mut self, actor: Side) -> (&mut BattleCharacter, &mut BattleCharacter) {
        match actor {
            Side::Player1 => (&mut self.player1, &mut self.player2),
            Side::Player2 => (&mut self.player2, &mut self.player1),
        }
    }
}

//! Round resolution and battle-end determination
//!
//! [`CombatEngine`] is stateless; every call is a pure transformation of the
//! battle state it is handed. Illegal actions never error — an actor that
//! cannot pay for its action, or whose ability is on cooldown or not owned,
//! simply wastes its turn.

use log::debug;

use crate::rng::BattleRng;
use crate::state::{
    BattleCharacter, BattlePhase, BattleState, Side, ABILITY_DEFENSE_FACTOR, ABSORPTION_DURATION,
    ABSORPTION_FACTOR, BATTLE_TIMER, DEFENSE_BOOST_DURATION, DEFENSE_BOOST_MULTIPLIER,
    DEFEND_EFFECT_DURATION, ENERGY_REGEN, POISON_DAMAGE, POISON_DURATION, REGEN_DURATION,
    REGEN_HEAL, ROUND_CAP, SPEED_BOOST_DURATION,
};
use crate::types::{BattleAction, CharacterDef, EffectKind, StatusEffect};

/// Outcome of a battle-end check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleEnd {
    pub ended: bool,
    pub winner: Option<Side>,
}

impl BattleEnd {
    fn ongoing() -> Self {
        Self {
            ended: false,
            winner: None,
        }
    }

    fn won_by(side: Side) -> Self {
        Self {
            ended: true,
            winner: Some(side),
        }
    }
}

/// Stateless combat resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatEngine;

impl CombatEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build a fresh battle state: full health and energy, no status effects,
    /// all cooldowns ready, round 1, preparation phase.
    pub fn initialize_battle(&self, a: &CharacterDef, b: &CharacterDef) -> BattleState {
        BattleState {
            player1: BattleCharacter::from_def(a.clone()),
            player2: BattleCharacter::from_def(b.clone()),
            current_round: 1,
            phase: BattlePhase::Preparation,
            timer: BATTLE_TIMER,
        }
    }

    /// Resolve one full round and return the resulting state.
    ///
    /// Sequence: status ticks, speed-ordered actions (the round stops early
    /// if the first blow is fatal), energy regeneration, cooldown decrement,
    /// round advance.
    pub fn process_round(
        &self,
        state: &BattleState,
        action1: BattleAction,
        action2: BattleAction,
        rng: &mut impl BattleRng,
    ) -> BattleState {
        let mut next = state.clone();

        self.tick_status_effects(&mut next.player1);
        self.tick_status_effects(&mut next.player2);

        for side in self.turn_order(&next) {
            let action = match side {
                Side::Player1 => &action1,
                Side::Player2 => &action2,
            };
            let (actor, target) = next.pair_mut(side);

            let cost = action.energy_cost(&actor.def);
            if actor.current_energy < cost {
                debug!(
                    "round {}: {:?} cannot afford {:?} ({} < {})",
                    state.current_round, side, action, actor.current_energy, cost
                );
                continue;
            }

            if self.apply_action(actor, target, action, rng) {
                actor.current_energy -= cost;
            }

            // A fatal first blow ends the round; the second actor never moves.
            if target.is_defeated() {
                break;
            }
        }

        next.player1.regen_energy(ENERGY_REGEN);
        next.player2.regen_energy(ENERGY_REGEN);

        self.tick_cooldowns(&mut next.player1);
        self.tick_cooldowns(&mut next.player2);

        next.current_round += 1;
        next.phase = BattlePhase::Action;
        next.timer = BATTLE_TIMER;

        debug!(
            "round {} resolved: p1 {}hp/{}en, p2 {}hp/{}en",
            state.current_round,
            next.player1.current_health,
            next.player1.current_energy,
            next.player2.current_health,
            next.player2.current_energy
        );

        next
    }

    /// Whether the battle is over, and who won.
    ///
    /// Deterministic tie rules: a simultaneous double knockout and an exact
    /// health-percentage tie at the round cap both go to player1.
    pub fn check_battle_end(&self, state: &BattleState) -> BattleEnd {
        match (state.player1.is_defeated(), state.player2.is_defeated()) {
            (true, true) => return BattleEnd::won_by(Side::Player1),
            (false, true) => return BattleEnd::won_by(Side::Player1),
            (true, false) => return BattleEnd::won_by(Side::Player2),
            (false, false) => {}
        }

        if state.current_round > ROUND_CAP {
            let winner = if state.player2.health_fraction() > state.player1.health_fraction() {
                Side::Player2
            } else {
                Side::Player1
            };
            return BattleEnd::won_by(winner);
        }

        BattleEnd::ongoing()
    }

    /// Higher effective speed acts first; player1 wins the tie
    fn turn_order(&self, state: &BattleState) -> [Side; 2] {
        if state.player1.effective_speed() >= state.player2.effective_speed() {
            [Side::Player1, Side::Player2]
        } else {
            [Side::Player2, Side::Player1]
        }
    }

    /// Apply poison and regeneration ticks, then age and purge effects
    fn tick_status_effects(&self, character: &mut BattleCharacter) {
        let mut damage = 0;
        let mut healing = 0;
        for effect in &character.status_effects {
            match effect.effect {
                EffectKind::Poison => damage += POISON_DAMAGE,
                EffectKind::Regeneration => healing += REGEN_HEAL,
                // Boosts and absorption are read by other calculations
                // while active; they have no per-round tick.
                _ => {}
            }
        }
        character.take_damage(damage);
        character.heal(healing);

        for effect in &mut character.status_effects {
            effect.duration -= 1;
        }
        character.status_effects.retain(|e| e.duration > 0);
    }

    fn tick_cooldowns(&self, character: &mut BattleCharacter) {
        for remaining in character.cooldowns.values_mut() {
            if *remaining > 0 {
                *remaining -= 1;
            }
        }
    }

    /// Returns true if the action actually executed (and should be paid for)
    fn apply_action(
        &self,
        actor: &mut BattleCharacter,
        target: &mut BattleCharacter,
        action: &BattleAction,
        rng: &mut impl BattleRng,
    ) -> bool {
        match action {
            BattleAction::Attack => {
                let damage = self.attack_damage(actor, target, rng);
                target.take_damage(damage);
                true
            }
            BattleAction::Defend => {
                actor.add_status(StatusEffect::new(
                    "defense_boost",
                    "Defending",
                    DEFEND_EFFECT_DURATION,
                    EffectKind::DefenseBoost,
                ));
                true
            }
            BattleAction::Ability { ability_id } => self.use_ability(actor, target, ability_id, rng),
        }
    }

    fn use_ability(
        &self,
        actor: &mut BattleCharacter,
        target: &mut BattleCharacter,
        ability_id: &str,
        rng: &mut impl BattleRng,
    ) -> bool {
        let ability = match actor.def.ability(ability_id) {
            Some(ability) => ability.clone(),
            None => {
                debug!("unknown ability '{}', turn wasted", ability_id);
                return false;
            }
        };
        if !actor.ability_ready(ability_id) {
            debug!("ability '{}' on cooldown, turn wasted", ability_id);
            return false;
        }

        if let Some(flat) = ability.damage {
            let damage = self.ability_damage(flat, actor, target, rng);
            target.take_damage(damage);
        }

        if let Some(effect) = ability.effect {
            match effect {
                EffectKind::DefenseBoost => actor.add_status(StatusEffect::new(
                    "ability_defense_boost",
                    "Enhanced Defense",
                    DEFENSE_BOOST_DURATION,
                    EffectKind::DefenseBoost,
                )),
                EffectKind::DamageAbsorption => actor.add_status(StatusEffect::new(
                    "damage_absorption",
                    "Damage Shield",
                    ABSORPTION_DURATION,
                    EffectKind::DamageAbsorption,
                )),
                EffectKind::SpeedBoost => actor.add_status(StatusEffect::new(
                    "speed_boost",
                    "Enhanced Speed",
                    SPEED_BOOST_DURATION,
                    EffectKind::SpeedBoost,
                )),
                EffectKind::Regeneration => actor.add_status(StatusEffect::new(
                    "regeneration",
                    "Regenerating",
                    REGEN_DURATION,
                    EffectKind::Regeneration,
                )),
                EffectKind::Poison => target.add_status(StatusEffect::new(
                    "poison",
                    "Poisoned",
                    POISON_DURATION,
                    EffectKind::Poison,
                )),
            }
        }

        // Cooldown starts whether the ability dealt damage or only applied
        // an effect.
        actor.cooldowns.insert(ability.id, ability.cooldown);
        true
    }

    /// Plain attack: max(1, atk - 0.5 * effective defense), scaled by a
    /// uniform factor in [0.8, 1.2) and floored
    fn attack_damage(
        &self,
        attacker: &BattleCharacter,
        defender: &BattleCharacter,
        rng: &mut impl BattleRng,
    ) -> i32 {
        let attack = f64::from(attacker.def.stats.attack);
        let mut defense = f64::from(defender.def.stats.defense);
        if defender.has_effect(EffectKind::DefenseBoost) {
            defense *= DEFENSE_BOOST_MULTIPLIER;
        }

        let base = (attack - defense * 0.5).max(1.0);
        let raw = (base * rng.range_f64(0.8, 1.2)).floor() as i32;
        self.absorb(defender, raw)
    }

    /// Ability damage bypasses most of the defense: only
    /// [`ABILITY_DEFENSE_FACTOR`] of it counts, variance is [0.9, 1.1)
    fn ability_damage(
        &self,
        flat: i32,
        attacker: &BattleCharacter,
        defender: &BattleCharacter,
        rng: &mut impl BattleRng,
    ) -> i32 {
        let attack = f64::from(attacker.def.stats.attack);
        let defense = f64::from(defender.def.stats.defense) * ABILITY_DEFENSE_FACTOR;

        let base = (f64::from(flat) + attack * 0.5 - defense).max(1.0);
        let raw = (base * rng.range_f64(0.9, 1.1)).floor() as i32;
        self.absorb(defender, raw)
    }

    /// An active damage-absorption shield halves incoming damage, floor 1
    fn absorb(&self, defender: &BattleCharacter, damage: i32) -> i32 {
        if defender.has_effect(EffectKind::DamageAbsorption) {
            ((f64::from(damage) * ABSORPTION_FACTOR).floor() as i32).max(1)
        } else {
            damage
        }
    }
}

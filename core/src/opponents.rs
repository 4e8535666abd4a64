//! Opponent policy: heuristic action selection for the non-human side
//!
//! A pure function of the two combatants and the injected RNG. This is not
//! optimal play — it is the original app's "feels alive" heuristic, made
//! reproducible by the seedable random source.

use crate::rng::BattleRng;
use crate::state::{BattleCharacter, ATTACK_ENERGY_COST, DEFEND_ENERGY_COST};
use crate::types::BattleAction;

/// Health fraction below which a side counts as "low"
const LOW_HEALTH_FRACTION: f64 = 0.3;
/// Probability of defending when the policy's own side is low
const DEFENSIVE_CHANCE: f64 = 0.6;

const ATTACK_WEIGHT: f64 = 0.4;
const DEFEND_WEIGHT: f64 = 0.2;
const ABILITY_WEIGHT: f64 = 0.4;

/// Pick an action for `actor` against `opponent`.
///
/// Candidates are the currently affordable and ready actions. Finishing
/// blows are prioritized, then self-preservation, then a weighted random
/// pick. With a freshly initialized character the candidate list is never
/// empty; should it ever be, the fallback `Attack` is a no-op the engine
/// absorbs.
pub fn choose_action(
    actor: &BattleCharacter,
    opponent: &BattleCharacter,
    rng: &mut impl BattleRng,
) -> BattleAction {
    let candidates = available_actions(actor);
    if candidates.is_empty() {
        return BattleAction::Attack;
    }

    // Go for the kill when the opponent is nearly down.
    if opponent.health_fraction() < LOW_HEALTH_FRACTION {
        let offensive: Vec<&BattleAction> =
            candidates.iter().filter(|a| a.is_offensive()).collect();
        if !offensive.is_empty() {
            return offensive[rng.gen_range(offensive.len())].clone();
        }
    }

    // Turtle up (usually) when the policy's own side is nearly down.
    if actor.health_fraction() < LOW_HEALTH_FRACTION
        && candidates.contains(&BattleAction::Defend)
        && rng.chance(DEFENSIVE_CHANCE)
    {
        return BattleAction::Defend;
    }

    // Weighted filter: each candidate survives with probability equal to its
    // weight; an empty survivor set falls back to the full candidate list.
    let survivors: Vec<&BattleAction> = candidates
        .iter()
        .filter(|a| rng.chance(action_weight(a)))
        .collect();

    if survivors.is_empty() {
        candidates[rng.gen_range(candidates.len())].clone()
    } else {
        survivors[rng.gen_range(survivors.len())].clone()
    }
}

/// Everything `actor` could legally do this round
fn available_actions(actor: &BattleCharacter) -> Vec<BattleAction> {
    let mut actions = Vec::new();

    if actor.current_energy >= ATTACK_ENERGY_COST {
        actions.push(BattleAction::Attack);
    }
    if actor.current_energy >= DEFEND_ENERGY_COST {
        actions.push(BattleAction::Defend);
    }
    for ability in &actor.def.abilities {
        if actor.current_energy >= ability.energy_cost && actor.ability_ready(&ability.id) {
            actions.push(BattleAction::Ability {
                ability_id: ability.id.clone(),
            });
        }
    }

    actions
}

fn action_weight(action: &BattleAction) -> f64 {
    match action {
        BattleAction::Attack => ATTACK_WEIGHT,
        BattleAction::Defend => DEFEND_WEIGHT,
        BattleAction::Ability { .. } => ABILITY_WEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::XorShiftRng;
    use crate::state::BattleCharacter;
    use crate::tests::{basic_def, def_with_ability, drain_energy};

    #[test]
    fn test_full_energy_candidates() {
        let actor = BattleCharacter::from_def(def_with_ability(40, None));
        let actions = available_actions(&actor);

        assert!(actions.contains(&BattleAction::Attack));
        assert!(actions.contains(&BattleAction::Defend));
        assert!(actions.iter().any(|a| matches!(a, BattleAction::Ability { .. })));
    }

    #[test]
    fn test_unaffordable_ability_excluded() {
        let mut actor = BattleCharacter::from_def(def_with_ability(40, None));
        // 30 energy left: attack (20) is affordable, the 40-cost ability is not.
        drain_energy(&mut actor, 70);

        let actions = available_actions(&actor);
        assert!(actions.contains(&BattleAction::Attack));
        assert!(!actions.iter().any(|a| matches!(a, BattleAction::Ability { .. })));
    }

    #[test]
    fn test_cooldown_excludes_ability() {
        let mut actor = BattleCharacter::from_def(def_with_ability(40, None));
        actor.cooldowns.insert("test-strike".into(), 2);

        let actions = available_actions(&actor);
        assert!(!actions.iter().any(|a| matches!(a, BattleAction::Ability { .. })));
    }

    #[test]
    fn test_low_opponent_forces_offense() {
        let actor = BattleCharacter::from_def(basic_def("ai", 80, 50, 60, 800, 100));
        let mut opponent = BattleCharacter::from_def(basic_def("p", 80, 50, 60, 800, 100));
        opponent.current_health = 100; // 12.5%

        let mut rng = XorShiftRng::seed_from_u64(7);
        for _ in 0..50 {
            let action = choose_action(&actor, &opponent, &mut rng);
            assert!(action.is_offensive(), "picked {:?} against a dying opponent", action);
        }
    }

    #[test]
    fn test_broke_actor_falls_back_to_attack() {
        let mut actor = BattleCharacter::from_def(basic_def("ai", 80, 50, 60, 800, 100));
        let opponent = BattleCharacter::from_def(basic_def("p", 80, 50, 60, 800, 100));
        let all = actor.current_energy;
        drain_energy(&mut actor, all);

        let mut rng = XorShiftRng::seed_from_u64(7);
        assert_eq!(choose_action(&actor, &opponent, &mut rng), BattleAction::Attack);
    }

    #[test]
    fn test_choice_is_seed_deterministic() {
        let actor = BattleCharacter::from_def(def_with_ability(40, None));
        let opponent = BattleCharacter::from_def(basic_def("p", 80, 50, 60, 800, 100));

        let picks_a: Vec<BattleAction> = {
            let mut rng = XorShiftRng::seed_from_u64(99);
            (0..20).map(|_| choose_action(&actor, &opponent, &mut rng)).collect()
        };
        let picks_b: Vec<BattleAction> = {
            let mut rng = XorShiftRng::seed_from_u64(99);
            (0..20).map(|_| choose_action(&actor, &opponent, &mut rng)).collect()
        };

        assert_eq!(picks_a, picks_b);
    }
}

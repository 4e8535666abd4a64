//! Turn ordering, energy gating and no-op actions

use super::{basic_def, def_with_ability, drain_energy, PinnedRng};
use crate::engine::CombatEngine;
use crate::state::ENERGY_REGEN;
use crate::types::{BattleAction, EffectKind, StatusEffect};

#[test]
fn test_faster_side_strikes_first_and_can_end_the_round() {
    let engine = CombatEngine::new();
    let mut state = engine.initialize_battle(
        &basic_def("slow", 95, 50, 60, 900, 100),
        &basic_def("fast", 95, 50, 95, 900, 100),
    );
    state.player1.current_health = 1;
    let mut rng = PinnedRng::new(1.0);

    let next = engine.process_round(&state, BattleAction::Attack, BattleAction::Attack, &mut rng);

    // Player2 moves first, the blow is fatal, player1 never acts.
    assert_eq!(next.player1.current_health, 0);
    assert_eq!(next.player2.current_health, 900);
    // Player1's attack cost was never deducted.
    assert_eq!(next.player1.current_energy, 100);
}

#[test]
fn test_speed_tie_goes_to_player1() {
    let engine = CombatEngine::new();
    let mut state = engine.initialize_battle(
        &basic_def("a", 95, 50, 75, 900, 100),
        &basic_def("b", 95, 50, 75, 900, 100),
    );
    state.player2.current_health = 1;
    let mut rng = PinnedRng::new(1.0);

    let next = engine.process_round(&state, BattleAction::Attack, BattleAction::Attack, &mut rng);

    assert_eq!(next.player2.current_health, 0);
    assert_eq!(next.player1.current_health, 900);
}

#[test]
fn test_speed_boost_reorders_the_round() {
    let engine = CombatEngine::new();
    // Player1 is slower on base speed (60 vs 80)...
    let mut state = engine.initialize_battle(
        &basic_def("boosted", 95, 50, 60, 900, 100),
        &basic_def("fast", 95, 50, 80, 900, 100),
    );
    // ...but an active speed boost (60 * 1.5 = 90) puts it in front.
    state.player1.add_status(StatusEffect::new(
        "speed_boost",
        "Enhanced Speed",
        2,
        EffectKind::SpeedBoost,
    ));
    state.player2.current_health = 1;
    let mut rng = PinnedRng::new(1.0);

    let next = engine.process_round(&state, BattleAction::Attack, BattleAction::Attack, &mut rng);

    assert_eq!(next.player2.current_health, 0);
    assert_eq!(next.player1.current_health, 900);
}

#[test]
fn test_unaffordable_action_is_skipped_but_opponent_still_acts() {
    let engine = CombatEngine::new();
    let mut state = engine.initialize_battle(
        &basic_def("broke", 95, 50, 95, 900, 100),
        &basic_def("solvent", 95, 50, 60, 900, 100),
    );
    drain_energy(&mut state.player1, 100);
    let mut rng = PinnedRng::new(1.0);

    let next = engine.process_round(&state, BattleAction::Attack, BattleAction::Attack, &mut rng);

    // Player1 (faster) skipped its turn; player2's attack still resolved.
    assert_eq!(next.player2.current_health, 900);
    assert!(next.player1.current_health < 900);
    // Only the end-of-round regeneration touched player1's energy.
    assert_eq!(next.player1.current_energy, ENERGY_REGEN);
}

#[test]
fn test_ability_on_cooldown_is_a_noop() {
    let engine = CombatEngine::new();
    let mut state = engine.initialize_battle(
        &def_with_ability(40, Some(150)),
        &basic_def("b", 70, 80, 60, 900, 100),
    );
    state.player1.cooldowns.insert("test-strike".to_string(), 2);
    let mut rng = PinnedRng::new(1.0);

    let next = engine.process_round(
        &state,
        BattleAction::Ability {
            ability_id: "test-strike".to_string(),
        },
        BattleAction::Defend,
        &mut rng,
    );

    // No damage, no energy spent; only the cooldown bookkeeping moved.
    assert_eq!(next.player2.current_health, 900);
    assert_eq!(next.player1.current_energy, 100);
    assert_eq!(next.player1.cooldowns.get("test-strike"), Some(&1));
}

#[test]
fn test_unknown_ability_is_a_noop() {
    let engine = CombatEngine::new();
    let state = engine.initialize_battle(
        &basic_def("a", 95, 50, 75, 900, 100),
        &basic_def("b", 70, 80, 60, 900, 100),
    );
    let mut rng = PinnedRng::new(1.0);

    let next = engine.process_round(
        &state,
        BattleAction::Ability {
            ability_id: "no-such-ability".to_string(),
        },
        BattleAction::Defend,
        &mut rng,
    );

    assert_eq!(next.player2.current_health, 900);
    assert_eq!(next.player1.current_energy, 100);
}

#[test]
fn test_energy_regenerates_and_clamps() {
    let engine = CombatEngine::new();
    let mut state = engine.initialize_battle(
        &basic_def("a", 95, 50, 75, 900, 100),
        &basic_def("b", 70, 80, 60, 900, 100),
    );
    drain_energy(&mut state.player1, 100);
    let mut rng = PinnedRng::new(1.0);

    let idle = BattleAction::Ability {
        ability_id: "no-such-ability".to_string(),
    };

    // 0 -> 20 after one idle round...
    state = engine.process_round(&state, idle.clone(), BattleAction::Defend, &mut rng);
    assert_eq!(state.player1.current_energy, 20);

    // ...and clamps at 100 rather than reaching 120 after six.
    for _ in 0..5 {
        state = engine.process_round(&state, idle.clone(), BattleAction::Defend, &mut rng);
    }
    assert_eq!(state.player1.current_energy, 100);
}

#[test]
fn test_cooldowns_tick_down_to_ready() {
    let engine = CombatEngine::new();
    let mut state = engine.initialize_battle(
        &def_with_ability(40, Some(150)),
        &basic_def("b", 70, 80, 60, 2000, 100),
    );
    let mut rng = PinnedRng::new(1.0);

    let ability = BattleAction::Ability {
        ability_id: "test-strike".to_string(),
    };
    state = engine.process_round(&state, ability.clone(), BattleAction::Defend, &mut rng);
    assert!(!state.player1.ability_ready("test-strike"));

    // Two more rounds of decrement and the ability is usable again.
    state = engine.process_round(&state, BattleAction::Attack, BattleAction::Defend, &mut rng);
    state = engine.process_round(&state, BattleAction::Attack, BattleAction::Defend, &mut rng);
    assert!(state.player1.ability_ready("test-strike"));
}

mod turns;

use crate::rng::BattleRng;
use crate::state::BattleCharacter;
use crate::types::{Ability, CharacterDef, CharacterStats, EffectKind, Rarity};

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

pub(crate) fn basic_def(
    name: &str,
    attack: i32,
    defense: i32,
    speed: i32,
    health: i32,
    energy: i32,
) -> CharacterDef {
    CharacterDef {
        token_id: name.to_string(),
        contract_address: "0xtest".to_string(),
        name: name.to_string(),
        image_url: String::new(),
        rarity: Rarity::Common,
        stats: CharacterStats {
            attack,
            defense,
            speed,
            health,
            energy,
        },
        abilities: vec![],
    }
}

/// A 95/80/75/900 attacker with one ability, "test-strike"
pub(crate) fn def_with_ability(energy_cost: i32, damage: Option<i32>) -> CharacterDef {
    let mut def = basic_def("striker", 95, 80, 75, 900, 100);
    def.abilities.push(Ability {
        id: "test-strike".to_string(),
        name: "Test Strike".to_string(),
        description: "Test Ability".to_string(),
        cooldown: 3,
        energy_cost,
        damage,
        effect: None,
    });
    def
}

/// Same base character, ability applies `effect` instead of damage
pub(crate) fn def_with_effect(effect: EffectKind) -> CharacterDef {
    let mut def = basic_def("effector", 95, 80, 75, 900, 100);
    def.abilities.push(Ability {
        id: "test-effect".to_string(),
        name: "Test Effect".to_string(),
        description: "Test Ability".to_string(),
        cooldown: 3,
        energy_cost: 10,
        damage: None,
        effect: Some(effect),
    });
    def
}

pub(crate) fn drain_energy(character: &mut BattleCharacter, amount: i32) {
    character.current_energy = (character.current_energy - amount).max(0);
}

/// Test RNG with the variance factor pinned to an exact value, so damage
/// assertions can be exact
pub(crate) struct PinnedRng {
    factor: f64,
}

impl PinnedRng {
    pub(crate) fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl BattleRng for PinnedRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn range_f64(&mut self, _lo: f64, _hi: f64) -> f64 {
        self.factor
    }
}

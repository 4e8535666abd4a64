//! Built-in demo roster
//!
//! The collectibles normally arrive from the wallet layer; these are the
//! demo definitions used by the sandbox client, the sim CLI and tests.

use crate::error::{GameError, GameResult};
use crate::types::{Ability, CharacterDef, CharacterStats, EffectKind, Rarity};

const DEMO_CONTRACT: &str = "0x1234567890abcdef1234567890abcdef12345678";

/// All demo collectibles
pub fn demo_roster() -> Vec<CharacterDef> {
    vec![
        CharacterDef {
            token_id: "1".into(),
            contract_address: DEMO_CONTRACT.into(),
            name: "Cyber Warrior".into(),
            image_url: "/images/cyber-warrior.png".into(),
            rarity: Rarity::Legendary,
            stats: CharacterStats {
                attack: 95,
                defense: 80,
                speed: 75,
                health: 900,
                energy: 100,
            },
            abilities: vec![
                Ability {
                    id: "cyber-slash".into(),
                    name: "Cyber Slash".into(),
                    description: "A devastating energy blade attack".into(),
                    cooldown: 3,
                    energy_cost: 40,
                    damage: Some(150),
                    effect: None,
                },
                Ability {
                    id: "shield-matrix".into(),
                    name: "Shield Matrix".into(),
                    description: "Creates a protective energy barrier".into(),
                    cooldown: 4,
                    energy_cost: 30,
                    damage: None,
                    effect: Some(EffectKind::DefenseBoost),
                },
            ],
        },
        CharacterDef {
            token_id: "2".into(),
            contract_address: DEMO_CONTRACT.into(),
            name: "Neon Assassin".into(),
            image_url: "/images/neon-assassin.png".into(),
            rarity: Rarity::Epic,
            stats: CharacterStats {
                attack: 85,
                defense: 60,
                speed: 95,
                health: 750,
                energy: 100,
            },
            abilities: vec![Ability {
                id: "stealth-strike".into(),
                name: "Stealth Strike".into(),
                description: "Invisible attack with critical damage".into(),
                cooldown: 2,
                energy_cost: 35,
                damage: Some(120),
                effect: None,
            }],
        },
        CharacterDef {
            token_id: "3".into(),
            contract_address: DEMO_CONTRACT.into(),
            name: "Plasma Guardian".into(),
            image_url: "/images/plasma-guardian.png".into(),
            rarity: Rarity::Rare,
            stats: CharacterStats {
                attack: 70,
                defense: 90,
                speed: 60,
                health: 950,
                energy: 100,
            },
            abilities: vec![Ability {
                id: "plasma-barrier".into(),
                name: "Plasma Barrier".into(),
                description: "Absorbs incoming damage".into(),
                cooldown: 3,
                energy_cost: 25,
                damage: None,
                effect: Some(EffectKind::DamageAbsorption),
            }],
        },
    ]
}

/// Look up a demo collectible by token id
pub fn find_by_token(token_id: &str) -> GameResult<CharacterDef> {
    demo_roster()
        .into_iter()
        .find(|def| def.token_id == token_id)
        .ok_or_else(|| GameError::UnknownToken {
            token_id: token_id.into(),
        })
}

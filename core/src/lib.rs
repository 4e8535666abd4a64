//! Combat engine for Crypto Combat Arena.
//!
//! Everything in this crate is a pure transformation of an explicitly passed
//! battle state: there are no globals, no I/O, and all randomness flows
//! through a caller-supplied [`rng::BattleRng`]. The engine never fails on
//! valid-shaped input — illegal actions (unaffordable, on cooldown, unknown
//! ability) degrade to a wasted turn for that actor, never to an error.

pub mod engine;
pub mod error;
pub mod opponents;
pub mod rng;
pub mod roster;
pub mod sim;
pub mod state;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use engine::{BattleEnd, CombatEngine};
pub use error::{GameError, GameResult};
pub use rng::{BattleRng, XorShiftRng};
pub use sim::{simulate_battle, simulate_battle_with, BattleReport, RoundSummary};
pub use state::{BattleCharacter, BattlePhase, BattleState, Side};
pub use types::{Ability, BattleAction, CharacterDef, CharacterStats, EffectKind, Rarity, StatusEffect};

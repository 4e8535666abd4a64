//! Error types for boundary validation
//!
//! The engine itself never errors mid-battle; these cover the one place
//! failure is a caller bug rather than a battle condition — a corrupted
//! collectible definition arriving at the boundary.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors raised when validating externally supplied definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameError {
    /// A base stat is negative
    NegativeStat { stat: String, value: i32 },
    /// Maximum health must be positive
    ZeroMaxHealth,
    /// Maximum energy must be positive
    ZeroMaxEnergy,
    /// An ability carries an invalid cooldown or energy cost
    InvalidAbility { ability_id: String },
    /// Two abilities on the same definition share an id
    DuplicateAbilityId { ability_id: String },
    /// Roster lookup failed
    UnknownToken { token_id: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NegativeStat { stat, value } => {
                write!(f, "stat '{}' is negative ({})", stat, value)
            }
            GameError::ZeroMaxHealth => write!(f, "maximum health must be positive"),
            GameError::ZeroMaxEnergy => write!(f, "maximum energy must be positive"),
            GameError::InvalidAbility { ability_id } => {
                write!(f, "ability '{}' has a negative cooldown or energy cost", ability_id)
            }
            GameError::DuplicateAbilityId { ability_id } => {
                write!(f, "duplicate ability id '{}'", ability_id)
            }
            GameError::UnknownToken { token_id } => {
                write!(f, "no character with token id '{}'", token_id)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type alias for boundary operations
pub type GameResult<T> = Result<T, GameError>;

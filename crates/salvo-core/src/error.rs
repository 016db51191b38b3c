//! Error types for the game simulation.
//!
//! Rejected player actions, failed selection queries and fatal data errors
//! all share [`GameError`]. [`GameError::is_fatal`] separates the last group,
//! which must end the session.

use thiserror::Error;

use crate::enums::{BombKind, TechId};

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for all simulation errors.
#[derive(Debug, Error)]
pub enum GameError {
    // --- Rejected actions ---
    /// Not enough deposit for the action.
    #[error("Insufficient deposit: need {required}, have {available}")]
    InsufficientDeposit { required: i64, available: i64 },

    /// Action gated behind a technology that is not researched.
    #[error("Requires {0} research")]
    MissingTechnology(TechId),

    /// Weapon already built or being built.
    #[error("{} already built or under construction", .0.label())]
    AlreadyBuilt(BombKind),

    /// Weapon not ready to launch.
    #[error("{} is not ready", .0.label())]
    NotReady(BombKind),

    /// Interceptor build already running in this city.
    #[error("{0} is already building interceptors")]
    BuildInProgress(String),

    /// Iron Curtain already up.
    #[error("Iron Curtain is already active")]
    ShieldActive,

    /// City has been destroyed.
    #[error("{0} has been destroyed")]
    CityDestroyed(String),

    /// City has no interceptors in storage.
    #[error("{0} has no interceptors in storage")]
    NoInterceptors(String),

    /// No unclaimed attack missile within interceptor range.
    #[error("No incoming missile within range of {0}")]
    NoTargetInRange(String),

    /// Research could not be started.
    #[error("{0} is not available for research")]
    ResearchUnavailable(TechId),

    /// Another research already occupies the slot.
    #[error("Already researching {0}")]
    ResearchBusy(TechId),

    /// The game has ended; no further actions are accepted.
    #[error("The game is over")]
    GameOver,

    // --- Selection ---
    /// Nothing of the requested kind under or next to the cursor.
    #[error("No {0} selected")]
    NothingSelected(&'static str),

    // --- Fatal ---
    /// Technology name that does not exist in the node table.
    #[error("Unknown technology: {0}")]
    UnknownTechnology(String),

    /// Persisted snapshot could not be parsed.
    #[error("Malformed snapshot at line {line}: {message}")]
    MalformedSnapshot { line: usize, message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Fatal errors abort the session instead of being reported as feedback.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::UnknownTechnology(_)
                | GameError::MalformedSnapshot { .. }
                | GameError::Config(_)
                | GameError::Io(_)
        )
    }

    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        GameError::MalformedSnapshot {
            line,
            message: message.into(),
        }
    }
}

//! Error types for the interaction engine.

use sombra_world::ConfigError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while starting a session.
///
/// Nothing that happens during play is an error: misses and unmet puzzle
/// preconditions are ordinary outcomes.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The requested room does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(String),
}

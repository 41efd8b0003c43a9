use thiserror::Error;
use crate::core::models::Vec2;

/// Level text that cannot produce a playable grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedLevel {
    #[error("level contains no rows")]
    NoRows,
    #[error("level has no player")]
    NoPlayer,
    #[error("level has more than one player, at ({}, {}) and ({}, {})", first.x, first.y, second.x, second.y)]
    MultiplePlayers { first: Vec2, second: Vec2 },
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("malformed level: {0}")]
    Malformed(#[from] MalformedLevel),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

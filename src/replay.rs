use log::debug;
use thiserror::Error;
use crate::core::{Direction, MoveEngine};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("unknown move '{symbol}' at position {index}")]
    UnknownSymbol { symbol: char, index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayStep {
    Move(Direction),
    Undo,
    Redo,
}

/// Parses LURD notation: `u d l r` in either case, `-` undoes and `+` redoes.
/// Whitespace is ignored.
pub fn parse_steps(moves: &str) -> Result<Vec<ReplayStep>, ReplayError> {
    moves
        .chars()
        .enumerate()
        .filter(|(_, symbol)| !symbol.is_whitespace())
        .map(|(index, symbol)| match symbol.to_ascii_lowercase() {
            'u' => Ok(ReplayStep::Move(Direction::Up)),
            'd' => Ok(ReplayStep::Move(Direction::Down)),
            'l' => Ok(ReplayStep::Move(Direction::Left)),
            'r' => Ok(ReplayStep::Move(Direction::Right)),
            '-' => Ok(ReplayStep::Undo),
            '+' => Ok(ReplayStep::Redo),
            _ => Err(ReplayError::UnknownSymbol { symbol, index }),
        })
        .collect()
}

/// Runs every step against the engine and returns how many of them had no effect.
pub fn replay(engine: &mut MoveEngine<'_>, steps: &[ReplayStep]) -> usize {
    let mut ignored = 0;
    for &step in steps {
        let applied = match step {
            ReplayStep::Move(direction) => engine.move_direction(direction),
            ReplayStep::Undo => engine.undo(),
            ReplayStep::Redo => engine.redo(),
        };
        if applied.is_none() {
            ignored += 1;
        }
    }
    debug!("replayed {} steps, {} had no effect", steps.len(), ignored);
    ignored
}

//! Rules engine for Sokoban: level grid, push-legal moves and a linear undo/redo history.
//!
//! Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

pub mod core;
pub mod replay;
pub mod report;
#[cfg(test)]
mod test;

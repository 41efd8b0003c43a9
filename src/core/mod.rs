mod models;
mod update;
mod bounded_grid;
mod consts;
mod bounds;
mod cell;
mod error;
mod grid;
mod history;

pub use models::{Direction, DynamicKind, Move, MoveOutcome, StaticKind, Vec2};
pub use consts::*;
pub use cell::Cell;
pub use error::{LevelError, MalformedLevel};
pub use grid::Grid;
pub use history::{History, MoveEngine};

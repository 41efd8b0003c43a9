use log::{debug, trace};
use crate::core::grid::Grid;
use crate::core::models::{Direction, Move, MoveOutcome};

/// Linear list of applied and undone moves.
///
/// Moves before the cursor are applied, moves at or after it can be redone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<Move>,
    cursor: usize,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn applied(&self) -> &[Move] {
        &self.moves[..self.cursor]
    }

    pub fn push_count(&self) -> usize {
        self.applied().iter().filter(|m| m.is_push).count()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.moves.len()
    }

    fn record(&mut self, command: Move) {
        if self.can_redo() {
            debug!("dropping {} redoable moves", self.moves.len() - self.cursor);
            self.moves.truncate(self.cursor);
        }
        self.moves.push(command);
        self.cursor += 1;
    }
}

/// Applies player moves to a borrowed grid and keeps the undo/redo history.
pub struct MoveEngine<'g> {
    grid: &'g mut Grid,
    history: History,
}

impl<'g> MoveEngine<'g> {
    pub fn new(grid: &'g mut Grid) -> MoveEngine<'g> {
        MoveEngine { grid, history: History::new() }
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the recorded command, or `None` when the move was blocked.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> Option<Move> {
        let MoveOutcome::Moved { is_push } = self.grid.do_move(dx, dy) else {
            return None;
        };
        let command = Move { dx, dy, is_push };
        self.history.record(command);
        Some(command)
    }

    pub fn move_direction(&mut self, direction: Direction) -> Option<Move> {
        let delta = direction.delta();
        self.move_player(delta.x, delta.y)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> Option<Move> {
        if !self.can_undo() {
            return None;
        }
        self.history.cursor -= 1;
        let command = self.history.moves[self.history.cursor];
        self.grid.undo_move(command.dx, command.dy, command.is_push);
        trace!("undo {:?}, cursor {}", command, self.history.cursor);
        Some(command)
    }

    pub fn redo(&mut self) -> Option<Move> {
        if !self.can_redo() {
            return None;
        }
        let command = self.history.moves[self.history.cursor];
        self.history.cursor += 1;
        let outcome = self.grid.do_move(command.dx, command.dy);
        debug_assert_eq!(outcome, MoveOutcome::Moved { is_push: command.is_push }, "redo diverged from history");
        trace!("redo {:?}, cursor {}", command, self.history.cursor);
        Some(command)
    }
}

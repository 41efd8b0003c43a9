use log::trace;
use crate::core::grid::Grid;
use crate::core::models::{MoveOutcome, Vec2};

impl Grid {
    /// Steps the player by (dx, dy), pushing a box if one is in the way and
    /// the cell behind it is free. Anything else blocks and leaves the grid
    /// untouched. The direction is expected to be a single cardinal step.
    pub fn do_move(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        let dir = Vec2::new(dx, dy);
        let player = self.player;
        let Some(forward1) = player.checked_step(dir, 1) else {
            trace!("blocked: step ({}, {}) overflows", dx, dy);
            return MoveOutcome::Blocked;
        };

        let Some(&dest) = self.cells.get(&forward1) else {
            trace!("blocked at ({}, {}): out of bounds", forward1.x, forward1.y);
            return MoveOutcome::Blocked;
        };

        let push_to = player
            .checked_step(dir, 2)
            .filter(|pos| dest.is_box() && self.cells.get(pos).is_some_and(|cell| !cell.is_occupied()));
        let is_push = push_to.is_some();

        if !is_push && dest.is_occupied() {
            trace!("blocked at ({}, {}): '{}'", forward1.x, forward1.y, dest.to_char());
            return MoveOutcome::Blocked;
        }

        if let Some(forward2) = push_to {
            self.relocate(forward1, forward2);
        }
        self.relocate(player, forward1);
        self.player = forward1;

        trace!("moved to ({}, {}), push: {}", forward1.x, forward1.y, is_push);
        MoveOutcome::Moved { is_push }
    }

    /// Reverses the most recently applied `do_move(dx, dy)`.
    pub(crate) fn undo_move(&mut self, dx: i32, dy: i32, was_push: bool) {
        let dir = Vec2::new(dx, dy);
        let player = self.player;
        let backward = player - dir;

        self.relocate(player, backward);
        if was_push {
            self.relocate(player + dir, player);
        }
        self.player = backward;

        trace!("undid move to ({}, {}), push: {}", player.x, player.y, was_push);
    }

    fn relocate(&mut self, from: Vec2, to: Vec2) {
        let (source, target) = self
            .cells
            .get_pair_mut(&from, &to)
            .expect("relocation endpoints are distinct cells inside the grid");
        source.move_to(target);
    }
}

#[cfg(test)]
mod test {
    use crate::core::{Grid, MoveOutcome};

    #[test]
    fn test_edge_of_grid_blocks() {
        let mut grid: Grid = "@ ".parse().unwrap();

        assert_eq!(grid.do_move(-1, 0), MoveOutcome::Blocked);
        assert_eq!(grid.do_move(0, -1), MoveOutcome::Blocked);
        assert_eq!(grid.do_move(0, 1), MoveOutcome::Blocked);
        assert_eq!(grid.to_string(), "@ ");
    }

    #[test]
    fn test_huge_step_is_blocked_not_overflowing() {
        let mut grid: Grid = "@$ ".parse().unwrap();

        assert_eq!(grid.do_move(i32::MAX, 0), MoveOutcome::Blocked);
        assert_eq!(grid.do_move(i32::MIN, 0), MoveOutcome::Blocked);
        assert_eq!(grid.do_move(0, i32::MIN), MoveOutcome::Blocked);
        assert_eq!(grid.to_string(), "@$ ");
        assert_eq!(grid.player().x, 0);
    }

    #[test]
    fn test_box_against_edge_blocks() {
        let mut grid: Grid = " @$".parse().unwrap();

        assert_eq!(grid.do_move(1, 0), MoveOutcome::Blocked);
        assert_eq!(grid.to_string(), " @$");
    }

    #[test]
    fn test_undo_move_restores_push() {
        let mut grid: Grid = "@$.".parse().unwrap();

        assert_eq!(grid.do_move(1, 0), MoveOutcome::Moved { is_push: true });
        assert_eq!(grid.to_string(), " @*");

        grid.undo_move(1, 0, true);
        assert_eq!(grid.to_string(), "@$.");
        assert_eq!(grid.player().x, 0);
    }
}

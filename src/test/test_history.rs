mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::{level, GameTestState};

    const CORRIDOR: &str = r#"
#######
#@$  .#
#######
"#;

    #[test]
    fn when_fresh_nothing_to_undo_or_redo() {
        let mut grid = level(CORRIDOR);
        let mut game = GameTestState::new(&mut grid);

        assert!(!game.engine.can_undo());
        assert!(!game.engine.can_redo());
        assert_eq!(game.engine.undo(), None);
        assert_eq!(game.engine.redo(), None);
        game.assert_matches(CORRIDOR);
    }

    #[test]
    fn when_push_undone_box_and_player_return() {
        let mut grid = level(CORRIDOR);
        let mut game = GameTestState::new(&mut grid);

        let command = game.assert_move(Right);
        assert_eq!(command, Move { dx: 1, dy: 0, is_push: true });
        game.assert_matches(r#"
#######
# @$ .#
#######
"#);

        assert_eq!(game.engine.undo(), Some(command));
        game.assert_matches(CORRIDOR);
        assert_eq!(game.engine.grid().player(), Vec2::new(1, 1));
        assert!(game.engine.can_redo());

        assert_eq!(game.engine.redo(), Some(command));
        game.assert_matches(r#"
#######
# @$ .#
#######
"#);
        assert!(!game.engine.can_redo());
    }

    #[test]
    fn when_every_move_undone_level_is_restored() {
        let mut grid = level(CORRIDOR);
        let mut game = GameTestState::new(&mut grid);
        game.assert_moves(&[Right, Right, Right, Left, Left]);

        while game.engine.can_undo() {
            game.engine.undo();
        }

        game.assert_matches(CORRIDOR);
        assert_eq!(game.engine.history().cursor(), 0);
        assert_eq!(game.engine.history().moves().len(), 5);
    }

    #[test]
    fn when_all_redone_matches_before_undo() {
        let mut grid = level(CORRIDOR);
        let mut game = GameTestState::new(&mut grid);
        game.assert_moves(&[Right, Right, Left, Right, Right]);
        let solved = game.game_to_string();

        while game.engine.undo().is_some() {}
        while game.engine.redo().is_some() {}

        game.assert_matches(&solved);
        assert_eq!(game.engine.history().push_count(), 3);
        assert_eq!(game.engine.grid().count_cells(Some(StaticKind::Goal), Some(DynamicKind::Box)), 1);
    }

    #[test]
    fn when_new_move_after_undo_redo_branch_is_dropped() {
        let mut grid = level(r#"
#####
#   #
#@  #
#####
"#);
        let mut game = GameTestState::new(&mut grid);
        game.assert_moves(&[Right, Right]);
        game.engine.undo();
        game.engine.undo();
        assert!(game.engine.can_redo());

        game.assert_move(Up);

        assert!(!game.engine.can_redo());
        assert_eq!(game.engine.redo(), None);
        assert_eq!(game.engine.history().moves(), &[Move { dx: 0, dy: -1, is_push: false }]);
        assert_eq!(game.engine.history().cursor(), 1);
    }

    #[test]
    fn when_blocked_move_history_is_unchanged() {
        let mut grid = level(CORRIDOR);
        let mut game = GameTestState::new(&mut grid);
        game.assert_move(Right);
        game.engine.undo();

        game.assert_blocked(Left);

        assert!(game.engine.can_redo());
        assert_eq!(game.engine.history().moves().len(), 1);
        assert_eq!(game.engine.history().cursor(), 0);
    }

    #[test]
    fn when_history_applied_lists_moves_before_cursor() {
        let mut grid = level(CORRIDOR);
        let mut game = GameTestState::new(&mut grid);
        game.assert_moves(&[Right, Left, Right]);
        game.engine.undo();

        let applied = game.engine.history().applied();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].direction(), Some(Right));
        assert_eq!(applied[1].direction(), Some(Left));
        assert_eq!(game.engine.history().push_count(), 1);
    }
}

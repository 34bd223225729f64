//! Board model invariants and rule scenarios

use std::collections::{HashSet, VecDeque};

use tictactoe::{Board, Cell, Error, Move, Outcome, Player};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

mod turn_alternation {
    use super::*;

    #[test]
    fn player_alternates_over_every_reachable_board() {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        let root = Board::new();
        assert_eq!(root.player(), Player::X, "X must move first");
        visited.insert(root.encode());
        queue.push_back(root);

        while let Some(board) = queue.pop_front() {
            if board.terminal() {
                continue;
            }

            let mover = board.player();
            for action in board.actions() {
                let child = board.result(action).unwrap();
                assert_eq!(
                    child.player(),
                    mover.opponent(),
                    "turn must pass to the opponent after {} plays {action}",
                    mover
                );

                if visited.insert(child.encode()) {
                    queue.push_back(child);
                }
            }
        }
    }
}

mod action_enumeration {
    use super::*;

    #[test]
    fn empty_board_has_nine_actions() {
        assert_eq!(Board::new().actions().len(), 9);
    }

    #[test]
    fn played_cell_leaves_the_action_set() {
        let board = Board::new().result(mv(0, 0)).unwrap();
        let actions = board.actions();

        assert_eq!(actions.len(), 8);
        assert!(
            !actions.contains(&mv(0, 0)),
            "the occupied cell must not be enumerated"
        );
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn top_row_of_x_wins() {
        let board = Board::from_cells([
            [Cell::X, Cell::X, Cell::X],
            [Cell::Empty, Cell::Empty, Cell::Empty],
            [Cell::Empty, Cell::Empty, Cell::Empty],
        ]);

        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.terminal());
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        let board = Board::from_string("XOX OOX XXO").unwrap();

        assert!(board.terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn result_on_occupied_cell_is_an_invalid_move() {
        let board = Board::from_cells([
            [Cell::Empty, Cell::Empty, Cell::Empty],
            [Cell::Empty, Cell::O, Cell::Empty],
            [Cell::Empty, Cell::Empty, Cell::Empty],
        ]);

        let err = board.result(mv(1, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { row: 1, col: 1 }));
    }

    #[test]
    fn out_of_range_coordinates_are_unrepresentable() {
        let err = Move::new(1, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { row: 1, col: 3 }));
    }
}

mod state_space {
    use super::*;

    #[test]
    fn reachable_boards_count_is_exact() {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        queue.push_back(Board::new());
        visited.insert(Board::new().encode());

        while let Some(board) = queue.pop_front() {
            if board.terminal() {
                continue;
            }

            for action in board.actions() {
                let child = board.result(action).unwrap();
                if visited.insert(child.encode()) {
                    queue.push_back(child);
                }
            }
        }

        // The classic enumeration of positions reachable in play
        assert_eq!(
            visited.len(),
            5478,
            "should have exactly 5,478 reachable boards"
        );
    }
}

mod text_format {
    use super::*;

    #[test]
    fn encode_roundtrips_through_parsing() {
        let mut board = Board::new();
        for &(row, col) in &[(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)] {
            board = board.result(mv(row, col)).unwrap();
        }

        let parsed = Board::from_string(&board.encode()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn parsing_rejects_impossible_mark_counts() {
        assert!(matches!(
            Board::from_string("XXXX....."),
            Err(Error::InvalidMarkCounts { .. })
        ));
    }
}

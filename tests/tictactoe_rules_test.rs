//! Rule properties checked over every reachable tic-tac-toe board.

use perfect_tictactoe::{
    Board, Cell, IllegalMove, Mark, Move, actions, initial_state, player, result, successors,
    terminal, utility, winner,
};
use std::collections::HashSet;

/// Collects every board reachable from the empty board by legal play.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if terminal(&board) {
            continue;
        }
        for mv in actions(&board) {
            stack.push(result(&board, mv).unwrap());
        }
    }
    seen
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct positions reachable in legal play.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_mark_counts_stay_in_lockstep() {
    for board in reachable_boards() {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        assert!(x == o || x == o + 1, "bad counts on\n{}", board);
    }
}

#[test]
fn test_player_is_x_iff_counts_equal() {
    for board in reachable_boards() {
        let equal = board.count(Mark::X) == board.count(Mark::O);
        assert_eq!(player(&board) == Mark::X, equal, "on\n{}", board);
    }
}

#[test]
fn test_result_changes_only_target_cell() {
    for board in reachable_boards() {
        for mv in actions(&board) {
            let next = result(&board, mv).unwrap();
            for (other, cell) in next.iter() {
                if other == mv {
                    assert_eq!(cell, Cell::Occupied(player(&board)));
                } else {
                    assert_eq!(Some(cell), board.get(other));
                }
            }
        }
    }
}

#[test]
fn test_result_rejects_every_occupied_cell() {
    for board in reachable_boards() {
        for (mv, cell) in board.iter() {
            if let Cell::Occupied(_) = cell {
                assert_eq!(
                    result(&board, mv),
                    Err(IllegalMove::Occupied {
                        row: mv.row,
                        col: mv.col
                    })
                );
            }
        }
    }
}

#[test]
fn test_result_rejects_out_of_range() {
    let board = initial_state();
    for mv in [Move::new(3, 0), Move::new(0, 3), Move::new(usize::MAX, 1)] {
        assert_eq!(
            result(&board, mv),
            Err(IllegalMove::OutOfRange {
                row: mv.row,
                col: mv.col
            })
        );
    }
}

#[test]
fn test_terminal_iff_winner_or_no_moves() {
    for board in reachable_boards() {
        let expected = winner(&board).is_some() || actions(&board).is_empty();
        assert_eq!(terminal(&board), expected, "on\n{}", board);
    }
}

#[test]
fn test_terminal_boards_have_at_most_one_winner() {
    for board in reachable_boards().into_iter().filter(terminal) {
        let lines = perfect_tictactoe::LINES
            .iter()
            .filter_map(|line| {
                let marks: Vec<_> = line.iter().filter_map(|mv| board.get(*mv)?.mark()).collect();
                (marks.len() == 3 && marks.iter().all(|m| *m == marks[0])).then(|| marks[0])
            })
            .collect::<HashSet<_>>();
        assert!(lines.len() <= 1, "two winners on\n{}", board);
    }
}

#[test]
fn test_utility_matches_winner() {
    for board in reachable_boards().into_iter().filter(terminal) {
        let expected = match winner(&board) {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&board), expected);
    }
}

#[test]
fn test_successors_agree_with_actions() {
    for board in reachable_boards() {
        let moves: Vec<_> = successors(&board).map(|(mv, _)| mv).collect();
        assert_eq!(moves, actions(&board));
    }
}

#[test]
fn test_full_board_draw_scenario() {
    let board = Board::from_rows([
        [Some(Mark::X), Some(Mark::O), Some(Mark::X)],
        [Some(Mark::X), Some(Mark::O), Some(Mark::O)],
        [Some(Mark::O), Some(Mark::X), Some(Mark::X)],
    ]);
    assert_eq!(winner(&board), None);
    assert!(terminal(&board));
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_top_row_win_scenario() {
    let board = Board::from_rows([
        [Some(Mark::X), Some(Mark::X), Some(Mark::X)],
        [Some(Mark::O), Some(Mark::O), None],
        [None, None, None],
    ]);
    assert_eq!(winner(&board), Some(Mark::X));
    assert!(terminal(&board));
    assert_eq!(utility(&board), 1);
}

#[test]
fn test_illegal_move_message() {
    let board: Board = ".../.X./...".parse().unwrap();
    let err = result(&board, Move::new(1, 1)).unwrap_err();
    assert_eq!(err.to_string(), "Cell (1, 1) is already occupied");
}

use abprune::search::{alphabeta_search, minimax, AlphaBeta, SearchParams};
use abprune::tictactoe::{Board, Square, TicTacToe};
use abprune::tree::{random_tree, TreeGame};
use abprune::{Game, Player};
use std::collections::HashSet;

fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::default()];
    while let Some(b) = stack.pop() {
        if !seen.insert(b) {
            continue;
        }
        for a in TicTacToe.actions(&b) {
            stack.push(TicTacToe.result(&b, &a).unwrap());
        }
    }
    seen
}

#[test]
fn tictactoe_state_space_size() {
    // Legal positions reachable from the empty board.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn tictactoe_utilities_are_zero_sum() {
    let mut terminals = 0;
    for b in reachable_boards() {
        if !TicTacToe.terminal_test(&b) {
            assert!(TicTacToe.utility(&b, Player::Max).is_err());
            continue;
        }
        terminals += 1;
        for p in [Player::Max, Player::Min] {
            let u = TicTacToe.utility(&b, p).unwrap();
            let v = TicTacToe.utility(&b, p.opponent()).unwrap();
            assert_eq!(u, -v, "zero-sum violated on\n{b}");
        }
    }
    assert_eq!(terminals, 958);
}

#[test]
fn tree_utilities_are_zero_sum() {
    let mut games = vec![TreeGame::tie_break(), TreeGame::two_ply()];
    games.extend((0..10).map(|seed| random_tree(seed, 3, 3, 5).unwrap()));
    for game in games {
        for s in game.states().filter(|s| game.terminal_test(s)) {
            let u = game.utility(s, Player::Max).unwrap();
            assert_eq!(u, -game.utility(s, Player::Min).unwrap(), "state {s}");
        }
    }
}

#[test]
fn takes_an_immediate_win() {
    let b = Board::from_cells("XX. OO. ...").unwrap();
    let bm = alphabeta_search(&b, &TicTacToe).unwrap();
    assert_eq!(bm, Square::new(0, 2), "expected X to complete the top row, got {bm}");
}

#[test]
fn min_side_takes_its_win_too() {
    let b = Board::from_cells("XX. OO. X..").unwrap();
    assert_eq!(TicTacToe.to_move(&b), Player::Min);
    let r = AlphaBeta::new(SearchParams::default()).search(&b, &TicTacToe).unwrap();
    assert_eq!(r.action, Square::new(1, 2));
    assert_eq!(r.score, 1.0, "score is from the mover's perspective");
}

#[test]
fn empty_board_is_a_draw() {
    let b = Board::default();
    let r = AlphaBeta::new(SearchParams::default()).search(&b, &TicTacToe).unwrap();
    assert_eq!(r.score, 0.0);
    // Every opening draws, so the first one is kept.
    assert_eq!(r.action, Square::new(0, 0));
    assert_eq!(minimax::minimax_value(&b, &TicTacToe, Player::Min).unwrap(), 0.0);
}

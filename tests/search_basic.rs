use abprune::search::{alphabeta_search, search, SearchParams, Variant};
use abprune::tictactoe::{Board, TicTacToe};
use abprune::tree::{Edge, TreeGame, TreeSpec};
use abprune::{Error, Game, Player, Result};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn single_action_root_returns_it() {
    let json = r#"{"initial":"s","successors":{"s":[{"action":"only","to":"t"}]},"utilities":{"t":-40}}"#;
    let game = TreeGame::from_json_str(json).unwrap();
    for variant in Variant::ALL {
        let r = search(variant, &game.initial(), &game, SearchParams::default()).unwrap();
        assert_eq!(r.action, "only", "{variant:?} did not return the sole action");
        assert_eq!(r.score, -40.0);
    }
}

#[test]
fn all_losing_root_still_recommends() {
    // JSON cannot carry infinities, so build the table directly.
    let edge = |a: &str| Edge { action: a.to_string(), to: a.to_uppercase() };
    let spec = TreeSpec {
        initial: "s".to_string(),
        first_player: Player::Max,
        successors: BTreeMap::from([("s".to_string(), vec![edge("x"), edge("y")])]),
        utilities: BTreeMap::from([
            ("X".to_string(), f64::NEG_INFINITY),
            ("Y".to_string(), f64::NEG_INFINITY),
        ]),
    };
    let game = TreeGame::from_spec(spec).unwrap();
    let root = game.initial();

    let r = search(Variant::Canonical, &root, &game, SearchParams::default()).unwrap();
    assert_eq!(r.action, "x", "strict update should keep the first action");
    assert_eq!(r.score, f64::NEG_INFINITY);

    let r = search(Variant::TieReplacing, &root, &game, SearchParams::default()).unwrap();
    assert_eq!(r.action, "y", ">= update should end on the last action");
    assert_eq!(r.score, f64::NEG_INFINITY);
}

#[test]
fn empty_root_is_an_error() {
    let game = TreeGame::from_json_str(r#"{"initial":"s","utilities":{"s":1}}"#).unwrap();
    for variant in Variant::ALL {
        let err = search(variant, &game.initial(), &game, SearchParams::default()).unwrap_err();
        assert!(matches!(err, Error::NoLegalAction { .. }), "{variant:?}: unexpected error {err}");
    }
}

#[test]
fn finished_board_has_no_recommendation() {
    let b = Board::from_cells("XXX OO. ...").unwrap();
    assert!(matches!(alphabeta_search(&b, &TicTacToe), Err(Error::NoLegalAction { .. })));
}

#[test]
fn repeated_searches_agree() {
    let game = TreeGame::tie_break();
    let root = game.initial();
    for variant in Variant::ALL {
        let first = search(variant, &root, &game, SearchParams::default()).unwrap();
        for _ in 0..5 {
            let again = search(variant, &root, &game, SearchParams::default()).unwrap();
            assert_eq!(again, first);
        }
    }
}

#[test]
fn ply_guard_trips_only_when_exceeded() {
    let game = TreeGame::tie_break();
    let root = game.initial();
    for variant in Variant::ALL {
        let shallow = SearchParams { max_ply: Some(1) };
        let err = search(variant, &root, &game, shallow).unwrap_err();
        assert!(matches!(err, Error::DepthExceeded { limit: 1 }), "unexpected error {err}");

        let exact = SearchParams { max_ply: Some(2) };
        let guarded = search(variant, &root, &game, exact).unwrap();
        let free = search(variant, &root, &game, SearchParams::default()).unwrap();
        assert_eq!(guarded, free);
    }
}

// Tree game that also advertises an action its table does not contain.
struct GhostAction(TreeGame);

impl Game for GhostAction {
    type State = String;
    type Action = String;

    fn actions(&self, state: &String) -> Vec<String> {
        let mut a = self.0.actions(state);
        if state == "B" {
            a.insert(0, "ghost".to_string());
        }
        a
    }
    fn result(&self, state: &String, action: &String) -> Result<String> {
        self.0.result(state, action)
    }
    fn terminal_test(&self, state: &String) -> bool {
        self.0.terminal_test(state)
    }
    fn utility(&self, state: &String, player: Player) -> Result<f64> {
        self.0.utility(state, player)
    }
    fn to_move(&self, state: &String) -> Player {
        self.0.to_move(state)
    }
}

#[test]
fn invalid_move_propagates_unchanged() {
    let game = GhostAction(TreeGame::tie_break());
    for variant in Variant::ALL {
        let err = search(variant, &"root".to_string(), &game, SearchParams::default()).unwrap_err();
        match err {
            Error::InvalidMove { state, action } => {
                assert_eq!(state, "\"B\"");
                assert_eq!(action, "\"ghost\"");
            }
            other => panic!("{variant:?}: expected InvalidMove, got {other}"),
        }
    }
}

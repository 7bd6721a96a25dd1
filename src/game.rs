use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// One of the two sides of a zero-sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    Max,
    Min,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Max => write!(f, "MAX"),
            Player::Min => write!(f, "MIN"),
        }
    }
}

/// A two-player, zero-sum, perfect-information game.
///
/// The search engine owns no game data: every transition, terminal check and
/// score comes from the implementor. Implementations must keep `actions`
/// deterministic, since its order decides both pruning and tie-breaks, and
/// must satisfy `utility(s, Max) == -utility(s, Min)` on every terminal `s`.
pub trait Game {
    type State: Clone + Debug;
    type Action: Clone + Debug;

    /// Legal actions from `state`, in a stable order. Empty on terminal states.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Successor of `state` under `action`. Fails with `Error::InvalidMove`
    /// when `action` is not legal in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    fn terminal_test(&self, state: &Self::State) -> bool;

    /// Score of a terminal `state` from `player`'s point of view. Fails with
    /// `Error::NonTerminalUtility` on a non-terminal state.
    fn utility(&self, state: &Self::State, player: Player) -> Result<f64>;

    fn to_move(&self, state: &Self::State) -> Player;
}

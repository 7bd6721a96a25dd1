pub mod alphabeta;
pub mod alphabeta_alt;
pub mod minimax;

use crate::error::{Error, Result};
use crate::game::Game;
use serde::Serialize;

pub use alphabeta::{alphabeta_search, AlphaBeta};
pub use alphabeta_alt::{alphabeta_search_alt, AlphaBetaAlt};
pub use minimax::{minimax_decision, minimax_decision_parallel, minimax_value};

#[derive(Default, Debug, Clone, Copy)]
pub struct SearchParams {
    /// Deepest ply the search may enter before failing with
    /// `Error::DepthExceeded`. `None` searches without a limit.
    pub max_ply: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<A> {
    pub action: A,
    /// Root `best_score` at the end of the search.
    pub score: f64,
    /// States whose value was requested below the root.
    pub nodes: u64,
}

/// Root update rule used when a root action's value is compared to the best so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Variant {
    /// Replace the recommendation only on `v > best_score`.
    Canonical,
    /// Replace the recommendation on `v >= best_score`, so later ties win.
    TieReplacing,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Canonical, Variant::TieReplacing];

    pub fn comparison(self) -> &'static str {
        match self {
            Variant::Canonical => ">",
            Variant::TieReplacing => ">=",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Canonical => "Canonical alpha-beta",
            Variant::TieReplacing => "Modified alpha-beta",
        }
    }
}

/// Run one search variant from `state`.
pub fn search<G: Game>(
    variant: Variant,
    state: &G::State,
    game: &G,
    params: SearchParams,
) -> Result<SearchResult<G::Action>> {
    match variant {
        Variant::Canonical => AlphaBeta::new(params).search(state, game),
        Variant::TieReplacing => AlphaBetaAlt::new(params).search(state, game),
    }
}

pub(crate) fn guard_ply(max_ply: Option<u32>, ply: u32) -> Result<()> {
    match max_ply {
        Some(limit) if ply > limit => Err(Error::DepthExceeded { limit }),
        _ => Ok(()),
    }
}

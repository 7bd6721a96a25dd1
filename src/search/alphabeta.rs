use crate::error::{Error, Result};
use crate::game::{Game, Player};
use crate::search::{guard_ply, SearchParams, SearchResult};
use log::{debug, trace};

/// Recommend an action from `state` with full-depth alpha-beta.
///
/// The recommendation only moves to a later root action when that action is
/// strictly better, so the returned action is always one whose value caused
/// the root bound to rise.
pub fn alphabeta_search<G: Game>(state: &G::State, game: &G) -> Result<G::Action> {
    AlphaBeta::default().search(state, game).map(|r| r.action)
}

#[derive(Default, Debug)]
pub struct AlphaBeta {
    params: SearchParams,
    nodes: u64,
}

impl AlphaBeta {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0 }
    }

    pub fn search<G: Game>(&mut self, state: &G::State, game: &G) -> Result<SearchResult<G::Action>> {
        self.nodes = 0;
        // Every value below is from the root mover's perspective.
        let player = game.to_move(state);
        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_action: Option<G::Action> = None;

        for a in game.actions(state) {
            let child = game.result(state, &a)?;
            let v = self.min_value(&child, game, player, best_score, beta, 1)?;
            debug!("root {:?}: action {:?} scored {}", state, a, v);
            if best_action.is_none() || v > best_score {
                debug!("root {:?}: best action now {:?} ({} -> {})", state, a, best_score, v);
                best_score = v;
                best_action = Some(a);
            }
        }

        match best_action {
            Some(action) => Ok(SearchResult { action, score: best_score, nodes: self.nodes }),
            None => Err(Error::no_legal_action(state)),
        }
    }

    fn max_value<G: Game>(
        &mut self,
        state: &G::State,
        game: &G,
        player: Player,
        mut alpha: f64,
        beta: f64,
        ply: u32,
    ) -> Result<f64> {
        self.nodes += 1;
        guard_ply(self.params.max_ply, ply)?;
        if game.terminal_test(state) {
            return game.utility(state, player);
        }
        let mut v = f64::NEG_INFINITY;
        for a in game.actions(state) {
            let child = game.result(state, &a)?;
            v = v.max(self.min_value(&child, game, player, alpha, beta, ply + 1)?);
            if v >= beta {
                trace!("beta cutoff at {:?} after {:?}: {} >= {}", state, a, v, beta);
                return Ok(v);
            }
            alpha = alpha.max(v);
        }
        Ok(v)
    }

    fn min_value<G: Game>(
        &mut self,
        state: &G::State,
        game: &G,
        player: Player,
        alpha: f64,
        mut beta: f64,
        ply: u32,
    ) -> Result<f64> {
        self.nodes += 1;
        guard_ply(self.params.max_ply, ply)?;
        if game.terminal_test(state) {
            return game.utility(state, player);
        }
        let mut v = f64::INFINITY;
        for a in game.actions(state) {
            let child = game.result(state, &a)?;
            v = v.min(self.max_value(&child, game, player, alpha, beta, ply + 1)?);
            if v <= alpha {
                trace!("alpha cutoff at {:?} after {:?}: {} <= {}", state, a, v, alpha);
                return Ok(v);
            }
            beta = beta.min(v);
        }
        Ok(v)
    }
}

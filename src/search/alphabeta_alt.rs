use crate::error::{Error, Result};
use crate::game::{Game, Player};
use crate::search::{guard_ply, SearchParams, SearchResult};
use log::{debug, trace};

/// Alpha-beta that lets a tied later root action replace the recommendation.
///
/// Pruning is identical to [`crate::search::AlphaBeta`]. Root children are
/// searched with `best_score` as alpha, so a pruned child reports an upper
/// bound equal to that alpha, and the `>=` update accepts it. On trees with
/// root ties this can recommend an action whose exact value is worse than
/// the one it replaced.
pub fn alphabeta_search_alt<G: Game>(state: &G::State, game: &G) -> Result<G::Action> {
    AlphaBetaAlt::default().search(state, game).map(|r| r.action)
}

#[derive(Default, Debug)]
pub struct AlphaBetaAlt {
    params: SearchParams,
    nodes: u64,
}

impl AlphaBetaAlt {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0 }
    }

    pub fn search<G: Game>(&mut self, state: &G::State, game: &G) -> Result<SearchResult<G::Action>> {
        self.nodes = 0;
        let player = game.to_move(state);
        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_action: Option<G::Action> = None;

        for a in game.actions(state) {
            let child = game.result(state, &a)?;
            let v = self.min_value(&child, game, player, best_score, beta, 1)?;
            debug!("root {:?}: action {:?} scored {}", state, a, v);
            if v >= best_score {
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

use crate::error::{Error, Result};
use crate::game::{Game, Player};
use crate::search::SearchResult;
use rayon::prelude::*;

/// Exact value of `state` for `player`, with no pruning.
///
/// Max and min levels alternate starting from whoever is to move at `state`,
/// the same formulation the alpha-beta searches use. `to_move` is consulted
/// only at `state` itself, so the value is exact only for games with strict
/// turn alternation (every built-in game). A game that lets one side move
/// twice in a row needs its own search.
pub fn minimax_value<G: Game>(state: &G::State, game: &G, player: Player) -> Result<f64> {
    let mut nodes = 0u64;
    let maximizing = game.to_move(state) == player;
    value(state, game, player, maximizing, &mut nodes)
}

/// Reference decision: evaluates every root action exactly and keeps the
/// first one reaching the maximum. Root children are MIN levels, as in the
/// alpha-beta searches, which assumes strict turn alternation.
pub fn minimax_decision<G: Game>(state: &G::State, game: &G) -> Result<SearchResult<G::Action>> {
    let player = game.to_move(state);
    let mut nodes = 0u64;
    let mut scored = Vec::new();
    for a in game.actions(state) {
        let child = game.result(state, &a)?;
        let v = value(&child, game, player, false, &mut nodes)?;
        scored.push((a, v));
    }
    pick_first_best(state, scored, nodes)
}

/// Root-split variant of [`minimax_decision`]: root actions are evaluated on
/// the rayon pool and reduced in their original order, so the result matches
/// the sequential one exactly.
pub fn minimax_decision_parallel<G>(state: &G::State, game: &G) -> Result<SearchResult<G::Action>>
where
    G: Game + Sync,
    G::State: Send + Sync,
    G::Action: Send + Sync,
{
    let player = game.to_move(state);
    let actions = game.actions(state);
    let results: Vec<Result<(G::Action, f64, u64)>> = actions
        .par_iter()
        .map(|a| {
            let child = game.result(state, a)?;
            let mut n = 0u64;
            let v = value(&child, game, player, false, &mut n)?;
            Ok((a.clone(), v, n))
        })
        .collect();

    let mut total_nodes = 0u64;
    let mut scored = Vec::with_capacity(results.len());
    for r in results {
        let (a, v, n) = r?;
        total_nodes += n;
        scored.push((a, v));
    }
    pick_first_best(state, scored, total_nodes)
}

fn pick_first_best<S: std::fmt::Debug, A>(
    state: &S,
    scored: Vec<(A, f64)>,
    nodes: u64,
) -> Result<SearchResult<A>> {
    let mut best: Option<(A, f64)> = None;
    for (a, v) in scored {
        if best.as_ref().map_or(true, |(_, bs)| v > *bs) {
            best = Some((a, v));
        }
    }
    match best {
        Some((action, score)) => Ok(SearchResult { action, score, nodes }),
        None => Err(Error::no_legal_action(state)),
    }
}

fn value<G: Game>(
    state: &G::State,
    game: &G,
    player: Player,
    maximizing: bool,
    nodes: &mut u64,
) -> Result<f64> {
    *nodes += 1;
    if game.terminal_test(state) {
        return game.utility(state, player);
    }
    let mut v = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
    for a in game.actions(state) {
        let child = game.result(state, &a)?;
        let cv = value(&child, game, player, !maximizing, nodes)?;
        v = if maximizing { v.max(cv) } else { v.min(cv) };
    }
    Ok(v)
}

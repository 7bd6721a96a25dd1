use crate::error::Result;
use crate::game::{Game, Player};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

/// Game wrapper that records which states the search asks about.
///
/// `result` calls are counted per produced state, `utility` calls per
/// evaluated state. Everything else is passed through untouched, so a search
/// over the wrapper behaves exactly like one over the inner game.
pub struct CountingGame<'g, G: Game> {
    inner: &'g G,
    expansions: Mutex<HashMap<G::State, usize>>,
    evaluations: Mutex<HashMap<G::State, usize>>,
}

impl<'g, G> CountingGame<'g, G>
where
    G: Game,
    G::State: Eq + Hash,
{
    pub fn new(inner: &'g G) -> Self {
        Self { inner, expansions: Mutex::new(HashMap::new()), evaluations: Mutex::new(HashMap::new()) }
    }

    /// Times `state` was produced by `result`.
    pub fn expansions(&self, state: &G::State) -> usize {
        self.expansions.lock().unwrap().get(state).copied().unwrap_or(0)
    }

    /// Times `utility` was called on `state`.
    pub fn utility_calls(&self, state: &G::State) -> usize {
        self.evaluations.lock().unwrap().get(state).copied().unwrap_or(0)
    }

    pub fn total_expansions(&self) -> usize {
        self.expansions.lock().unwrap().values().sum()
    }

    pub fn reset(&self) {
        self.expansions.lock().unwrap().clear();
        self.evaluations.lock().unwrap().clear();
    }
}

impl<'g, G> Game for CountingGame<'g, G>
where
    G: Game,
    G::State: Eq + Hash,
{
    type State = G::State;
    type Action = G::Action;

    fn actions(&self, state: &G::State) -> Vec<G::Action> {
        self.inner.actions(state)
    }

    fn result(&self, state: &G::State, action: &G::Action) -> Result<G::State> {
        let next = self.inner.result(state, action)?;
        *self.expansions.lock().unwrap().entry(next.clone()).or_insert(0) += 1;
        Ok(next)
    }

    fn terminal_test(&self, state: &G::State) -> bool {
        self.inner.terminal_test(state)
    }

    fn utility(&self, state: &G::State, player: Player) -> Result<f64> {
        *self.evaluations.lock().unwrap().entry(state.clone()).or_insert(0) += 1;
        self.inner.utility(state, player)
    }

    fn to_move(&self, state: &G::State) -> Player {
        self.inner.to_move(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeGame;

    #[test]
    fn counts_and_resets() {
        let game = TreeGame::tie_break();
        let counted = CountingGame::new(&game);
        let b = counted.result(&"root".to_string(), &"B".to_string()).unwrap();
        counted.result(&b, &"B2".to_string()).unwrap();
        counted.utility(&"B2".to_string(), Player::Max).unwrap();
        assert_eq!(counted.expansions(&"B".to_string()), 1);
        assert_eq!(counted.utility_calls(&"B2".to_string()), 1);
        assert_eq!(counted.total_expansions(), 2);
        counted.reset();
        assert_eq!(counted.total_expansions(), 0);
    }
}

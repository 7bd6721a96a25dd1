use crate::error::{Error, Result};
use crate::game::{Game, Player};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub action: String,
    pub to: String,
}

/// Serializable transition table for a finite game tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    pub initial: String,
    /// Mover at `initial`; turns alternate on every ply below it.
    #[serde(default = "default_first_player")]
    pub first_player: Player,
    /// Ordered outgoing edges per interior state.
    #[serde(default)]
    pub successors: BTreeMap<String, Vec<Edge>>,
    /// Utility for MAX at each leaf.
    #[serde(default)]
    pub utilities: BTreeMap<String, f64>,
}

fn default_first_player() -> Player {
    Player::Max
}

/// A game played on an explicit state-transition table.
///
/// States and actions are labels. The player to move is fixed by depth:
/// `first_player` at the root, then alternating, so the table must be a
/// tree (every state reached exactly once).
#[derive(Debug, Clone)]
pub struct TreeGame {
    spec: TreeSpec,
    turns: HashMap<String, Player>,
}

impl TreeGame {
    pub fn from_spec(spec: TreeSpec) -> Result<Self> {
        let mut turns = HashMap::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(spec.initial.clone());
        queue.push_back((spec.initial.clone(), spec.first_player));

        while let Some((state, player)) = queue.pop_front() {
            turns.insert(state.clone(), player);
            let edges = spec.successors.get(&state).map(Vec::as_slice).unwrap_or(&[]);
            if edges.is_empty() {
                if !spec.utilities.contains_key(&state) {
                    return Err(Error::InvalidTree(format!("leaf {state} has no utility")));
                }
                continue;
            }
            if spec.utilities.contains_key(&state) {
                return Err(Error::InvalidTree(format!("interior state {state} has a utility")));
            }
            let mut labels = HashSet::new();
            for e in edges {
                if !labels.insert(e.action.as_str()) {
                    return Err(Error::InvalidTree(format!("duplicate action {} at {state}", e.action)));
                }
                if !seen.insert(e.to.clone()) {
                    return Err(Error::InvalidTree(format!("state {} is reached more than once", e.to)));
                }
                queue.push_back((e.to.clone(), player.opponent()));
            }
        }

        let stray = spec
            .successors
            .keys()
            .chain(spec.utilities.keys())
            .find(|s| !seen.contains(*s));
        if let Some(s) = stray {
            return Err(Error::InvalidTree(format!("state {s} is unreachable from {}", spec.initial)));
        }

        Ok(Self { spec, turns })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let spec: TreeSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.spec)?)
    }

    pub fn spec(&self) -> &TreeSpec {
        &self.spec
    }

    pub fn initial(&self) -> String {
        self.spec.initial.clone()
    }

    /// Every state in the table, interior and leaf.
    pub fn states(&self) -> impl Iterator<Item = &String> {
        self.turns.keys()
    }

    /// Root with three replies; every reply has a leaf worth 3 first, and
    /// the later replies also hide a worse leaf. Canonical alpha-beta picks
    /// `A`, the tie-replacing variant picks `C`.
    pub fn tie_break() -> Self {
        Builder::new("root")
            .node("root", &["A", "B", "C"])
            .node("A", &["A1"])
            .node("B", &["B1", "B2"])
            .node("C", &["C1", "C2"])
            .leaf("A1", 3.0)
            .leaf("B1", 3.0)
            .leaf("B2", -6.0)
            .leaf("C1", 3.0)
            .leaf("C2", -9.0)
            .build()
    }

    /// Two-ply tree with three replies of three leaves each. Root value is 3,
    /// reached through `a1`; no root ties.
    pub fn two_ply() -> Self {
        let mut b = Builder::new("A");
        b.spec.successors.insert(
            "A".into(),
            vec![edge("a1", "B"), edge("a2", "C"), edge("a3", "D")],
        );
        for (node, moves) in [("B", ["b1", "b2", "b3"]), ("C", ["c1", "c2", "c3"]), ("D", ["d1", "d2", "d3"])] {
            let edges = moves
                .iter()
                .enumerate()
                .map(|(i, m)| edge(m, &format!("{node}{}", i + 1)))
                .collect();
            b.spec.successors.insert(node.into(), edges);
        }
        for (leaf, u) in [
            ("B1", 3.0), ("B2", 12.0), ("B3", 8.0),
            ("C1", 2.0), ("C2", 4.0), ("C3", 6.0),
            ("D1", 14.0), ("D2", 5.0), ("D3", 2.0),
        ] {
            b = b.leaf(leaf, u);
        }
        b.build()
    }
}

fn edge(action: &str, to: &str) -> Edge {
    Edge { action: action.to_string(), to: to.to_string() }
}

// Fixture builder; the tables are well formed, so validation cannot fail.
struct Builder {
    spec: TreeSpec,
}

impl Builder {
    fn new(initial: &str) -> Self {
        Self {
            spec: TreeSpec {
                initial: initial.to_string(),
                first_player: Player::Max,
                successors: BTreeMap::new(),
                utilities: BTreeMap::new(),
            },
        }
    }

    // Actions are labelled after the state they lead to.
    fn node(mut self, state: &str, children: &[&str]) -> Self {
        let edges = children.iter().map(|c| edge(c, c)).collect();
        self.spec.successors.insert(state.to_string(), edges);
        self
    }

    fn leaf(mut self, state: &str, utility: f64) -> Self {
        self.spec.utilities.insert(state.to_string(), utility);
        self
    }

    fn build(self) -> TreeGame {
        match TreeGame::from_spec(self.spec) {
            Ok(g) => g,
            Err(e) => panic!("built-in tree is malformed: {e}"),
        }
    }
}

impl Game for TreeGame {
    type State = String;
    type Action = String;

    fn actions(&self, state: &String) -> Vec<String> {
        self.spec
            .successors
            .get(state)
            .map(|es| es.iter().map(|e| e.action.clone()).collect())
            .unwrap_or_default()
    }

    fn result(&self, state: &String, action: &String) -> Result<String> {
        self.spec
            .successors
            .get(state)
            .and_then(|es| es.iter().find(|e| &e.action == action))
            .map(|e| e.to.clone())
            .ok_or_else(|| Error::invalid_move(state, action))
    }

    fn terminal_test(&self, state: &String) -> bool {
        self.spec.successors.get(state).map_or(true, |es| es.is_empty())
    }

    fn utility(&self, state: &String, player: Player) -> Result<f64> {
        if !self.terminal_test(state) {
            return Err(Error::non_terminal_utility(state));
        }
        let u = self
            .spec
            .utilities
            .get(state)
            .copied()
            .ok_or_else(|| Error::InvalidTree(format!("no utility for state {state}")))?;
        Ok(match player {
            Player::Max => u,
            Player::Min => -u,
        })
    }

    fn to_move(&self, state: &String) -> Player {
        self.turns.get(state).copied().unwrap_or(self.spec.first_player)
    }
}

/// Seeded random tree with exactly `depth` plies, 1..=`max_branching`
/// children per interior state and integer leaf utilities in
/// `-utility_range..=utility_range`. Small ranges make root ties common.
pub fn random_tree(seed: u64, depth: u32, max_branching: usize, utility_range: i32) -> Result<TreeGame> {
    if depth == 0 || max_branching == 0 || utility_range < 0 {
        return Err(Error::InvalidTree(format!(
            "random tree needs depth >= 1, branching >= 1 and utility range >= 0 \
             (got depth {depth}, branching {max_branching}, range {utility_range})"
        )));
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut b = Builder::new("r");
    grow(&mut rng, &mut b.spec, "r".to_string(), depth, max_branching, utility_range);
    TreeGame::from_spec(b.spec)
}

fn grow(rng: &mut SmallRng, spec: &mut TreeSpec, state: String, remaining: u32, max_branching: usize, range: i32) {
    if remaining == 0 {
        spec.utilities.insert(state, rng.gen_range(-range..=range) as f64);
        return;
    }
    let n = rng.gen_range(1..=max_branching);
    let children: Vec<String> = (0..n).map(|i| format!("{state}.{i}")).collect();
    spec.successors.insert(state, children.iter().map(|c| edge(c, c)).collect());
    for c in children {
        grow(rng, spec, c, remaining - 1, max_branching, range);
    }
}

use abprune::search::{minimax, AlphaBeta, AlphaBetaAlt, SearchParams};
use abprune::tree::random_tree;
use abprune::Game;
use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "tiebreak_survey", about = "Count where > and >= root updates disagree on random trees")]
struct Args {
    /// Number of random trees
    #[arg(long, default_value_t = 1000)]
    trees: u64,
    /// Plies per tree
    #[arg(long, default_value_t = 4)]
    depth: u32,
    /// Maximum children per interior state
    #[arg(long, default_value_t = 3)]
    branching: usize,
    /// Leaf utilities are drawn from -RANGE..=RANGE
    #[arg(long, default_value_t = 2)]
    range: i32,
    /// Seed of the first tree; tree i uses SEED + i (wrapping)
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Worker threads
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

#[derive(Default, Clone, Copy)]
struct Tally {
    trees: u64,
    diverged: u64,
    alt_suboptimal: u64,
    canonical_wrong: u64,
    nodes_canonical: u64,
    nodes_alt: u64,
    nodes_minimax: u64,
}

impl Tally {
    fn merge(mut self, o: Tally) -> Tally {
        self.trees += o.trees;
        self.diverged += o.diverged;
        self.alt_suboptimal += o.alt_suboptimal;
        self.canonical_wrong += o.canonical_wrong;
        self.nodes_canonical += o.nodes_canonical;
        self.nodes_alt += o.nodes_alt;
        self.nodes_minimax += o.nodes_minimax;
        self
    }
}

fn survey_one(args: &Args, seed: u64) -> abprune::Result<Tally> {
    let game = random_tree(seed, args.depth, args.branching, args.range)?;
    let root = game.initial();
    let params = SearchParams::default();
    let canonical = AlphaBeta::new(params).search(&root, &game)?;
    let alt = AlphaBetaAlt::new(params).search(&root, &game)?;
    let exact = minimax::minimax_decision(&root, &game)?;

    let player = game.to_move(&root);
    let alt_child = game.result(&root, &alt.action)?;
    let alt_value = minimax::minimax_value(&alt_child, &game, player)?;
    if canonical.action != alt.action {
        log::debug!("seed {seed}: canonical {} vs modified {}", canonical.action, alt.action);
    }

    Ok(Tally {
        trees: 1,
        diverged: (canonical.action != alt.action) as u64,
        alt_suboptimal: (alt_value < exact.score) as u64,
        canonical_wrong: (canonical.score != exact.score) as u64,
        nodes_canonical: canonical.nodes,
        nodes_alt: alt.nodes,
        nodes_minimax: exact.nodes,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.max(1))
        .build()
        .context("building thread pool")?;

    let t0 = Instant::now();
    let tally = pool.install(|| {
        (0..args.trees)
            .into_par_iter()
            .map(|i| survey_one(&args, args.seed.wrapping_add(i)))
            .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))
    })?;
    let dt = t0.elapsed().as_secs_f64();

    let pct = |n: u64| if tally.trees == 0 { 0.0 } else { 100.0 * n as f64 / tally.trees as f64 };
    println!("trees: {} (depth {}, branching <= {}, utilities in +/-{})", tally.trees, args.depth, args.branching, args.range);
    println!("variants disagree: {} ({:.1}%)", tally.diverged, pct(tally.diverged));
    println!(">= picks a worse action: {} ({:.1}%)", tally.alt_suboptimal, pct(tally.alt_suboptimal));
    println!("> value differs from minimax: {}", tally.canonical_wrong);
    println!(
        "nodes: alpha-beta {} / modified {} / minimax {}",
        tally.nodes_canonical, tally.nodes_alt, tally.nodes_minimax
    );
    println!("elapsed: {:.3}s", dt);
    Ok(())
}

use abprune::search::{self, minimax, SearchParams, Variant};
use abprune::tree::TreeGame;
use abprune::Game;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Fixture {
    /// Root ties resolved differently by the two variants
    TieBreak,
    /// Two-ply tree with a unique best reply
    TwoPly,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare canonical and tie-replacing alpha-beta on a game tree", long_about = None)]
struct Args {
    /// JSON game tree to search instead of a built-in fixture
    #[arg(long)]
    tree: Option<PathBuf>,

    /// Built-in tree used when --tree is not given
    #[arg(long, value_enum, default_value = "tie-break")]
    fixture: Fixture,

    /// Fail instead of searching deeper than this many plies
    #[arg(long)]
    max_ply: Option<u32>,

    /// Also report each recommendation's exact minimax value
    #[arg(long)]
    verify: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    variant: Variant,
    comparison: &'static str,
    action: String,
    score: f64,
    nodes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    exact_value: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let game = match &args.tree {
        Some(path) => TreeGame::from_json_file(path)
            .with_context(|| format!("loading game tree from {}", path.display()))?,
        None => match args.fixture {
            Fixture::TieBreak => TreeGame::tie_break(),
            Fixture::TwoPly => TreeGame::two_ply(),
        },
    };
    let root = game.initial();
    let params = SearchParams { max_ply: args.max_ply };

    let mut reports = Vec::with_capacity(Variant::ALL.len());
    for variant in Variant::ALL {
        let r = search::search(variant, &root, &game, params)
            .with_context(|| format!("{} search from {}", variant.label(), root))?;
        let exact_value = if args.verify {
            let child = game.result(&root, &r.action)?;
            Some(minimax::minimax_value(&child, &game, game.to_move(&root))?)
        } else {
            None
        };
        reports.push(Report {
            variant,
            comparison: variant.comparison(),
            action: r.action,
            score: r.score,
            nodes: r.nodes,
            exact_value,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for r in &reports {
        println!("{} ({}) recommends {}", r.variant.label(), r.comparison, r.action);
    }
    if args.verify {
        let mover = game.to_move(&root);
        let best = minimax::minimax_value(&root, &game, mover)?;
        println!("Root value for {mover}: {best}");
        for r in &reports {
            if let Some(v) = r.exact_value {
                let verdict = if v < best { "suboptimal" } else { "optimal" };
                println!("  {} -> {} is worth {} ({})", r.variant.label(), r.action, v, verdict);
            }
        }
    }
    Ok(())
}

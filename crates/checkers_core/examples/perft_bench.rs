//! Perft growth table for a Star/Circle layout.
//!
//! Prints the node count for every depth up to the limit, the growth over the
//! previous depth, and a per-root-move split at the deepest level.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p checkers_core -- [config] [max_depth]
//!
//! Without a configuration file the standard opening (Star to move) is used.
//! Profile with:
//!   cargo flamegraph --example perft_bench -p checkers_core -- input.txt 10

use checkers_core::{legal_moves, move_label, perft, Configuration, Position, Side};
use std::env;
use std::time::Instant;

const OPENING: &str = "Star
MINIMAX
1
0,C1,0,C1,0,C1,0,C1
C1,0,C1,0,C1,0,C1,0
0,C1,0,C1,0,C1,0,C1
0,0,0,0,0,0,0,0
0,0,0,0,0,0,0,0
S1,0,S1,0,S1,0,S1,0
0,S1,0,S1,0,S1,0,S1
S1,0,S1,0,S1,0,S1,0
10,20,30,40,50,60,70,80
";

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => Configuration::from_file(path),
        None => Configuration::parse(OPENING),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let max_depth: u8 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.depth_limit.max(8));

    let pos = config.initial_position();
    println!(
        "{:?} to move, {} Star / {} Circle pieces",
        pos.side_to_move(),
        pos.count(Side::Star),
        pos.count(Side::Circle)
    );
    println!();

    growth_table(&pos, max_depth);
    println!();
    divide(&pos, max_depth);
}

fn growth_table(pos: &Position, max_depth: u8) {
    println!("{:>5} {:>14} {:>8} {:>10}", "depth", "nodes", "growth", "time");
    let mut previous = 1u64;
    for depth in 1..=max_depth {
        let start = Instant::now();
        let nodes = perft(pos, depth);
        let elapsed = start.elapsed();
        let growth = nodes as f64 / previous as f64;
        println!("{depth:>5} {nodes:>14} {growth:>8.2} {elapsed:>10.3?}");
        previous = nodes.max(1);
    }
}

/// Splits the deepest count by root move.
fn divide(pos: &Position, depth: u8) {
    if depth == 0 || pos.is_terminal() {
        return;
    }
    println!("Root moves at depth {depth}:");
    let mut total = 0u64;
    for mv in legal_moves(pos) {
        let nodes = perft(&pos.apply(mv), depth - 1);
        total += nodes;
        println!("  {:<8} {nodes}", move_label(mv));
    }
    println!("  {:<8} {total}", "total");
}

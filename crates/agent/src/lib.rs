//! Star/Circle agent
//!
//! Ties configuration loading, engine selection and output together.

use std::path::Path;

use alphabeta_engine::AlphaBetaEngine;
use anyhow::{Context, Result};
use checkers_core::{
    format_decision, move_label, Algorithm, Configuration, Decision, Engine, Side,
};
use minimax_engine::MinimaxEngine;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Builds the engine named by the configuration.
pub fn create_engine(algorithm: Algorithm) -> Box<dyn Engine> {
    match algorithm {
        Algorithm::Minimax => Box::new(MinimaxEngine::new()),
        Algorithm::AlphaBeta => Box::new(AlphaBetaEngine::new()),
    }
}

/// Runs one search from the configured starting position.
pub fn solve(config: &Configuration) -> Decision {
    let mut engine = create_engine(config.algorithm);
    engine.search(&config.initial_position(), config.depth_limit)
}

/// Everything worth reporting about one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionReport {
    pub acting_player: Side,
    pub algorithm: Algorithm,
    pub depth_limit: u8,
    /// Move in board notation, e.g. `D6-B8`
    pub best_move: String,
    pub decision: Decision,
}

impl DecisionReport {
    pub fn new(config: &Configuration, decision: Decision) -> Self {
        Self {
            acting_player: config.acting_player,
            algorithm: config.algorithm,
            depth_limit: config.depth_limit,
            best_move: move_label(decision.best_move),
            decision,
        }
    }
}

/// Reads `input`, searches, and writes the four-line decision to `output`.
pub fn run(input: &Path, output: &Path) -> Result<DecisionReport> {
    let config = Configuration::from_file(input)
        .with_context(|| format!("Failed to load configuration from {}", input.display()))?;
    info!(
        player = ?config.acting_player,
        algorithm = %config.algorithm,
        depth = config.depth_limit,
        "configuration loaded"
    );

    let decision = solve(&config);

    std::fs::write(output, format_decision(&decision))
        .with_context(|| format!("Failed to write decision to {}", output.display()))?;
    info!(
        best_move = %move_label(decision.best_move),
        nodes = decision.nodes,
        output = %output.display(),
        "decision written"
    );

    Ok(DecisionReport::new(&config, decision))
}

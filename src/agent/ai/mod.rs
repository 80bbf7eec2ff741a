// AI Agent - Fixed-depth minimax with alpha-beta pruning
//
// This module implements the Isolation search agent: a depth-bounded
// minimax pair with alpha-beta pruning and a liberties-based positional
// evaluation at the horizon.
//
// Key properties:
// - Deterministic (same position always gives same move)
// - Single fixed-depth pass per turn: no iterative deepening, no
//   transposition table, no time checks inside the search
// - Evaluation is pluggable through the Heuristic trait without touching
//   the search itself

mod alpha_beta;
mod alpha_beta_player;
mod evaluation;

pub use alpha_beta_player::{AlphaBetaPlayer, OPENING_FIRST, OPENING_REPLY};

// Re-export the search functions and evaluators
pub use alpha_beta::{alpha_beta_search, max_value, min_value};
pub use evaluation::{BaselineLiberties, CollapsedLiberties, Heuristic, LibertiesOfLiberties};

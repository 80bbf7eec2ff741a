pub mod player;
pub use player::*;

pub mod ai;
pub use ai::{AlphaBetaPlayer, BaselineLiberties, CollapsedLiberties, Heuristic, LibertiesOfLiberties};

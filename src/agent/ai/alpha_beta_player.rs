//! AlphaBetaPlayer - turn-level move selection
//!
//! The player special-cases the first two plies with fixed openings and
//! otherwise hands the position to the bounded alpha-beta search. One search
//! per turn at a fixed depth: the harness timer is generous enough for the
//! default depth to run to completion, so there is no progressive deepening
//! and no time awareness here.

use crate::agent::ai::alpha_beta::alpha_beta_search;
use crate::agent::ai::evaluation::{Heuristic, LibertiesOfLiberties};
use crate::agent::player::{ActionSink, Player};
use crate::game_repr::{Cell, GameState, PlayerId};

/// Opening move played on an empty board (ply 0).
pub const OPENING_FIRST: Cell = Cell(58);

/// Opening reply played when moving second (ply 1).
pub const OPENING_REPLY: Cell = Cell(57);

/// Default lookahead in plies.
const SEARCH_DEPTH: u8 = 3;

/// Adversarial search player: fixed openings, then depth-bounded minimax
/// with alpha-beta pruning and a liberties-based horizon evaluation.
///
/// Generic over the game state and the evaluator; the evaluator can be
/// swapped at construction without touching the search. Deterministic: the
/// same position always produces the same move.
pub struct AlphaBetaPlayer<S: GameState, H = LibertiesOfLiberties> {
    /// The side this player maximizes for.
    player: PlayerId,

    /// Search depth in plies.
    depth: u8,

    /// Horizon evaluation.
    heuristic: H,

    /// Hardcoded (ply-0, ply-1) actions played without searching.
    opening: (S::Action, S::Action),

    /// Opaque carry-over blob the harness persists between turns.
    context: Option<Vec<u8>>,

    /// Display name for UI and logging.
    name: String,
}

impl<S> AlphaBetaPlayer<S, LibertiesOfLiberties>
where
    S: GameState,
    S::Action: From<Cell>,
{
    /// Create a player with the standard openings and the default
    /// liberties-of-liberties evaluator.
    pub fn new(player: PlayerId) -> Self {
        Self::with_heuristic(player, LibertiesOfLiberties)
    }
}

impl<S, H> AlphaBetaPlayer<S, H>
where
    S: GameState,
    H: Heuristic<S>,
{
    /// Create a player with the standard openings and a custom evaluator.
    pub fn with_heuristic(player: PlayerId, heuristic: H) -> Self
    where
        S::Action: From<Cell>,
    {
        Self::with_opening(
            player,
            heuristic,
            OPENING_FIRST.into(),
            OPENING_REPLY.into(),
        )
    }

    /// Create a player with custom opening actions, for boards whose action
    /// type has no cell conversion or that lack the standard opening cells.
    pub fn with_opening(
        player: PlayerId,
        heuristic: H,
        first: S::Action,
        reply: S::Action,
    ) -> Self {
        let name = format!("AlphaBeta ({})", heuristic.name());
        Self {
            player,
            depth: SEARCH_DEPTH,
            heuristic,
            opening: (first, reply),
            context: None,
            name,
        }
    }

    /// Change the search depth for future turns.
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }
}

impl<S, H> Player<S> for AlphaBetaPlayer<S, H>
where
    S: GameState,
    H: Heuristic<S>,
{
    /// Choose this turn's action and write it to the sink.
    ///
    /// Plies 0 and 1 play the fixed openings without searching; every later
    /// ply runs a single alpha-beta pass at the configured depth and emits
    /// its result. Exactly one write per call, before returning.
    fn get_action(&mut self, state: &S, sink: &ActionSink<S::Action>) {
        match state.ply_count() {
            0 => sink.put(self.opening.0),
            1 => sink.put(self.opening.1),
            _ => {
                if let Some(action) =
                    alpha_beta_search(state, self.player, &self.heuristic, self.depth)
                {
                    log::debug!(
                        "{} plays {:?} at ply {}",
                        self.name,
                        action,
                        state.ply_count()
                    );
                    sink.put(action);
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn context(&self) -> Option<&[u8]> {
        self.context.as_deref()
    }

    fn set_context(&mut self, context: Vec<u8>) {
        self.context = Some(context);
    }
}

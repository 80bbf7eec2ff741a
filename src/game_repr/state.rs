//! Game state interface consumed by the search engine.
//!
//! The board itself lives in an external game engine. The engine only ever
//! sees positions through the `GameState` trait: immutable values that can
//! enumerate legal actions, produce successor values, and answer terminal
//! and mobility queries. Nothing here mutates a position in place.

use crate::game_repr::PlayerId;
use smallvec::SmallVec;
use std::fmt;

/// Positional score. Higher favors the player the score was computed for.
///
/// Terminal utilities use `f64::INFINITY` / `f64::NEG_INFINITY`; by
/// convention they dominate any heuristic value in magnitude. The search
/// relies on that convention but does not enforce it.
pub type Score = f64;

/// Index of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(pub u8);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable board position.
///
/// Implementations are value types: `result()` returns a fresh state and the
/// receiver is never modified. The search keeps no references into a state
/// beyond the current stack frame, so `Clone` is the only ownership
/// requirement.
///
/// # Contract
///
/// - `actions()` must be non-empty whenever `is_terminal()` is false. The
///   search treats a violation as an unrecoverable precondition failure, not
///   a handled error.
/// - `actions()` must enumerate in a fixed order for a given position; the
///   search breaks ties by that order, so enumeration order is part of the
///   observable behavior.
/// - `utility()` is only meaningful at terminal states, and `loc()` only once
///   the queried player has placed their piece.
pub trait GameState: Clone {
    /// Opaque move identifier. Consumed exactly as produced by `actions()`;
    /// the search never constructs one itself.
    type Action: Copy + PartialEq + fmt::Debug;

    /// Number of plies played so far.
    fn ply_count(&self) -> u32;

    /// Current cell of the given player.
    fn loc(&self, player: PlayerId) -> Cell;

    /// Legal actions from this position, in fixed enumeration order.
    fn actions(&self) -> Vec<Self::Action>;

    /// Successor position after `action`. Pure: `self` is unchanged.
    fn result(&self, action: Self::Action) -> Self;

    /// Whether the game is over in this position.
    fn is_terminal(&self) -> bool;

    /// Game-theoretic outcome for `player` at a terminal position.
    fn utility(&self, player: PlayerId) -> Score;

    /// Empty cells reachable in one step from `cell`. A knight reaches at
    /// most 8 cells, hence the inline capacity.
    fn liberties(&self, cell: Cell) -> SmallVec<[Cell; 8]>;
}

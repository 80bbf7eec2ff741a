// Depth-Limited Minimax Search with Alpha-Beta Pruning
//
// A pair of mutually recursive value functions (max_value / min_value) plus
// a root fold that picks the best action for the searching player. The
// search bottoms out at terminal states (exact utility) or at depth 0,
// where the heuristic stands in for further lookahead.
//
// The pruning policy is deliberately asymmetric and must stay that way:
// - min_value returns as soon as its running value drops to alpha or below.
// - max_value never returns early. A beta cutoff only raises alpha for the
//   remaining siblings; the scan still visits every action.
// - At the root, alpha carries over from one root action to the next while
//   beta is pinned to negative infinity for every root call.
// Tests below pin all three behaviors.

use crate::agent::ai::evaluation::Heuristic;
use crate::game_repr::{GameState, PlayerId, Score};

/// Find the best action for `player` in `state`, looking `depth` plies ahead.
///
/// Folds over the root actions in enumeration order, scoring each successor
/// with `min_value` at `depth - 1`. A candidate replaces the incumbent when
/// its value is greater than *or equal to* the best seen, so equal-valued
/// actions resolve to the later-enumerated one.
///
/// # Arguments
///
/// * `state` - Position to move from (not terminal, non-empty `actions()`)
/// * `player` - The player the search maximizes for
/// * `heuristic` - Horizon evaluation
/// * `depth` - Plies to look ahead before evaluating heuristically
///
/// # Returns
///
/// The chosen action, or `None` if `state` has no actions (which callers
/// must rule out for non-terminal states).
pub fn alpha_beta_search<S, H>(
    state: &S,
    player: PlayerId,
    heuristic: &H,
    depth: u8,
) -> Option<S::Action>
where
    S: GameState,
    H: Heuristic<S>,
{
    let mut best_action = None;
    let mut best_value = Score::NEG_INFINITY;
    let mut alpha = Score::NEG_INFINITY;

    for action in state.actions() {
        let value = min_value(
            &state.result(action),
            player,
            heuristic,
            alpha,
            Score::NEG_INFINITY,
            depth.saturating_sub(1),
        );
        alpha = alpha.max(value);
        if value >= best_value {
            best_value = value;
            best_action = Some(action);
        }
    }

    log::debug!(
        "alpha-beta depth {}: best {:?} (value {})",
        depth,
        best_action,
        best_value
    );

    best_action
}

/// Value of `state` when `player` is to move, with `depth` plies remaining.
///
/// Terminal states return their exact utility; at depth 0 the heuristic
/// scores the position. Otherwise the running maximum over `min_value` of
/// every successor. A beta cutoff (`value >= beta`) does not stop the scan:
/// it only raises `alpha` for the remaining siblings.
pub fn max_value<S, H>(
    state: &S,
    player: PlayerId,
    heuristic: &H,
    mut alpha: Score,
    beta: Score,
    depth: u8,
) -> Score
where
    S: GameState,
    H: Heuristic<S>,
{
    if state.is_terminal() {
        return state.utility(player);
    }
    if depth == 0 {
        return heuristic.score(state, player);
    }

    let mut value = Score::NEG_INFINITY;
    for action in state.actions() {
        value = value.max(min_value(
            &state.result(action),
            player,
            heuristic,
            alpha,
            beta,
            depth - 1,
        ));
        if value >= beta {
            alpha = alpha.max(value);
        }
    }
    value
}

/// Value of `state` when `player`'s opponent is to move, with `depth` plies
/// remaining.
///
/// Same base cases as `max_value`. The running minimum over `max_value` of
/// every successor, except that the scan stops immediately once the value
/// reaches alpha or below; otherwise beta tightens to the running minimum.
pub fn min_value<S, H>(
    state: &S,
    player: PlayerId,
    heuristic: &H,
    alpha: Score,
    mut beta: Score,
    depth: u8,
) -> Score
where
    S: GameState,
    H: Heuristic<S>,
{
    if state.is_terminal() {
        return state.utility(player);
    }
    if depth == 0 {
        return heuristic.score(state, player);
    }

    let mut value = Score::INFINITY;
    for action in state.actions() {
        value = value.min(max_value(
            &state.result(action),
            player,
            heuristic,
            alpha,
            beta,
            depth - 1,
        ));
        if value <= alpha {
            return value;
        }
        beta = beta.min(value);
    }
    value
}

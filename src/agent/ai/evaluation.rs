// Positional evaluation at the search horizon
//
// All evaluators measure mobility through liberties: the empty cells a
// player could jump to from where they stand. Opponent mobility counts
// against the score at twice the weight of own mobility.

use crate::game_repr::{GameState, PlayerId, Score};
use std::collections::HashSet;

/// Weight on the searching player's own mobility terms.
const OWN_WEIGHT: Score = 1.0;
/// Weight on the opponent's mobility terms.
const OPP_WEIGHT: Score = 2.0;

/// Static evaluation of a non-terminal position for a given player.
///
/// This is the seam the search is generic over: swapping the active
/// evaluator changes nothing in the search functions themselves.
pub trait Heuristic<S: GameState> {
    /// Estimate `player`'s advantage in `state`. Higher favors `player`.
    fn score(&self, state: &S, player: PlayerId) -> Score;

    /// Short identifier for logging.
    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Liberties-of-liberties evaluation (the active default).
///
/// Combines each player's immediate liberties with the total liberties
/// reachable from those cells. The second-order term sums per first-order
/// cell without deduplication, so a cell reachable from two different
/// liberties counts twice.
pub struct LibertiesOfLiberties;

impl<S: GameState> Heuristic<S> for LibertiesOfLiberties {
    fn score(&self, state: &S, player: PlayerId) -> Score {
        let own_loc = state.loc(player);
        let opp_loc = state.loc(player.opponent());
        let own_liberties = state.liberties(own_loc);
        let opp_liberties = state.liberties(opp_loc);

        let own_reach: usize = own_liberties
            .iter()
            .map(|&cell| state.liberties(cell).len())
            .sum();
        let opp_reach: usize = opp_liberties
            .iter()
            .map(|&cell| state.liberties(cell).len())
            .sum();

        let first_order =
            OWN_WEIGHT * own_liberties.len() as Score - OPP_WEIGHT * opp_liberties.len() as Score;
        let second_order = OWN_WEIGHT * own_reach as Score - OPP_WEIGHT * opp_reach as Score;

        first_order + second_order
    }

    fn name(&self) -> &'static str {
        "liberties-of-liberties"
    }
}

/// Deduplicated variant of [`LibertiesOfLiberties`].
///
/// First- and second-order liberties are collected as sets, and cells both
/// players can reach earn a bonus on top of the own-count: contested cells
/// are not fully the opponent's.
pub struct CollapsedLiberties;

impl<S: GameState> Heuristic<S> for CollapsedLiberties {
    fn score(&self, state: &S, player: PlayerId) -> Score {
        let own_loc = state.loc(player);
        let opp_loc = state.loc(player.opponent());

        let own_liberties: HashSet<_> = state.liberties(own_loc).into_iter().collect();
        let opp_liberties: HashSet<_> = state.liberties(opp_loc).into_iter().collect();
        let shared = own_liberties.intersection(&opp_liberties).count();
        let first_order = OWN_WEIGHT * own_liberties.len() as Score + shared as Score
            - OPP_WEIGHT * opp_liberties.len() as Score;

        let own_reach: HashSet<_> = own_liberties
            .iter()
            .flat_map(|&cell| state.liberties(cell))
            .collect();
        let opp_reach: HashSet<_> = opp_liberties
            .iter()
            .flat_map(|&cell| state.liberties(cell))
            .collect();
        let shared_reach = own_reach.intersection(&opp_reach).count();
        let second_order = OWN_WEIGHT * own_reach.len() as Score + shared_reach as Score
            - OPP_WEIGHT * opp_reach.len() as Score;

        first_order + second_order
    }

    fn name(&self) -> &'static str {
        "collapsed-liberties"
    }
}

/// First-order liberty difference, unweighted. The simplest mobility
/// measure and the yardstick the richer evaluators are compared against.
pub struct BaselineLiberties;

impl<S: GameState> Heuristic<S> for BaselineLiberties {
    fn score(&self, state: &S, player: PlayerId) -> Score {
        let own_loc = state.loc(player);
        let opp_loc = state.loc(player.opponent());

        state.liberties(own_loc).len() as Score - state.liberties(opp_loc).len() as Score
    }

    fn name(&self) -> &'static str {
        "baseline-liberties"
    }
}

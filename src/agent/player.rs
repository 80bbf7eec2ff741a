//! Player trait and action delivery channel.
//!
//! A player is anything the game harness can ask for a move: a search agent,
//! a remote client, a scripted replay. The harness calls `get_action()` once
//! per turn, usually on its own thread under a wall-clock timeout, and after
//! the timeout reads whatever action the player last wrote to the
//! [`ActionSink`]. A player that has not written anything by then forfeits.
//!
//! # Timeout Model
//!
//! The cutoff belongs entirely to the harness. `get_action()` is free to run
//! to completion and write exactly once, or to write repeatedly as better
//! answers become available; only the last write before the cutoff counts.
//! Players must not call their own `get_action()` recursively to "re-search"
//! (the harness owns the turn loop), and they perform no time checks of
//! their own.

use crate::game_repr::GameState;
use std::sync::{Arc, Mutex};

/// Last-write-wins delivery slot for a player's chosen action.
///
/// The harness keeps one clone and hands the other to the player for the
/// duration of a turn. Each `put()` overwrites the previous value; the
/// harness reads the survivor with `latest()` once its timer expires. There
/// is no queue of pending actions, so a slow search that keeps refining its
/// answer costs nothing but the writes.
pub struct ActionSink<A> {
    slot: Arc<Mutex<Option<A>>>,
}

impl<A: Copy> ActionSink<A> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Record `action` as the player's current choice, replacing any
    /// previous one.
    pub fn put(&self, action: A) {
        *self.slot.lock().expect("action sink lock poisoned") = Some(action);
    }

    /// The most recently recorded action, if any.
    pub fn latest(&self) -> Option<A> {
        *self.slot.lock().expect("action sink lock poisoned")
    }
}

impl<A> Clone for ActionSink<A> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<A: Copy> Default for ActionSink<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for entities that can choose moves in a game.
///
/// Only `get_action()` must be implemented. The remaining methods have
/// defaults: identity for display/logging, and an opaque context blob the
/// harness persists for the player between turns.
pub trait Player<S: GameState> {
    /// Choose an action for the current position.
    ///
    /// Must write at least one action to `sink` before returning whenever
    /// `state` has legal actions. May write several times; the last write
    /// before the harness cutoff is binding.
    fn get_action(&mut self, state: &S, sink: &ActionSink<S::Action>);

    /// Display name for UI and logging.
    fn name(&self) -> &str {
        "Player"
    }

    /// Carry-over data to persist until this player's next turn. The
    /// harness stores the blob verbatim and feeds it back through
    /// `set_context()`; players without carry-over state ignore both.
    fn context(&self) -> Option<&[u8]> {
        None
    }

    /// Restore carry-over data saved from a previous turn.
    fn set_context(&mut self, _context: Vec<u8>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_starts_empty() {
        let sink: ActionSink<u8> = ActionSink::new();
        assert_eq!(sink.latest(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let sink = ActionSink::new();
        sink.put(3u8);
        sink.put(7u8);
        assert_eq!(sink.latest(), Some(7));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let sink = ActionSink::new();
        let reader = sink.clone();
        sink.put(42u8);
        assert_eq!(reader.latest(), Some(42));
    }

    #[test]
    fn test_latest_is_not_consuming() {
        let sink = ActionSink::new();
        sink.put(5u8);
        assert_eq!(sink.latest(), Some(5));
        assert_eq!(sink.latest(), Some(5));
    }
}

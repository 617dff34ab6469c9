//! Id sequences shared by a registry and every game and team it creates

use std::sync::atomic::{AtomicU64, Ordering};

use crate::constants::FIRST_ENTITY_ID;

/// A monotonically increasing id counter.
///
/// Reading an id advances the counter, so an id is handed out at most once.
/// There is no upper bound check; the counter wraps around at `u64::MAX`.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Creates a sequence whose first id is [`FIRST_ENTITY_ID`].
    pub fn new() -> Self {
        Self::starting_at(FIRST_ENTITY_ID)
    }

    fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the current id and advances the sequence.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the id the next call to [`IdSequence::next_id`] would hand out.
    #[cfg(test)]
    fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// The three per-kind sequences behind one registry.
///
/// Games, teams and players each draw from their own sequence. Every team of
/// every game shares the team sequence, and every player of every team shares
/// the player sequence.
#[derive(Debug, Default)]
pub struct IdAllocator {
    games: IdSequence,
    teams: IdSequence,
    players: IdSequence,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_game_id(&self) -> u64 {
        self.games.next_id()
    }

    pub fn next_team_id(&self) -> u64 {
        self.teams.next_id()
    }

    pub fn next_player_id(&self) -> u64 {
        self.players.next_id()
    }
}

//! Per-round state.

use crate::names::{capitalize, normalize};

/// Guesses allowed per round.
pub const MAX_TRIES: u8 = 6;

/// How a round ended, if it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Unresolved,
    Won,
    Lost,
}

/// Where the controller is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// No round yet, or the last round failed to load.
    #[default]
    Idle,
    /// Target chosen, entity fetch in flight.
    Loading,
    /// Silhouette shown, accepting guesses.
    AwaitingGuess,
    /// Round resolved, artwork revealed.
    Revealed,
}

/// Identifies one `begin_round` call.
///
/// A fetch result carrying a ticket from an earlier generation is stale
/// and must not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTicket {
    pub generation: u64,
    pub id: u32,
}

/// What a submitted guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// No active round, round already resolved, or blank input.
    Ignored,
    Correct,
    Wrong { tries_remaining: u8 },
    OutOfTries,
}

/// The active round's target and progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub id: u32,
    pub name: String,
    pub artwork: Option<String>,
    tries_remaining: u8,
    outcome: Outcome,
}

impl RoundState {
    pub fn new(id: u32, name: impl Into<String>, artwork: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            artwork,
            tries_remaining: MAX_TRIES,
            outcome: Outcome::Unresolved,
        }
    }

    pub fn tries_remaining(&self) -> u8 {
        self.tries_remaining
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome != Outcome::Unresolved
    }

    /// Name as shown to the player.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Case- and punctuation-insensitive name check.
    pub fn is_correct(&self, guess: &str) -> bool {
        normalize(guess) == normalize(&self.name)
    }

    /// Spend one try. Never goes below zero.
    pub(crate) fn record_miss(&mut self) -> u8 {
        self.tries_remaining = self.tries_remaining.saturating_sub(1);
        self.tries_remaining
    }

    /// Move to a terminal outcome. Returns false if already resolved.
    pub(crate) fn resolve(&mut self, won: bool) -> bool {
        if self.is_resolved() {
            return false;
        }
        self.outcome = if won { Outcome::Won } else { Outcome::Lost };
        true
    }
}

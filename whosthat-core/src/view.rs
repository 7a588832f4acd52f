//! The seam between game logic and whatever draws it.
//!
//! The controller never touches a terminal or a DOM. It pushes snapshots
//! and messages into a [`View`], and front ends decide how to show them.

use std::fmt;

use crate::config::GenerationLimit;
use crate::round::{Outcome, RoundPhase};

/// Everything a front end needs to draw the round panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundView {
    pub phase: RoundPhase,
    pub outcome: Outcome,
    /// Target id once the entity has loaded.
    pub id: Option<u32>,
    /// Display name, only present after the reveal.
    pub name: Option<String>,
    /// Artwork URL; `None` with a loaded round means none exists.
    pub artwork: Option<String>,
    /// False while the silhouette is shown.
    pub revealed: bool,
    pub tries_remaining: u8,
    pub score: u32,
    pub generation_limit: GenerationLimit,
    pub daily: bool,
    /// Whether the "next round" control is enabled.
    pub can_skip: bool,
    /// Whether guess input and the reveal control are enabled.
    pub input_enabled: bool,
}

impl RoundView {
    /// True when a round is loaded but has no artwork to show.
    pub fn artwork_missing(&self) -> bool {
        self.id.is_some() && self.artwork.is_none()
    }
}

/// User-facing status messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Ready,
    CatalogUnavailable,
    Loading,
    DailyPuzzle,
    GuessPrompt,
    ArtworkFailed,
    Correct { name: String },
    OutOfTries { name: String },
    Nope { tries_remaining: u8 },
    GenerationSet { limit: GenerationLimit },
    SkipDisabled,
}

impl Message {
    /// Messages reporting a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Message::CatalogUnavailable | Message::ArtworkFailed)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Ready => write!(f, "Ready — have fun!"),
            Message::CatalogUnavailable => write!(
                f,
                "Could not load Pokémon names. Check your internet connection."
            ),
            Message::Loading => write!(f, "Loading Pokémon..."),
            Message::DailyPuzzle => write!(f, "Daily puzzle — good luck!"),
            Message::GuessPrompt => write!(f, "Guess the Pokémon!"),
            Message::ArtworkFailed => write!(f, "Error loading Pokémon artwork."),
            Message::Correct { name } => write!(f, "Correct! It's {name}."),
            Message::OutOfTries { name } => write!(f, "Out of tries — it's {name}."),
            Message::Nope { tries_remaining } => {
                let noun = if *tries_remaining == 1 { "try" } else { "tries" };
                write!(f, "Nope — {tries_remaining} {noun} left.")
            }
            Message::GenerationSet { limit } => {
                write!(f, "Generation set: first {limit} Pokémon")
            }
            Message::SkipDisabled => {
                write!(f, "Skipping is disabled during the daily puzzle.")
            }
        }
    }
}

/// Rendering capabilities the controller drives.
pub trait View {
    /// Redraw the round panel.
    fn render_round(&mut self, round: &RoundView);

    /// Replace the suggestion list. An empty slice hides it.
    fn render_suggestions(&mut self, suggestions: &[String]);

    /// Replace the status message.
    fn render_message(&mut self, message: &Message);

    /// Clear the guess field.
    fn clear_guess(&mut self) {}
}

//! Color theme and styling for the TUI

use ratatui::style::{Color, Modifier, Style};
use whosthat_core::Outcome;

/// Game UI color theme
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Silhouette panel
    pub silhouette: Color,
    pub revealed: Color,

    // Outcome colors
    pub won: Color,
    pub lost: Color,

    // Tries colors
    pub tries_plenty: Color,
    pub tries_low: Color,
    pub tries_last: Color,

    // Text colors
    pub player_text: Color,
    pub message_text: Color,
    pub error_text: Color,
    pub system_text: Color,
    pub highlight: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            silhouette: Color::DarkGray,
            revealed: Color::Yellow,

            won: Color::Green,
            lost: Color::Red,

            tries_plenty: Color::Green,
            tries_low: Color::Yellow,
            tries_last: Color::Red,

            player_text: Color::Cyan,
            message_text: Color::White,
            error_text: Color::LightRed,
            system_text: Color::DarkGray,
            highlight: Color::Yellow,
        }
    }
}

impl GameTheme {
    /// Get style for player input
    pub fn player_style(&self) -> Style {
        Style::default()
            .fg(self.player_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get style for the status message
    pub fn message_style(&self, is_error: bool) -> Style {
        if is_error {
            Style::default()
                .fg(self.error_text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.message_text)
        }
    }

    /// Get style for system hints
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for the silhouette panel contents
    pub fn silhouette_style(&self, revealed: bool) -> Style {
        if revealed {
            Style::default()
                .fg(self.revealed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.silhouette)
        }
    }

    /// Get style for a round outcome
    pub fn outcome_style(&self, outcome: Outcome) -> Style {
        match outcome {
            Outcome::Won => Style::default().fg(self.won).add_modifier(Modifier::BOLD),
            Outcome::Lost => Style::default().fg(self.lost).add_modifier(Modifier::BOLD),
            Outcome::Unresolved => Style::default().fg(self.foreground),
        }
    }

    /// Get tries color based on how many are left
    pub fn tries_color(&self, tries: u8) -> Color {
        match tries {
            0 | 1 => self.tries_last,
            2 | 3 => self.tries_low,
            _ => self.tries_plenty,
        }
    }

    /// Get style for a suggestion row
    pub fn suggestion_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.highlight)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(self.foreground)
        }
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

//! Title bar, message line and hotkey bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use whosthat_core::{Message, RoundView};

use crate::ui::theme::GameTheme;

/// Top bar: score, tries, generation and mode
pub struct TitleBarWidget<'a> {
    round: &'a RoundView,
    theme: &'a GameTheme,
}

impl<'a> TitleBarWidget<'a> {
    pub fn new(round: &'a RoundView, theme: &'a GameTheme) -> Self {
        Self { round, theme }
    }
}

impl Widget for TitleBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = if self.round.daily { "Daily" } else { "Random" };
        let line = Line::from(vec![
            Span::styled(" Who's That? ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("| "),
            Span::raw(format!("Score: {} ", self.round.score)),
            Span::raw("| "),
            Span::styled(
                format!("Tries left: {} ", self.round.tries_remaining),
                Style::default().fg(self.theme.tries_color(self.round.tries_remaining)),
            ),
            Span::raw("| "),
            Span::raw(format!("Gen: first {} ", self.round.generation_limit)),
            Span::raw("| "),
            Span::styled(mode, self.theme.player_style()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// Single-line status message
pub struct StatusBarWidget<'a> {
    message: Option<&'a Message>,
    theme: &'a GameTheme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a Message>, theme: &'a GameTheme) -> Self {
        Self { message, theme }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(message) = self.message else {
            return;
        };
        let line = Line::from(Span::styled(
            format!(" {message}"),
            self.theme.message_style(message.is_error()),
        ));
        Paragraph::new(line).render(area, buf);
    }
}

/// Hotkey hints, greyed out when unavailable
pub struct HotkeyBarWidget<'a> {
    round: &'a RoundView,
    theme: &'a GameTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(round: &'a RoundView, theme: &'a GameTheme) -> Self {
        Self { round, theme }
    }

    fn hint(&self, key: &'static str, label: &'static str, enabled: bool) -> Vec<Span<'static>> {
        let key_style = if enabled {
            Style::default()
                .fg(self.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            self.theme.system_style()
        };
        let label_style = if enabled {
            Style::default()
        } else {
            self.theme.system_style()
        };
        vec![
            Span::styled(key, key_style),
            Span::styled(format!(" {label}  "), label_style),
        ]
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.round.input_enabled;
        let mut spans = Vec::new();
        spans.extend(self.hint("Enter", "guess", input));
        spans.extend(self.hint("^R", "reveal", input));
        spans.extend(self.hint("^N", "next", self.round.can_skip));
        spans.extend(self.hint("^D", "daily", true));
        spans.extend(self.hint("^G", "generation", true));
        spans.extend(self.hint("F1", "help", true));
        spans.extend(self.hint("Esc", "quit", true));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

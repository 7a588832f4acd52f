//! Autocomplete dropdown

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use whosthat_core::capitalize;

use crate::ui::theme::GameTheme;

/// Dropdown listing the current suggestions
pub struct SuggestionsWidget<'a> {
    suggestions: &'a [String],
    selected: Option<usize>,
    theme: &'a GameTheme,
}

impl<'a> SuggestionsWidget<'a> {
    pub fn new(suggestions: &'a [String], theme: &'a GameTheme) -> Self {
        Self {
            suggestions,
            selected: None,
            theme,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Rows needed to draw every suggestion plus borders
    pub fn height(&self) -> u16 {
        u16::try_from(self.suggestions.len()).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for SuggestionsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.suggestions.is_empty() {
            return;
        }

        Clear.render(area, buf);

        let block = Block::default()
            .title(" Tab to accept ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        let lines: Vec<Line> = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Line::from(Span::styled(
                    capitalize(name),
                    self.theme.suggestion_style(self.selected == Some(i)),
                ))
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

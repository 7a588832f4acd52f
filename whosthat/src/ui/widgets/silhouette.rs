//! Round panel: the silhouette before the reveal, the answer after

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use whosthat_core::{Outcome, RoundPhase, RoundView};

use crate::ui::theme::GameTheme;

const SILHOUETTE_ART: &[&str] = &[
    r"      _____      ",
    r"    /       \    ",
    r"   |  ?   ?  |   ",
    r"   |    ?    |   ",
    r"    \_______/    ",
];

/// Widget for the round's artwork area
pub struct SilhouetteWidget<'a> {
    round: &'a RoundView,
    theme: &'a GameTheme,
}

impl<'a> SilhouetteWidget<'a> {
    pub fn new(round: &'a RoundView, theme: &'a GameTheme) -> Self {
        Self { round, theme }
    }

    fn body(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line> = Vec::new();

        match self.round.phase {
            RoundPhase::Idle if self.round.id.is_none() => {
                lines.push(Line::from(Span::styled(
                    "No round loaded. Press Ctrl-N to try again.",
                    self.theme.system_style(),
                )));
                return lines;
            }
            RoundPhase::Loading => {
                lines.push(Line::from(Span::styled(
                    "Loading...",
                    self.theme.system_style(),
                )));
                return lines;
            }
            _ => {}
        }

        let art_style = self.theme.silhouette_style(self.round.revealed);
        for row in SILHOUETTE_ART {
            let row = if self.round.revealed {
                row.replace('?', "*")
            } else {
                row.to_string()
            };
            lines.push(Line::from(Span::styled(row, art_style)));
        }
        lines.push(Line::default());

        match (&self.round.name, self.round.revealed) {
            (Some(name), true) => {
                lines.push(Line::from(Span::styled(
                    format!("#{} {}", self.round.id.unwrap_or_default(), name),
                    self.theme.outcome_style(self.round.outcome),
                )));
            }
            _ => {
                lines.push(Line::from(Span::styled(
                    "Who's that?",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            }
        }

        let artwork = if self.round.artwork_missing() {
            Span::styled("Artwork not available", self.theme.system_style())
        } else if self.round.revealed {
            Span::raw(self.round.artwork.clone().unwrap_or_default())
        } else {
            Span::styled("[artwork hidden]", self.theme.system_style())
        };
        lines.push(Line::from(artwork));

        lines
    }
}

impl Widget for SilhouetteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.round.outcome {
            Outcome::Won => " Correct! ",
            Outcome::Lost => " Revealed ",
            Outcome::Unresolved => " Who's That? ",
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.round.input_enabled));

        let paragraph = Paragraph::new(self.body())
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        paragraph.render(area, buf);
    }
}

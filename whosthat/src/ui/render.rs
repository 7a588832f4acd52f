//! Render orchestration for the TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use whosthat_core::RoundPhase;

use crate::app::App;
use crate::ui::widgets::{
    HotkeyBarWidget, InputWidget, SilhouetteWidget, StatusBarWidget, SuggestionsWidget,
    TitleBarWidget,
};

/// Screen regions for the main layout
struct AppLayout {
    title_bar: Rect,
    round_area: Rect,
    status_bar: Rect,
    input_area: Rect,
    hotkey_bar: Rect,
}

impl AppLayout {
    fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(8),    // Round panel
                Constraint::Length(1), // Message
                Constraint::Length(3), // Guess input
                Constraint::Length(1), // Hotkeys
            ])
            .split(area);

        Self {
            title_bar: chunks[0],
            round_area: chunks[1],
            status_bar: chunks[2],
            input_area: chunks[3],
            hotkey_bar: chunks[4],
        }
    }
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);
    let view = app.view();

    frame.render_widget(TitleBarWidget::new(&view.round, &app.theme), layout.title_bar);
    frame.render_widget(
        SilhouetteWidget::new(&view.round, &app.theme),
        layout.round_area,
    );
    frame.render_widget(
        StatusBarWidget::new(view.message.as_ref(), &app.theme),
        layout.status_bar,
    );
    let placeholder = if app.input_enabled() {
        "Type a name..."
    } else if view.round.phase == RoundPhase::Loading {
        "Loading..."
    } else if view.round.can_skip {
        "Press Ctrl-N for the next round"
    } else {
        "Come back tomorrow for a new puzzle"
    };
    frame.render_widget(
        InputWidget::new(view.input(), &app.theme)
            .cursor_position(view.cursor_position())
            .placeholder(placeholder)
            .active(app.input_enabled()),
        layout.input_area,
    );
    frame.render_widget(HotkeyBarWidget::new(&view.round, &app.theme), layout.hotkey_bar);

    // Dropdown grows upward from the input box, over the round panel
    let suggestions = SuggestionsWidget::new(&view.suggestions, &app.theme).selected(view.selected);
    if !view.suggestions.is_empty() {
        let height = suggestions.height().min(layout.round_area.height);
        let width = layout.input_area.width.min(32);
        let dropdown = Rect::new(
            layout.input_area.x,
            layout.input_area.y.saturating_sub(height),
            width,
            height,
        );
        frame.render_widget(suggestions, dropdown);
    }

    if app.show_help {
        render_help(frame, area);
    }
}

/// Render the help overlay
fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect_fixed(52, 16, area);
    frame.render_widget(Clear, popup);

    let key = |k: &'static str| {
        Span::styled(
            format!("{k:<10}"),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };
    let lines = vec![
        Line::from("Guess the creature from its silhouette."),
        Line::from("You have 6 tries per round."),
        Line::default(),
        Line::from(vec![key("Enter"), Span::raw("Submit guess")]),
        Line::from(vec![key("Up/Down"), Span::raw("Move through suggestions")]),
        Line::from(vec![key("Tab"), Span::raw("Accept suggestion")]),
        Line::from(vec![key("Ctrl-R"), Span::raw("Reveal the answer")]),
        Line::from(vec![key("Ctrl-N"), Span::raw("Next round (not in daily mode)")]),
        Line::from(vec![key("Ctrl-D"), Span::raw("Toggle daily puzzle")]),
        Line::from(vec![key("Ctrl-G"), Span::raw("Switch generation (151 / 251)")]),
        Line::from(vec![key("F1"), Span::raw("Toggle this help")]),
        Line::from(vec![key("Esc"), Span::raw("Quit")]),
    ];

    let help = Paragraph::new(lines)
        .block(Block::default().title(" Help ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(help, popup);
}

/// A rect of fixed size centered in `area`, shrunk to fit
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

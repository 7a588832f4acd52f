//! Event handling for the TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use whosthat_core::RoundTicket;

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
    /// A round began; its entity must be fetched
    FetchRound(RoundTicket),
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control_key(app, key);
    }

    // Help overlay swallows everything but its own toggle
    if app.show_help {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
            app.toggle_help();
            return EventResult::NeedsRedraw;
        }
        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Esc => EventResult::Quit,
        KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.submit_guess();
            EventResult::NeedsRedraw
        }
        KeyCode::Tab => {
            app.accept_suggestion();
            EventResult::NeedsRedraw
        }
        KeyCode::Down => {
            app.game.view_mut().select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Up => {
            app.game.view_mut().select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Delete => {
            app.delete();
            EventResult::NeedsRedraw
        }
        KeyCode::Left => {
            app.game.view_mut().cursor_left();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.game.view_mut().cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Home => {
            app.game.view_mut().cursor_home();
            EventResult::NeedsRedraw
        }
        KeyCode::End => {
            app.game.view_mut().cursor_end();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle Ctrl-chords (game controls)
fn handle_control_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('c') => EventResult::Quit,
        KeyCode::Char('r') => {
            app.reveal();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('n') => match app.next_round() {
            Some(ticket) => EventResult::FetchRound(ticket),
            None => EventResult::NeedsRedraw,
        },
        KeyCode::Char('d') => EventResult::FetchRound(app.toggle_daily()),
        KeyCode::Char('g') => EventResult::FetchRound(app.cycle_generation()),
        _ => EventResult::Continue,
    }
}

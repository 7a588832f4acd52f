//! Main application state and logic

use whosthat_core::{
    capitalize, GuessResult, Message, RoundController, RoundTicket, RoundView, View,
};

use crate::ui::theme::GameTheme;

/// What the controller has pushed to the terminal, plus the guess field.
#[derive(Debug, Default)]
pub struct TuiView {
    pub round: RoundView,
    pub message: Option<Message>,
    pub suggestions: Vec<String>,
    pub selected: Option<usize>,
    input_buffer: String,
    cursor_position: usize,
}

impl View for TuiView {
    fn render_round(&mut self, round: &RoundView) {
        self.round = round.clone();
    }

    fn render_suggestions(&mut self, suggestions: &[String]) {
        self.suggestions = suggestions.to_vec();
        self.selected = None;
    }

    fn render_message(&mut self, message: &Message) {
        self.message = Some(message.clone());
    }

    fn clear_guess(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
}

impl TuiView {
    pub fn input(&self) -> &str {
        &self.input_buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the guess field and put the cursor at the end
    pub fn set_input(&mut self, text: &str) {
        self.input_buffer = text.to_string();
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Handle a typed character (unicode-safe)
    pub fn type_char(&mut self, c: char) {
        let byte_pos = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Handle backspace (unicode-safe)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position)
            {
                self.input_buffer
                    .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    /// Handle delete (unicode-safe)
    pub fn delete(&mut self) {
        if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position) {
            self.input_buffer
                .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Move the highlight down the suggestion list, wrapping
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.suggestions.len() => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Move the highlight up the suggestion list, wrapping
    pub fn select_prev(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    pub fn selected_suggestion(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }
}

/// Main application state
pub struct App {
    pub game: RoundController<TuiView>,
    pub theme: GameTheme,
    pub show_help: bool,
}

impl App {
    pub fn new(game: RoundController<TuiView>) -> Self {
        Self {
            game,
            theme: GameTheme::default(),
            show_help: false,
        }
    }

    pub fn view(&self) -> &TuiView {
        self.game.view()
    }

    fn view_mut(&mut self) -> &mut TuiView {
        self.game.view_mut()
    }

    /// Whether the guess field accepts edits
    pub fn input_enabled(&self) -> bool {
        self.game.input_enabled()
    }

    pub fn type_char(&mut self, c: char) {
        if !self.input_enabled() {
            return;
        }
        self.view_mut().type_char(c);
        self.refresh_suggestions();
    }

    pub fn backspace(&mut self) {
        if !self.input_enabled() {
            return;
        }
        self.view_mut().backspace();
        self.refresh_suggestions();
    }

    pub fn delete(&mut self) {
        if !self.input_enabled() {
            return;
        }
        self.view_mut().delete();
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        let query = self.view().input().to_string();
        self.game.update_suggestions(&query);
    }

    /// Fill the guess field with the highlighted (or only) suggestion
    pub fn accept_suggestion(&mut self) -> bool {
        let view = self.view();
        let chosen = view
            .selected_suggestion()
            .or_else(|| match view.suggestions.as_slice() {
                [only] => Some(only.as_str()),
                _ => None,
            })
            .map(capitalize);

        match chosen {
            Some(name) => {
                let view = self.view_mut();
                view.set_input(&name);
                view.render_suggestions(&[]);
                true
            }
            None => false,
        }
    }

    /// Submit whatever is in the guess field
    pub fn submit_guess(&mut self) -> GuessResult {
        if !self.input_enabled() {
            return GuessResult::Ignored;
        }
        let guess = self.view().input().to_string();
        let result = self.game.submit_guess(&guess);
        if result != GuessResult::Ignored {
            self.view_mut().render_suggestions(&[]);
        }
        result
    }

    pub fn reveal(&mut self) -> bool {
        self.game.force_reveal()
    }

    pub fn next_round(&mut self) -> Option<RoundTicket> {
        self.game.begin_next_round()
    }

    pub fn toggle_daily(&mut self) -> RoundTicket {
        let daily = !self.game.config().daily;
        self.game.set_daily(daily)
    }

    pub fn cycle_generation(&mut self) -> RoundTicket {
        let next = self.game.config().generation_limit.next_preset();
        self.game.set_generation_limit(next.get())
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use whosthat_core::testing::{MockCatalog, GEN_ONE_SAMPLE};
    use whosthat_core::{Entity, Outcome};

    fn app_with_round(name: &str) -> App {
        let source = Arc::new(MockCatalog::gen_one());
        let mut game = RoundController::new(source, TuiView::default()).with_seed(1);
        game.apply_catalog(Ok(GEN_ONE_SAMPLE.iter().map(|s| s.to_string()).collect()));
        let ticket = game.begin_round();
        game.complete_round(
            ticket,
            Ok(Entity {
                id: ticket.id,
                name: name.to_string(),
                artwork: None,
            }),
        );
        App::new(game)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn test_typing_updates_suggestions() {
        let mut app = app_with_round("ivysaur");
        type_str(&mut app, "saur");
        assert_eq!(app.view().suggestions, ["bulbasaur", "ivysaur", "venusaur"]);

        for _ in 0..4 {
            app.backspace();
        }
        assert!(app.view().suggestions.is_empty());
    }

    #[test]
    fn test_accept_suggestion_fills_input() {
        let mut app = app_with_round("ivysaur");
        type_str(&mut app, "saur");
        app.view_mut().select_next();
        app.view_mut().select_next();
        assert!(app.accept_suggestion());
        assert_eq!(app.view().input(), "Ivysaur");
        assert!(app.view().suggestions.is_empty());

        assert_eq!(app.submit_guess(), GuessResult::Correct);
        assert_eq!(app.game.outcome(), Outcome::Won);
    }

    #[test]
    fn test_single_suggestion_accepted_without_selection() {
        let mut app = app_with_round("squirtle");
        type_str(&mut app, "squ");
        assert!(app.accept_suggestion());
        assert_eq!(app.view().input(), "Squirtle");
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app_with_round("ivysaur");
        type_str(&mut app, "saur");
        let view = app.view_mut();
        view.select_prev();
        assert_eq!(view.selected_suggestion(), Some("venusaur"));
        view.select_next();
        assert_eq!(view.selected_suggestion(), Some("bulbasaur"));
    }

    #[test]
    fn test_input_locked_after_reveal() {
        let mut app = app_with_round("pikachu");
        app.reveal();
        type_str(&mut app, "pika");
        assert_eq!(app.view().input(), "");
        assert_eq!(app.submit_guess(), GuessResult::Ignored);
    }

    #[test]
    fn test_new_round_clears_guess() {
        let mut app = app_with_round("pikachu");
        type_str(&mut app, "pika");
        app.next_round();
        assert_eq!(app.view().input(), "");
        assert_eq!(app.view().cursor_position(), 0);
    }

    #[test]
    fn test_daily_toggle_blocks_next() {
        let mut app = app_with_round("pikachu");
        app.toggle_daily();
        assert!(app.next_round().is_none());
        assert_eq!(app.view().message, Some(Message::SkipDisabled));
    }

    #[test]
    fn test_cycle_generation() {
        let mut app = app_with_round("pikachu");
        app.cycle_generation();
        assert_eq!(app.game.config().generation_limit.get(), 251);
        app.cycle_generation();
        assert_eq!(app.game.config().generation_limit.get(), 151);
    }

    #[test]
    fn test_unicode_editing() {
        let mut view = TuiView::default();
        view.set_input("Flabébé");
        view.cursor_left();
        view.backspace();
        assert_eq!(view.input(), "Flabéé");
        view.cursor_home();
        view.delete();
        assert_eq!(view.input(), "labéé");
    }
}

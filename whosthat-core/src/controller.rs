//! RoundController - the primary public API for gameplay.
//!
//! The controller owns the whole session: configuration, score, the
//! catalog and the active round. Front ends call its operations in
//! response to user input and receive updates through their [`View`].
//!
//! Entity fetches are split into [`RoundController::begin_round`] and
//! [`RoundController::complete_round`] so an event loop can run the
//! fetch elsewhere. Each `begin_round` bumps a generation counter; a
//! result carrying an older ticket is dropped.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, MAX_CATALOG_SIZE};
use crate::config::{GameConfig, GenerationLimit};
use crate::daily::{daily_id, Clock, SystemClock};
use crate::round::{GuessResult, Outcome, RoundPhase, RoundState, RoundTicket, MAX_TRIES};
use crate::source::{CatalogSource, Entity, SourceError};
use crate::view::{Message, RoundView, View};

/// Drives rounds against a [`CatalogSource`] and renders into a [`View`].
pub struct RoundController<V: View> {
    source: Arc<dyn CatalogSource>,
    view: V,
    clock: Box<dyn Clock>,
    rng: StdRng,
    config: GameConfig,
    catalog: Catalog,
    round: Option<RoundState>,
    phase: RoundPhase,
    generation: u64,
    score: u32,
    message: Option<Message>,
}

impl<V: View> RoundController<V> {
    /// Create an idle controller with default configuration.
    pub fn new(source: Arc<dyn CatalogSource>, view: V) -> Self {
        Self {
            source,
            view,
            clock: Box::new(SystemClock),
            rng: StdRng::from_entropy(),
            config: GameConfig::default(),
            catalog: Catalog::default(),
            round: None,
            phase: RoundPhase::Idle,
            generation: 0,
            score: 0,
            message: None,
        }
    }

    /// Use the given configuration for upcoming rounds.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different time source for the daily puzzle.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Make random rounds reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ========================================================================
    // Observables
    // ========================================================================

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Tries left in the active round; a fresh allowance while loading.
    pub fn tries_remaining(&self) -> u8 {
        self.round
            .as_ref()
            .map_or(MAX_TRIES, RoundState::tries_remaining)
    }

    pub fn outcome(&self) -> Outcome {
        self.round
            .as_ref()
            .map_or(Outcome::Unresolved, RoundState::outcome)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The last status message shown.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Artwork URL of the active round, if it has one.
    pub fn artwork(&self) -> Option<&str> {
        self.round.as_ref().and_then(|r| r.artwork.as_deref())
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Round generation counter; bumped by every `begin_round`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the "next round" control is available.
    ///
    /// In daily mode it only retries a day's puzzle whose fetch failed.
    pub fn can_skip(&self) -> bool {
        !self.config.daily || self.fetch_failed()
    }

    fn fetch_failed(&self) -> bool {
        self.generation > 0 && self.phase == RoundPhase::Idle
    }

    /// Whether guesses and reveals are currently accepted.
    pub fn input_enabled(&self) -> bool {
        self.phase == RoundPhase::AwaitingGuess
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Shared handle to the source, for running fetches off the event loop.
    pub fn source(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.source)
    }

    /// Snapshot of the round panel.
    pub fn round_view(&self) -> RoundView {
        let revealed = self.phase == RoundPhase::Revealed;
        RoundView {
            phase: self.phase,
            outcome: self.outcome(),
            id: self.round.as_ref().map(|r| r.id),
            name: self
                .round
                .as_ref()
                .filter(|_| revealed)
                .map(RoundState::display_name),
            artwork: self.artwork().map(str::to_string),
            revealed,
            tries_remaining: self.tries_remaining(),
            score: self.score,
            generation_limit: self.config.generation_limit,
            daily: self.config.daily,
            can_skip: self.can_skip(),
            input_enabled: self.input_enabled(),
        }
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Fetch the autocomplete catalog. Failures leave it empty.
    pub async fn load_catalog(&mut self) {
        let source = self.source();
        let result = source.fetch_names(MAX_CATALOG_SIZE).await;
        self.apply_catalog(result);
    }

    /// Store the result of a catalog fetch.
    pub fn apply_catalog(&mut self, result: Result<Vec<String>, SourceError>) {
        match result {
            Ok(names) => {
                tracing::info!(count = names.len(), "catalog loaded");
                self.catalog = Catalog::new(names);
                // Only greet before the first round; later messages win.
                if self.generation == 0 {
                    self.set_message(Message::Ready);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                self.catalog = Catalog::default();
                self.set_message(Message::CatalogUnavailable);
            }
        }
    }

    // ========================================================================
    // Rounds
    // ========================================================================

    /// Start a round and wait for its entity.
    pub async fn start(&mut self) {
        let ticket = self.begin_round();
        self.finish_round(ticket).await;
    }

    /// Start a new round unless daily mode forbids skipping.
    pub async fn next_round(&mut self) -> bool {
        match self.begin_next_round() {
            Some(ticket) => self.finish_round(ticket).await,
            None => false,
        }
    }

    /// Fetch the entity for `ticket` and apply it.
    pub async fn finish_round(&mut self, ticket: RoundTicket) -> bool {
        let source = self.source();
        let result = source.fetch_entity(ticket.id).await;
        self.complete_round(ticket, result)
    }

    /// Synchronous half of `start`: reset state and pick a target.
    pub fn begin_round(&mut self) -> RoundTicket {
        self.generation += 1;
        self.round = None;
        self.phase = RoundPhase::Loading;
        self.view.clear_guess();
        self.view.render_suggestions(&[]);

        let id = self.pick_id();
        tracing::info!(
            id,
            daily = self.config.daily,
            generation = self.generation,
            "starting round"
        );

        self.set_message(if self.config.daily {
            Message::DailyPuzzle
        } else {
            Message::Loading
        });
        self.render();

        RoundTicket {
            generation: self.generation,
            id,
        }
    }

    /// Like `begin_round`, but refused while a daily puzzle is loaded.
    pub fn begin_next_round(&mut self) -> Option<RoundTicket> {
        if !self.can_skip() {
            self.set_message(Message::SkipDisabled);
            return None;
        }
        Some(self.begin_round())
    }

    /// Whether `ticket` belongs to the round currently loading.
    pub fn is_current(&self, ticket: RoundTicket) -> bool {
        ticket.generation == self.generation && self.phase == RoundPhase::Loading
    }

    /// Apply an entity fetch result. Returns false if the ticket is stale.
    pub fn complete_round(
        &mut self,
        ticket: RoundTicket,
        result: Result<Entity, SourceError>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale round result"
            );
            return false;
        }

        match result {
            Ok(entity) => {
                if entity.artwork.is_none() {
                    tracing::info!(id = ticket.id, "no artwork available");
                }
                self.round = Some(RoundState::new(ticket.id, entity.name, entity.artwork));
                self.phase = RoundPhase::AwaitingGuess;
                self.set_message(Message::GuessPrompt);
            }
            Err(e) => {
                tracing::warn!(id = ticket.id, error = %e, "entity load failed");
                self.phase = RoundPhase::Idle;
                self.set_message(Message::ArtworkFailed);
            }
        }
        self.render();
        true
    }

    /// Change the generation limit and begin a fresh round.
    pub fn set_generation_limit(&mut self, limit: u32) -> RoundTicket {
        self.config.generation_limit = GenerationLimit::new(limit);
        self.set_message(Message::GenerationSet {
            limit: self.config.generation_limit,
        });
        self.begin_round()
    }

    /// Toggle daily mode and begin a fresh round.
    pub fn set_daily(&mut self, daily: bool) -> RoundTicket {
        self.config.daily = daily;
        self.begin_round()
    }

    // ========================================================================
    // Guessing
    // ========================================================================

    /// Check a guess against the active round.
    pub fn submit_guess(&mut self, text: &str) -> GuessResult {
        let guess = text.trim();
        if guess.is_empty() {
            return GuessResult::Ignored;
        }
        let Some(round) = self.round.as_mut().filter(|r| !r.is_resolved()) else {
            return GuessResult::Ignored;
        };

        if round.is_correct(guess) {
            self.reveal(true);
            return GuessResult::Correct;
        }

        let tries_remaining = round.record_miss();
        tracing::debug!(tries_remaining, "wrong guess");
        if tries_remaining == 0 {
            self.reveal(false);
            GuessResult::OutOfTries
        } else {
            self.set_message(Message::Nope { tries_remaining });
            self.render();
            GuessResult::Wrong { tries_remaining }
        }
    }

    /// Give up on the round, whatever the tries left.
    pub fn force_reveal(&mut self) -> bool {
        self.reveal(false)
    }

    fn reveal(&mut self, won: bool) -> bool {
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        if !round.resolve(won) {
            return false;
        }

        let name = round.display_name();
        self.phase = RoundPhase::Revealed;
        if won {
            self.score += 1;
            tracing::info!(score = self.score, "round won");
            self.set_message(Message::Correct { name });
        } else {
            tracing::info!("round lost");
            self.set_message(Message::OutOfTries { name });
        }
        self.view.render_suggestions(&[]);
        self.render();
        true
    }

    // ========================================================================
    // Suggestions
    // ========================================================================

    /// Autocomplete candidates for `query` within the generation limit.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.catalog
            .suggestions(query, self.config.generation_limit)
    }

    /// Compute suggestions and push them to the view.
    pub fn update_suggestions(&mut self, query: &str) -> usize {
        let suggestions = self.suggestions(query);
        self.view.render_suggestions(&suggestions);
        suggestions.len()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn pick_id(&mut self) -> u32 {
        let limit = self.config.generation_limit;
        if self.config.daily {
            daily_id(self.clock.now(), limit)
        } else {
            self.rng.gen_range(1..=limit.get())
        }
    }

    fn set_message(&mut self, message: Message) {
        self.view.render_message(&message);
        self.message = Some(message);
    }

    fn render(&mut self) {
        let snapshot = self.round_view();
        self.view.render_round(&snapshot);
    }
}

//! Testing utilities for the game.
//!
//! This module provides tools for integration testing:
//! - `MockCatalog` for deterministic testing without network calls
//! - `RecordingView` to assert on everything the controller rendered
//! - `FixedClock` to pin the daily puzzle to a chosen date

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::controller::RoundController;
use crate::daily::Clock;
use crate::source::{CatalogSource, Entity, SourceError};
use crate::view::{Message, RoundView, View};

/// The first twelve names of the real catalog, in order.
pub const GEN_ONE_SAMPLE: &[&str] = &[
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
    "caterpie",
    "metapod",
    "butterfree",
];

/// An in-memory catalog source.
///
/// Entity `id` is named after the catalog entry at `id - 1`; ids past
/// the end of the catalog fail like a 404 would.
#[derive(Debug, Default)]
pub struct MockCatalog {
    names: Vec<String>,
    fail_names: bool,
    fail_entities: bool,
    missing_artwork: HashSet<u32>,
    entity_requests: Mutex<Vec<u32>>,
}

impl MockCatalog {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A full-size catalog: the sample names followed by fillers up to
    /// id 251, so any generation limit resolves.
    pub fn gen_one() -> Self {
        let names = GEN_ONE_SAMPLE
            .iter()
            .map(|s| s.to_string())
            .chain((GEN_ONE_SAMPLE.len() + 1..=251).map(filler_name));
        Self::new(names)
    }

    /// Make the catalog list request fail.
    pub fn with_catalog_failure(mut self) -> Self {
        self.fail_names = true;
        self
    }

    /// Make every entity request fail.
    pub fn with_entity_failure(mut self) -> Self {
        self.fail_entities = true;
        self
    }

    /// Serve `id` without any artwork.
    pub fn without_artwork(mut self, id: u32) -> Self {
        self.missing_artwork.insert(id);
        self
    }

    /// Ids requested through `fetch_entity`, in order.
    pub fn entity_requests(&self) -> Vec<u32> {
        self.entity_requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Name the mock serves for `id`.
    pub fn name_for(&self, id: u32) -> Option<&str> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.names.get(index).map(String::as_str)
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_names(&self, limit: u32) -> Result<Vec<String>, SourceError> {
        if self.fail_names {
            return Err(SourceError::Unavailable("catalog offline".to_string()));
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self.names.iter().take(limit).cloned().collect())
    }

    async fn fetch_entity(&self, id: u32) -> Result<Entity, SourceError> {
        if let Ok(mut requests) = self.entity_requests.lock() {
            requests.push(id);
        }
        if self.fail_entities {
            return Err(SourceError::Unavailable("entity offline".to_string()));
        }
        let name = self
            .name_for(id)
            .ok_or_else(|| SourceError::Unavailable(format!("no entity with id {id}")))?;
        let artwork = if self.missing_artwork.contains(&id) {
            None
        } else {
            Some(format!("https://example.test/artwork/{id}.png"))
        };
        Ok(Entity {
            id,
            name: name.to_string(),
            artwork,
        })
    }
}

/// Distinct after normalization, which strips digits.
fn filler_name(id: usize) -> String {
    let mut n = id;
    let mut letters = String::new();
    while n > 0 {
        letters.insert(0, char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    format!("mon{letters}")
}

/// A view that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub rounds: Vec<RoundView>,
    pub suggestions: Vec<Vec<String>>,
    pub messages: Vec<Message>,
    pub guess_clears: usize,
}

impl RecordingView {
    pub fn last_round(&self) -> Option<&RoundView> {
        self.rounds.last()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn last_suggestions(&self) -> Option<&[String]> {
        self.suggestions.last().map(Vec::as_slice)
    }
}

impl View for RecordingView {
    fn render_round(&mut self, round: &RoundView) {
        self.rounds.push(round.clone());
    }

    fn render_suggestions(&mut self, suggestions: &[String]) {
        self.suggestions.push(suggestions.to_vec());
    }

    fn render_message(&mut self, message: &Message) {
        self.messages.push(message.clone());
    }

    fn clear_guess(&mut self) {
        self.guess_clears += 1;
    }
}

/// A settable clock. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Milliseconds since the Unix epoch; out-of-range values pin to the epoch.
    pub fn from_millis(millis: i64) -> Self {
        Self::new(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += by;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|g| *g).unwrap_or_default()
    }
}

/// A seeded controller over `source` with a recording view and a clock
/// pinned to 2024-01-01 12:00 UTC.
///
/// Returns the source and clock too so tests can inspect and steer them.
pub fn mock_controller(
    source: MockCatalog,
) -> (RoundController<RecordingView>, Arc<MockCatalog>, FixedClock) {
    let source = Arc::new(source);
    // 2024-01-01T12:00:00Z
    let clock = FixedClock::from_millis(1_704_110_400_000);
    let controller = RoundController::new(source.clone(), RecordingView::default())
        .with_seed(7)
        .with_clock(clock.clone());
    (controller, source, clock)
}

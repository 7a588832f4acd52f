//! Background fetches for the TUI.
//!
//! Network requests run on spawned tokio tasks and report back over a
//! channel, so the event loop keeps handling keystrokes while a fetch is
//! in flight. The event loop applies results through the controller,
//! which drops stale round results by ticket.

use std::sync::Arc;

use tokio::sync::mpsc;
use whosthat_core::{CatalogSource, Entity, RoundTicket, SourceError, MAX_CATALOG_SIZE};

/// A finished fetch.
#[derive(Debug)]
pub enum WorkerResponse {
    Catalog(Result<Vec<String>, SourceError>),
    Round(RoundTicket, Result<Entity, SourceError>),
}

/// Spawns fetches and collects their results.
pub struct Worker {
    source: Arc<dyn CatalogSource>,
    response_tx: mpsc::UnboundedSender<WorkerResponse>,
    response_rx: mpsc::UnboundedReceiver<WorkerResponse>,
}

impl Worker {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        Self {
            source,
            response_tx,
            response_rx,
        }
    }

    /// Load the autocomplete catalog in the background.
    pub fn load_catalog(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.response_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_names(MAX_CATALOG_SIZE).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(WorkerResponse::Catalog(result));
        });
    }

    /// Fetch the entity for a round that has just begun.
    pub fn fetch_round(&self, ticket: RoundTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.response_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_entity(ticket.id).await;
            let _ = tx.send(WorkerResponse::Round(ticket, result));
        });
    }

    /// Next finished fetch, if any, without blocking.
    pub fn try_recv(&mut self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }
}

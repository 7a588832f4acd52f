//! Game engine for Who's That, a silhouette guessing game.
//!
//! This crate provides:
//! - Catalog loading and autocomplete suggestions
//! - Round lifecycle with a guess limit and reveal
//! - A deterministic daily puzzle
//! - A `View` seam so front ends stay out of game logic
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use whosthat_core::{GameConfig, PokeApi, RoundController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(PokeApi::from_env()?);
//!     let mut game = RoundController::new(source, MyView::default())
//!         .with_config(GameConfig::new().with_generation_limit(151));
//!
//!     game.load_catalog().await;
//!     game.start().await;
//!
//!     println!("{:?}", game.suggestions("saur"));
//!     game.submit_guess("Bulbasaur");
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod daily;
pub mod names;
pub mod round;
pub mod source;
pub mod testing;
pub mod view;

// Re-export for convenience
pub use pokeapi::PokeApi;

// Primary public API
pub use catalog::{Catalog, MAX_CATALOG_SIZE, MAX_SUGGESTIONS};
pub use config::{GameConfig, GenerationLimit, MAX_GENERATION_LIMIT};
pub use controller::RoundController;
pub use daily::{daily_id, Clock, SystemClock};
pub use names::{capitalize, normalize};
pub use round::{GuessResult, Outcome, RoundPhase, RoundState, RoundTicket, MAX_TRIES};
pub use source::{CatalogSource, Entity, SourceError};
pub use view::{Message, RoundView, View};

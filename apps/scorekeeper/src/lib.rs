#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod location;
pub mod repos;
pub mod services;
pub mod store;
pub mod telemetry;

// Re-exports for public API
pub use config::StoreConfig;
pub use domain::{GameOverview, GameSummary, RuleId, RuleSet, StoredGame};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use location::{FixedLocation, LocationProvider, NoLocation, UNKNOWN_LOCATION};
pub use repos::{CompletedGames, PersistOutcome};
pub use services::GameSession;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}

pub mod completed_games;

pub use completed_games::{CompletedGames, PersistOutcome, STORE_KEY};

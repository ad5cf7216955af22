//! Shared test helpers for the scorekeeper crates.

pub mod logging;

//! Test-binary log subscriber shared by the library's unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Route `tracing` output into the test harness's captured stdout.
///
/// The filter is `TEST_LOG` if set, else `RUST_LOG`, else `warn`, so a plain
/// run stays quiet and `TEST_LOG=scorekeeper=debug` shows ledger writes.
/// Repeat calls do nothing; a subscriber that is already global is left alone.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let directives = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        let _ = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}

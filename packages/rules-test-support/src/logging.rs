//! Unified test logging initialization
//!
//! Used by the engine's `#[cfg(test)]` modules and by every integration test
//! crate through a `ctor` hook.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The filter is taken, in order of precedence, from:
///
/// 1. `TEST_LOG` (preferred)
/// 2. `RUST_LOG` (fallback)
/// 3. `"warn"` (default, quiet)
///
/// ```bash
/// TEST_LOG=tienlen_rules=trace cargo test -p tienlen-rules
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest capture
            .without_time()
            .try_init()
            .ok(); // something else may already own the global subscriber
    });
}

//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "ELANG_LOG";

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Reads the filter from `ELANG_LOG`, falling
/// back to `RUST_LOG`; installs nothing when neither is set.
///
/// ```text
/// ELANG_LOG=elang_eval=trace   # every dispatch decision
/// ELANG_LOG=elang_eval=debug   # calls and overload registration
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var(LOG_ENV_VAR).is_ok() {
            EnvFilter::try_from_env(LOG_ENV_VAR)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::try_from_default_env()
        } else {
            return;
        };
        let Ok(filter) = filter else {
            return;
        };
        // A host application may have installed its own subscriber already.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}

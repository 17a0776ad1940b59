//! Tracing installation for hosts and tools.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

static INSTALL: Once = Once::new();

/// Installs the global tracing subscriber (idempotent).
///
/// Filtering follows the `RUST_LOG` environment variable and defaults to
/// `info`. Installation failures are reported to stderr and otherwise
/// ignored, so embedding hosts that bring their own subscriber win.
pub fn install() {
    INSTALL.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let console = fmt::layer().with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("ripple tracing subscriber failed to initialize");
        }
    });
}

//! Tracing initialization.
//!
//! Diagnostics go to stderr so they never interleave with rendered markup on
//! stdout. The filter comes from the configuration's `trace_level` (an
//! `EnvFilter` directive string), overridable with `RUST_LOG` at runtime.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `directive` is an `EnvFilter` string such as `"info"` or
/// `"vouch=debug"`; `RUST_LOG` takes precedence when set. Initialization is
/// idempotent: a second call (as happens across tests) is a no-op.
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    // Errors only when a subscriber is already installed.
    let _ = tracing_subscriber::registry().with(filter).with(fmt).try_init();
}

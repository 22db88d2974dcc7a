//! Tracing setup for applications embedding the decoder.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global subscriber filtered by `RUST_LOG`, falling back to `log_level`.
///
/// Returns false if a global subscriber was already set.
pub fn init_tracing(log_level: &str, json: bool) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).try_init().is_ok()
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).try_init().is_ok()
    }
}

//! Log setup shared by the driver binaries.
//!
//! Events are filtered by `RUST_LOG` when it is set and by a per-binary
//! default otherwise.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, else `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Builds the fmt subscriber used by the binaries, writing to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Installs the global subscriber, logging to stderr.
pub fn init(default_filter: &str) {
    let subscriber = subscriber(env_filter(default_filter), std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)
        .unwrap_or_else(|e| eprintln!("logging already initialised: {e}"));
}

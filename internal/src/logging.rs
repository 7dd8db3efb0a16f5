use std::io;

use tracing::dispatcher::DefaultGuard;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, Layer};

fn std_out_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    fmt::Layer::new()
        .with_writer(io::stdout)
        .with_target(false)
        .with_filter(LevelFilter::INFO)
}

/// Installs the global stdout subscriber for the binary. Fails if a global
/// subscriber is already set.
pub fn init_std_out_logging() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(std_out_layer())
        .try_init()
}

/// Same subscriber, scoped to the current thread until the guard is dropped.
pub fn init_std_out_logging_thread_local() -> DefaultGuard {
    let collector = tracing_subscriber::registry().with(std_out_layer());
    tracing::subscriber::set_default(collector)
}

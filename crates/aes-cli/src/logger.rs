use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: LevelFilter) {
    let subscriber = tracing_subscriber::registry();
    let stderr_log = stderr_layer(default_level);
    subscriber.with(stderr_log).init();
}

// Logs go to stderr; stdout is reserved for command output.
fn stderr_layer<S>(default_level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    stderr_layer.with_filter(env_filter)
}

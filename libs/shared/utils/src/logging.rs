use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing_subscriber::util::TryInitError;

/// Installs the global fmt subscriber. `filter` uses `EnvFilter` syntax,
/// e.g. `info` or `info,patient_cell=debug`; an invalid directive falls
/// back to `info`.
pub fn init_tracing(filter: &str) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

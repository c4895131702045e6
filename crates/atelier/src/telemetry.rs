//! Tracing initialisation for the Atelier binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise console logging.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output for the
/// Atelier crates.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fallback = if verbose {
        "info,atelier=debug,atelier_media=debug,atelier_access=debug"
    } else {
        "warn,atelier=info"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    Ok(())
}

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. `RAILNET_LOG` (or `RUST_LOG`) overrides
/// the default filter. Records from the core's `log` macros are forwarded
/// through the subscriber's log bridge.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = if verbose {
        "railnet_server=debug,railnet_core=debug,tower_http=debug"
    } else {
        "railnet_server=info,railnet_core=info,tower_http=info"
    };

    let filter = EnvFilter::try_from_env("RAILNET_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .try_init()?;

    Ok(())
}

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so that `--json` output stays clean on stdout.
/// `RAILNET_LOG` (or `RUST_LOG`) overrides the default filter.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = if verbose {
        "railnet=debug,railnet_core=debug"
    } else {
        "railnet=warn,railnet_core=warn"
    };

    let filter = EnvFilter::try_from_env("RAILNET_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

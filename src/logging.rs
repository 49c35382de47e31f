use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber. `RUST_LOG` wins over `-v`.
/// Returns `false` when a subscriber was already installed; that one is kept.
pub fn init_logging(verbose: u8) -> bool {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("urbanheat={default_level}")));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!("keeping existing log subscriber: {err}");
            false
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the global fmt subscriber on stderr, so log lines never interleave
/// with the quiz on stdout.
///
/// `RUST_LOG` wins when set; otherwise `config.max_level` applies. Calling this
/// twice is harmless: the second install is ignored.
pub fn init_logger(config: &LogConfig) {
    let fallback = config.max_level.as_tracing_level().to_string().to_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

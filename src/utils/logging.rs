//! Diagnostics logging on stderr.
//!
//! Command output goes to stdout; everything logged here goes to stderr so
//! the two never mix.
//!
//! ## Filter priority
//!
//! 1. **`CGKIT_LOG`** - crate-specific filter directive
//! 2. **`RUST_LOG`** - standard tracing environment variable
//! 3. **Verbosity flag** - `warn` by default, `-v` info, `-vv` debug, `-vvv` trace

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "CGKIT_LOG";

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Initialize logging.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(verbosity: u8) -> Result<(), InitError> {
    let filter = create_filter(verbosity)?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

/// Initialize logging for tests. Never fails.
pub fn test() {
    let _ = init(2);
}

fn create_filter(verbosity: u8) -> Result<EnvFilter, InitError> {
    if let Ok(directive) = env::var(LOG_ENV) {
        return Ok(EnvFilter::try_new(directive)?);
    }
    if env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        return Ok(EnvFilter::try_from_default_env()?);
    }
    Ok(EnvFilter::new(level_for(verbosity)))
}

/// Default level for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        test();
        test();
    }
}

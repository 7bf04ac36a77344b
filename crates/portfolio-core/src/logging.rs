//! Logging setup.
//!
//! All crates log through `tracing`. Binaries call [`init_logging`] once at
//! startup; `RUST_LOG` wins over the filter passed in.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a CLI value is given
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: `RUST_LOG` if set and valid, else `fallback`
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a console subscriber. Returns false if one was already set.
pub fn init_logging(fallback: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init_logging("debug");
        assert!(!init_logging("debug"));
    }

    #[test]
    fn invalid_fallback_uses_default() {
        // Must not panic on a malformed directive
        let _ = env_filter("=[not a filter");
    }
}

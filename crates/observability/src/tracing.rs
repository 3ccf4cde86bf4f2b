//! Subscriber setup shared by the server and the seed tool.
//!
//! Output is one JSON object per line. `RUST_LOG` replaces the default
//! filter entirely, including the `tower_http` request-span level.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: our crates at `info`, request
/// spans from `tower_http` at `debug`.
const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_names_tower_http_at_debug() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert!(filter.to_string().contains("tower_http=debug"));
    }

    #[test]
    fn init_twice_is_a_no_op() {
        init();
        init();
    }
}

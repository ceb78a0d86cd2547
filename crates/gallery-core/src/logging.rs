//! Tracing setup shared by the desktop shell and tests.
//!
//! `RUST_LOG` wins when set; otherwise the given default directive is used.
//!
//! ```ignore
//! gallery_core::logging::init("gallery_desktop=info,gallery_core=info");
//! tracing::info!("ready");
//! ```

use tracing_subscriber::EnvFilter;

/// Default directive for the desktop app
pub const DEFAULT_DIRECTIVE: &str = "gallery_desktop=info,gallery_core=info";

/// Install a global `fmt` subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_init_does_not_panic() {
        init("debug");
        assert!(!init("debug"));
    }
}

//! Tracing subscriber setup.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs a JSON `tracing` subscriber filtered by `RUST_LOG` (default
/// `info`).
///
/// Safe to call from every invocation: only the first call installs the
/// subscriber. If another subscriber is already set globally, it is kept.
pub fn init_tracing() {
    TRACING_INITIALIZED.get_or_init(|| {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .json()
            .try_init()
            .is_ok();
        if installed {
            tracing::info!("Tracing initialized");
        }
    });
}

/// Returns `true` once [`init_tracing`] has run.
#[must_use]
pub fn tracing_initialized() -> bool {
    TRACING_INITIALIZED.get().is_some()
}

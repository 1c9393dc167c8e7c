mod config;
pub mod derive;
pub mod form;
pub mod prefs;
pub mod query;
mod seed;
mod store;

pub use crate::config::Config;
pub use crate::derive::{Stats, Visible, outcome, stats, visible};
pub use crate::query::{Filters, QueryState};
pub use crate::seed::sample_teachers;
pub use crate::store::RecordStore;

/// Install the `tracing` subscriber for native builds.
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling it twice is harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

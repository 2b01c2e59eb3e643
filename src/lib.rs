//! Approvd — approval request tracking service.
//!
//! Re-exports modules needed by the HTTP contract tests in `tests/`.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod state_machine;
pub mod store;

use store::RecordStore;

/// Shared application state passed to handlers.
///
/// Constructed exactly once in `main` (or per-test) and handed to every
/// handler behind an `Arc` — there is no ambient global store.
pub struct AppState {
    pub store: RecordStore,
    pub config: config::Config,
}

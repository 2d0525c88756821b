//! Concurrency-safe URL store for the Shortcut URL shortener.
//!
//! The [`UrlStore`] owns the mapping from short code to target URL behind a
//! single reader/writer lock and keeps six usage counters ([`Stats`]) that
//! are updated with atomics, outside that lock. The [`persistence`] module
//! bulk-loads a mapping at startup and writes it back at shutdown.
//!
//! # Example
//!
//! ```rust
//! use shortcut_generator::RandomGenerator;
//! use shortcut_store::UrlStore;
//!
//! let store = UrlStore::new(RandomGenerator::new());
//! let code = store.create_short_url("example.com");
//!
//! assert_eq!(store.lookup(code.as_str()).as_deref(), Some("example.com"));
//! assert_eq!(store.export_stats().urls_generated, 1);
//! ```

pub mod encoding;
pub mod persistence;
pub mod stats;
pub mod store;

pub use shortcut_core::StoreError;
pub use stats::{Stats, StatsDocument, StatsSnapshot};
pub use store::{Snapshot, UrlStore};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Usage counters for the service.
///
/// Every counter is an independent atomic and only ever increases. None of
/// them is guarded by the mapping lock, so a reader may briefly observe e.g.
/// `urls_generated` ahead of or behind the mapping size. Increments are never
/// lost or duplicated.
#[derive(Debug, Default)]
pub struct Stats {
    home_visit: AtomicU64,
    shorten_call: AtomicU64,
    stats_visit: AtomicU64,
    urls_generated: AtomicU64,
    success_redirect: AtomicU64,
    failed_redirect: AtomicU64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// The root/redirect entry point was invoked, whatever the outcome.
    pub fn record_home_visit(&self) {
        self.home_visit.fetch_add(1, Ordering::Relaxed);
    }

    /// A shorten request was received.
    pub fn record_shorten_call(&self) {
        self.shorten_call.fetch_add(1, Ordering::Relaxed);
    }

    /// The statistics entry point was invoked.
    pub fn record_stats_visit(&self) {
        self.stats_visit.fetch_add(1, Ordering::Relaxed);
    }

    /// A mapping entry was inserted or overwritten. Only the store calls
    /// this, while it holds the write lock.
    pub(crate) fn record_code_generated(&self) {
        self.urls_generated.fetch_add(1, Ordering::Relaxed);
    }

    /// A lookup on a non-root path finished; `found` tells whether it hit.
    pub(crate) fn record_redirect(&self, found: bool) {
        let counter = if found {
            &self.success_redirect
        } else {
            &self.failed_redirect
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Reads all six counters.
    ///
    /// Each value is read independently; the snapshot is not atomic across
    /// counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            home_visit: self.home_visit.load(Ordering::Relaxed),
            shorten_call: self.shorten_call.load(Ordering::Relaxed),
            stats_visit: self.stats_visit.load(Ordering::Relaxed),
            urls_generated: self.urls_generated.load(Ordering::Relaxed),
            success_redirect: self.success_redirect.load(Ordering::Relaxed),
            failed_redirect: self.failed_redirect.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time values of the six counters, in export order.
///
/// Field names serialize in PascalCase (`HomeVisit`, `ShortenCall`, ...),
/// the shape existing clients of the stats endpoint parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatsSnapshot {
    pub home_visit: u64,
    pub shorten_call: u64,
    pub stats_visit: u64,
    pub urls_generated: u64,
    pub success_redirect: u64,
    pub failed_redirect: u64,
}

impl StatsSnapshot {
    /// Name and value of every counter, in export order.
    pub fn fields(&self) -> [(&'static str, u64); 6] {
        [
            ("Home called", self.home_visit),
            ("Shorten called", self.shorten_call),
            ("Stats called", self.stats_visit),
            ("Generated urls", self.urls_generated),
            ("Success redirect", self.success_redirect),
            ("Failed redirect", self.failed_redirect),
        ]
    }

    /// Wraps the counters in the structured export document.
    pub fn into_document(self) -> StatsDocument {
        StatsDocument { stats: self }
    }
}

/// Renders one `Name: value` line per counter.
impl Display for StatsSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.fields() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

/// Structured stats export: the six counters nested under `Stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDocument {
    #[serde(rename = "Stats")]
    pub stats: StatsSnapshot,
}

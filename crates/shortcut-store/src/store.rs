use crate::stats::{Stats, StatsSnapshot};
use crate::Result;
use parking_lot::RwLock;
use shortcut_core::{ShortCode, StoreError};
use shortcut_generator::{Generator, RandomGenerator};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use tracing::{debug, trace, warn};

/// A consistent, point-in-time copy of the mapping and the counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Code to target URL, ordered by code.
    pub urls: BTreeMap<String, String>,
    pub stats: StatsSnapshot,
}

/// The shared store of short code to target URL mappings.
///
/// All access to the mapping goes through one reader/writer lock: lookups
/// and snapshots share it, inserts take it exclusively for a single entry.
/// Counters live in [`Stats`] and are updated without taking the lock.
///
/// Generated codes are not checked for collisions. Inserting a code that is
/// already mapped silently replaces the previous target.
#[derive(Debug)]
pub struct UrlStore<G = RandomGenerator> {
    urls: RwLock<HashMap<String, String>>,
    stats: Stats,
    generator: G,
}

impl<G: Generator> UrlStore<G> {
    /// Creates an empty store drawing codes from `generator`.
    pub fn new(generator: G) -> Self {
        Self::with_capacity(generator, 0)
    }

    /// Creates an empty store with room for `capacity` mappings.
    pub fn with_capacity(generator: G, capacity: usize) -> Self {
        Self {
            urls: RwLock::new(HashMap::with_capacity(capacity)),
            stats: Stats::new(),
            generator,
        }
    }

    /// Issues a new short code for `target` and stores the mapping.
    ///
    /// The returned code is mapped to `target` when this returns. The code is
    /// generated before the lock is taken.
    pub fn create_short_url(&self, target: impl Into<String>) -> ShortCode {
        let code: ShortCode = self.generator.generate().into();
        self.insert(code.as_str().to_owned(), target.into());
        debug!(code = %code, "created short url");
        code
    }

    /// Resolves `code` to its target URL, counting the outcome as a
    /// successful or failed redirect.
    pub fn lookup(&self, code: &str) -> Option<String> {
        let target = self.get(code);
        self.stats.record_redirect(target.is_some());
        if target.is_none() {
            trace!(code = %code, "short code not found");
        }
        target
    }

    /// Resolves a request path such as `/aZ3kP9qx`, counting the outcome
    /// once as a successful or failed redirect.
    ///
    /// The code after the leading `/` is tried first, then the whole path:
    /// older `urls_backup.json` files keyed every code with the slash kept.
    pub fn lookup_path(&self, path: &str) -> Option<String> {
        let target = {
            let urls = self.urls.read();
            let found = path
                .strip_prefix('/')
                .and_then(|code| urls.get(code))
                .or_else(|| urls.get(path))
                .cloned();
            found
        };
        self.stats.record_redirect(target.is_some());
        if target.is_none() {
            trace!(path = %path, "request path not mapped");
        }
        target
    }

    /// Reads the target for `code` without touching any counter.
    pub fn get(&self, code: &str) -> Option<String> {
        self.urls.read().get(code).cloned()
    }

    /// Decodes a JSON object of code to URL pairs from `reader` and inserts
    /// every pair, returning how many were applied.
    ///
    /// Decoding happens in full before the first insert, so a malformed
    /// source leaves the mapping and the counters untouched.
    pub fn load_bulk<R: Read>(&self, reader: R) -> Result<usize> {
        let pairs: HashMap<String, String> =
            serde_json::from_reader(reader).map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(self.extend(pairs))
    }

    /// Inserts every pair, one write lock acquisition per pair, and counts
    /// each as a generated code.
    pub fn extend<I>(&self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut applied = 0;
        for (code, target) in pairs {
            self.insert(code, target);
            applied += 1;
        }
        applied
    }

    /// Copies the mapping and the counters under one read lock.
    ///
    /// Writers are excluded while the copy is taken, so `urls_generated` is
    /// never behind the number of entries in the copied mapping.
    pub fn snapshot(&self) -> Snapshot {
        let urls = self.urls.read();
        Snapshot {
            urls: urls.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            stats: self.stats.snapshot(),
        }
    }

    /// Copies only the mapping, ordered by code.
    pub fn mapping(&self) -> BTreeMap<String, String> {
        self.urls
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn insert(&self, code: String, target: String) {
        let mut urls = self.urls.write();
        match urls.entry(code) {
            Entry::Occupied(mut entry) => {
                warn!(
                    code = %entry.key(),
                    previous = %entry.get(),
                    "short code collision, overwriting"
                );
                entry.insert(target);
            }
            Entry::Vacant(entry) => {
                entry.insert(target);
            }
        }
        self.stats.record_code_generated();
    }
}

impl<G> UrlStore<G> {
    /// Current values of the six counters.
    ///
    /// Read under the mapping's read lock, so `urls_generated` agrees with
    /// the mapping at that instant.
    pub fn export_stats(&self) -> StatsSnapshot {
        let _urls = self.urls.read();
        self.stats.snapshot()
    }

    pub fn record_home_visit(&self) {
        self.stats.record_home_visit();
    }

    pub fn record_shorten_call(&self) {
        self.stats.record_shorten_call();
    }

    pub fn record_stats_visit(&self) {
        self.stats.record_stats_visit();
    }

    /// Number of mapped codes.
    pub fn len(&self) -> usize {
        self.urls.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.read().is_empty()
    }
}

impl Default for UrlStore<RandomGenerator> {
    fn default() -> Self {
        Self::new(RandomGenerator::new())
    }
}

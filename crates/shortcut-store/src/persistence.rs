//! Startup load and shutdown save of the mapping.
//!
//! The persisted document is a JSON object from short code to target URL:
//!
//! ```json
//! {
//!     "urlnum1": "google.it",
//!     "urlnum2": "golang.org"
//! }
//! ```
//!
//! Codes are saved without a leading `/`. Documents written by older
//! releases keep the slash (`"/aZ3kP9qx"`); they load unchanged and still
//! resolve over HTTP through [`UrlStore::lookup_path`].
//!
//! Counters are never persisted.

use crate::encoding::to_pretty_vec;
use crate::store::UrlStore;
use crate::Result;
use shortcut_core::StoreError;
use shortcut_generator::Generator;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the mapping is written at shutdown unless configured otherwise.
pub const DEFAULT_BACKUP_PATH: &str = "urls_backup.json";

/// Loads the mapping stored at `path` into `store`.
///
/// Returns the number of pairs applied. Fails with [`StoreError::Io`] when
/// the file can't be opened and [`StoreError::Decode`] when it is not a
/// code-to-url object; in both cases the store is left untouched.
pub fn load<G: Generator>(store: &UrlStore<G>, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;

    let applied = store.load_bulk(BufReader::new(file))?;
    info!(path = %path.display(), urls = applied, "loaded url mapping");
    Ok(applied)
}

/// Writes a snapshot of the mapping in `store` to `path`.
///
/// The document goes to a temporary file next to `path` first and is then
/// renamed over it, so an interrupted save leaves the previous document in
/// place. Returns the number of pairs written.
pub fn save<G: Generator>(store: &UrlStore<G>, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let mapping = store.mapping();
    let document = to_pretty_vec(&mapping).map_err(|e| StoreError::Write(e.to_string()))?;

    let tmp_path = temporary_path(path);
    write_synced(&tmp_path, &document).map_err(|e| {
        // best effort, the temporary file may not even exist
        let _ = fs::remove_file(&tmp_path);
        StoreError::Write(format!("{}: {}", tmp_path.display(), e))
    })?;
    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StoreError::Write(format!("{}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), urls = mapping.len(), "saved url mapping");
    Ok(mapping.len())
}

fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote temporary mapping file");
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_BACKUP_PATH.into());
    name.push(".tmp");
    path.with_file_name(name)
}

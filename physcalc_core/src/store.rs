//! # Favorites Store
//!
//! Persists the favorites list between sessions:
//! - **Atomic saves**: write to `.tmp`, sync, rename over the real file
//! - **File locking**: keep two sessions from interleaving writes
//! - **Version validation**: refuse files written by an incompatible schema
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "key": "physics_calculator_favorites",
//!   "modified": "2026-01-01T12:00:00Z",
//!   "favorites": [ { "name": "...", "category": "...", "variables": [...] } ]
//! }
//! ```
//!
//! The lock file sits next to the store with a `.lock` suffix and records who
//! holds it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use physcalc_core::formulas::find_by_name;
//! use physcalc_core::store::FavoritesStore;
//! use std::path::Path;
//!
//! let mut store = FavoritesStore::open_locked(Path::new("favorites.json"), "alice")?;
//! let formula = find_by_name("Ohm's Law (V = IR)").unwrap();
//!
//! // Saved to disk before returning
//! store.add(formula)?;
//!
//! // Lock is released when the store is dropped
//! drop(store);
//! # Ok::<(), physcalc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas::Formula;
use crate::session::{Favorite, Favorites};

/// Schema version written to new files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Storage key identifying a favorites file
pub const STORE_KEY: &str = "physics_calculator_favorites";

/// On-disk layout of the favorites file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesFile {
    pub version: String,
    pub key: String,
    pub modified: DateTime<Utc>,
    pub favorites: Vec<Favorite>,
}

impl FavoritesFile {
    pub fn new(favorites: &Favorites) -> Self {
        FavoritesFile {
            version: SCHEMA_VERSION.to_string(),
            key: STORE_KEY.to_string(),
            modified: Utc::now(),
            favorites: favorites.iter().cloned().collect(),
        }
    }
}

// ============================================================================
// Locking
// ============================================================================

/// Lock file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier
    pub user_id: String,
    /// Machine name where the lock was acquired
    pub machine: String,
    /// Process holding the lock
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME").ok().or_else(|| std::env::var("HOST").ok())
    }
}

/// Exclusive lock on a favorites file, released on drop.
///
/// Holds an OS-level lock (fs2) on the lock file and writes [`LockInfo`] into
/// it so a second session can report who has the file.
#[derive(Debug)]
pub struct StoreLock {
    lock_path: PathBuf,
    _lock_file: File,
    pub info: LockInfo,
}

impl StoreLock {
    /// Acquire the lock for `path`.
    ///
    /// A leftover lock file whose owner has exited, or that is more than a day
    /// old, is taken over.
    ///
    /// # Errors
    ///
    /// `FileLocked` when another live session holds the lock.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = sibling_path(path, "lock");
        let info = LockInfo::new(user_id);

        if let Some(existing) = read_lock_info(&lock_path) {
            if !is_lock_stale(&existing) {
                return Err(CalcError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", existing.user_id, existing.machine),
                    existing.locked_at.to_rfc3339(),
                ));
            }
            tracing::info!(path = %lock_path.display(), owner = %existing.user_id, "taking over stale lock");
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string()))?;

        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(path.display().to_string(), "another process", "unknown")
        })?;

        let lock_json = serde_json::to_string_pretty(&info).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        lock_file
            .write_all(lock_json.as_bytes())
            .and_then(|()| lock_file.sync_all())
            .map_err(|e| CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %lock_path.display(), "lock acquired");
        Ok(StoreLock {
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Who holds the lock on `path`, if anyone live does
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock_info(&sibling_path(path, "lock")).filter(|info| !is_lock_stale(info))
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// `favorites.json` -> `favorites.json.<suffix>`
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.{}", e.to_string_lossy(), suffix))
        .unwrap_or_else(|| suffix.to_string());
    path.with_extension(extension)
}

fn read_lock_info(lock_path: &Path) -> Option<LockInfo> {
    let contents = fs::read_to_string(lock_path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// A lock is stale when its process is gone (same machine only) or it is more
/// than 24 hours old.
fn is_lock_stale(info: &LockInfo) -> bool {
    if hostname().is_some_and(|ours| ours == info.machine) && !process_alive(info.pid) {
        return true;
    }
    (Utc::now() - info.locked_at).num_hours() > 24
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{}", pid)).exists()
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}

// ============================================================================
// Load / Save
// ============================================================================

/// Save favorites with atomic write semantics.
///
/// Serializes to a `.tmp` sibling, syncs it, then renames it over `path` so an
/// interrupted save never leaves a half-written file.
pub fn save_favorites(favorites: &Favorites, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(&FavoritesFile::new(favorites))
        .map_err(|e| CalcError::SerializationError { reason: e.to_string() })?;

    let tmp_path = sibling_path(path, "tmp");
    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), count = favorites.len(), "favorites saved");
    Ok(())
}

/// Load favorites from `path`.
///
/// A missing file is an empty list. Stored entries past the cap are dropped
/// with a warning.
///
/// # Errors
///
/// * `FileError` - the file exists but cannot be read
/// * `SerializationError` - invalid JSON, or not a favorites file
/// * `VersionMismatch` - written by an incompatible schema
pub fn load_favorites(path: &Path) -> CalcResult<Favorites> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no favorites file, starting empty");
            return Ok(Favorites::new());
        }
        Err(e) => return Err(CalcError::file_error("read", path.display().to_string(), e.to_string())),
    };

    let file: FavoritesFile = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    if file.key != STORE_KEY {
        return Err(CalcError::SerializationError {
            reason: format!("{} is not a favorites file (key '{}')", path.display(), file.key),
        });
    }
    validate_version(&file.version)?;

    Ok(Favorites::from_entries(file.favorites))
}

/// Major versions must match; for 0.x the file's minor version must not be
/// newer than ours.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [current_major, ..]) if file_major != current_major => Err(mismatch()),
        ([0, file_minor, ..], [0, current_minor, ..]) if file_minor > current_minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}

// ============================================================================
// Store
// ============================================================================

/// Favorites bound to a file. Every successful mutation is saved before it
/// returns; a failed save leaves the in-memory list unchanged.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    favorites: Favorites,
    lock: Option<StoreLock>,
}

impl FavoritesStore {
    /// Load without taking the lock. Suitable for read-only use.
    pub fn open(path: &Path) -> CalcResult<Self> {
        Ok(FavoritesStore {
            path: path.to_path_buf(),
            favorites: load_favorites(path)?,
            lock: None,
        })
    }

    /// Take the lock, then load.
    pub fn open_locked(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock = StoreLock::acquire(path, user_id)?;
        Ok(FavoritesStore {
            path: path.to_path_buf(),
            favorites: load_favorites(path)?,
            lock: Some(lock),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn add(&mut self, formula: &Formula) -> CalcResult<bool> {
        self.update(|favorites| favorites.add(formula))
    }

    pub fn remove(&mut self, name: &str) -> CalcResult<bool> {
        self.update(|favorites| Ok(favorites.remove(name)))
    }

    /// Returns whether the formula is a favorite afterwards.
    pub fn toggle(&mut self, formula: &Formula) -> CalcResult<bool> {
        self.update(|favorites| favorites.toggle(formula))
    }

    /// Write the current list to disk.
    pub fn save(&self) -> CalcResult<()> {
        save_favorites(&self.favorites, &self.path)
    }

    fn update(&mut self, change: impl FnOnce(&mut Favorites) -> CalcResult<bool>) -> CalcResult<bool> {
        let mut next = self.favorites.clone();
        let result = change(&mut next)?;
        if next != self.favorites {
            save_favorites(&next, &self.path)?;
            self.favorites = next;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::list;
    use std::env::temp_dir;

    fn temp_store_path(name: &str) -> PathBuf {
        temp_dir().join(format!("physcalc_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_sibling_paths() {
        let path = Path::new("/path/to/favorites.json");
        assert_eq!(sibling_path(path, "lock"), Path::new("/path/to/favorites.json.lock"));
        assert_eq!(sibling_path(Path::new("/path/to/favs"), "tmp"), Path::new("/path/to/favs.tmp"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let path = temp_store_path("missing");
        let _ = fs::remove_file(&path);
        assert!(load_favorites(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_store_path("roundtrip");
        let mut favorites = Favorites::new();
        favorites.add(&list()[3]).unwrap();
        favorites.add(&list()[40]).unwrap();

        save_favorites(&favorites, &path).unwrap();
        assert!(!sibling_path(&path, "tmp").exists());

        let loaded = load_favorites(&path).unwrap();
        assert_eq!(loaded, favorites);

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["key"], STORE_KEY);
        assert_eq!(raw["version"], SCHEMA_VERSION);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_truncates_oversized_list() {
        let path = temp_store_path("oversized");
        let file = FavoritesFile {
            version: SCHEMA_VERSION.to_string(),
            key: STORE_KEY.to_string(),
            modified: Utc::now(),
            favorites: list()[..7].iter().map(Favorite::from_formula).collect(),
        };
        fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

        let loaded = load_favorites(&path).unwrap();
        assert_eq!(loaded.len(), crate::session::MAX_FAVORITES);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_foreign_file() {
        let path = temp_store_path("foreign");
        fs::write(&path, r#"{"version":"0.1.0","key":"something_else","modified":"2026-01-01T00:00:00Z","favorites":[]}"#)
            .unwrap();
        assert_eq!(load_favorites(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        fs::write(&path, "not json").unwrap();
        assert_eq!(load_favorites(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_lock_acquire_and_release() {
        let path = temp_store_path("lock");
        let lock = StoreLock::acquire(&path, "alice").unwrap();
        assert_eq!(lock.info.user_id, "alice");

        let lock_path = sibling_path(&path, "lock");
        assert!(lock_path.exists());
        assert_eq!(StoreLock::check(&path).map(|i| i.user_id), Some("alice".to_string()));

        let err = StoreLock::acquire(&path, "bob").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.error_code(), "FILE_LOCKED");

        drop(lock);
        assert!(!lock_path.exists());
        assert!(StoreLock::check(&path).is_none());
    }

    #[test]
    fn test_stale_lock_is_taken_over() {
        let path = temp_store_path("stale");
        let old = LockInfo {
            user_id: "carol".to_string(),
            machine: "elsewhere".to_string(),
            pid: 1,
            locked_at: Utc::now() - chrono::Duration::hours(48),
        };
        fs::write(sibling_path(&path, "lock"), serde_json::to_string(&old).unwrap()).unwrap();

        let lock = StoreLock::acquire(&path, "dave").unwrap();
        assert_eq!(lock.info.user_id, "dave");
    }

    #[test]
    fn test_store_saves_every_mutation() {
        let path = temp_store_path("store");
        let _ = fs::remove_file(&path);

        let mut store = FavoritesStore::open_locked(&path, "erin").unwrap();
        assert!(store.is_locked());
        assert!(store.add(&list()[0]).unwrap());
        assert!(store.toggle(&list()[1]).unwrap());
        assert!(store.remove(list()[0].name).unwrap());
        assert!(!store.remove(list()[0].name).unwrap());
        drop(store);

        let reopened = FavoritesStore::open(&path).unwrap();
        let names: Vec<_> = reopened.favorites().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec![list()[1].name]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_store_full_leaves_file_untouched() {
        let path = temp_store_path("full");
        let _ = fs::remove_file(&path);

        let mut store = FavoritesStore::open(&path).unwrap();
        for formula in &list()[..5] {
            store.add(formula).unwrap();
        }
        let before = fs::read_to_string(&path).unwrap();
        assert!(store.add(&list()[5]).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(store.favorites().len(), 5);

        let _ = fs::remove_file(&path);
    }
}

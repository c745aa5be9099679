//! # File I/O Module
//!
//! Project and report files with:
//! - **Atomic saves**: write to a `.tmp` sibling, fsync, rename
//! - **File locking**: keep two designers off the same project on a share
//! - **Version validation**: refuse files written by a newer schema
//!
//! ## File Format
//!
//! Projects are saved as `.scn` files containing JSON. Lock files sit next
//! to them as `.scn.lock` and record who holds the lock. Sweep reports are
//! plain JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scant_core::file_io::{save_project, load_project, FileLock};
//! use scant_core::project::DesignProject;
//! use std::path::Path;
//!
//! let project = DesignProject::demo();
//! let path = Path::new("workboat.scn");
//!
//! let lock = FileLock::acquire(path, "designer@yard.example").unwrap();
//! save_project(&project, path).unwrap();
//! drop(lock);
//!
//! let loaded = load_project(path).unwrap();
//! assert_eq!(loaded.meta.job_id, "DEMO-001");
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{ScantError, ScantResult};
use crate::optimizer::SweepOutcome;
use crate::project::{DesignProject, SCHEMA_VERSION};

/// Lock holders older than this are ignored
const STALE_LOCK_HOURS: i64 = 24;

/// Lock file metadata stored in .scn.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    pub machine: String,
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    /// Held by a process that has exited, or older than a day
    fn is_stale(&self) -> bool {
        if hostname().is_some_and(|h| h == self.machine) && !process_alive(self.pid) {
            return true;
        }
        (Utc::now() - self.locked_at).num_hours() > STALE_LOCK_HOURS
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    fs::metadata(format!("/proc/{}", pid)).is_ok()
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// Exclusive lock on a project file, released on drop.
///
/// Holds an OS-level lock (fs2) on the `.lock` sidecar and writes the
/// holder's details into it so other users can see who has the file.
pub struct FileLock {
    project_path: PathBuf,
    lock_path: PathBuf,
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire the lock or fail with `FileLocked` naming the holder.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> ScantResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if let Ok(existing) = read_lock_info(&lock_path) {
            if !existing.is_stale() {
                return Err(ScantError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", existing.user_id, existing.machine),
                    existing.locked_at.to_rfc3339(),
                ));
            }
            log::warn!(
                "taking over stale lock on {} held by {}",
                path.display(),
                existing.user_id
            );
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| io_error("create lock", &lock_path, e))?;

        lock_file.try_lock_exclusive().map_err(|_| {
            ScantError::file_locked(path.display().to_string(), "another process", "unknown")
        })?;

        // Only the holder of the OS lock may clear the previous details
        lock_file
            .set_len(0)
            .map_err(|e| io_error("truncate lock", &lock_path, e))?;
        let json = to_json(&info)?;
        lock_file
            .write_all(json.as_bytes())
            .map_err(|e| io_error("write lock", &lock_path, e))?;
        lock_file
            .sync_all()
            .map_err(|e| io_error("sync lock", &lock_path, e))?;

        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Current holder, if the file is locked by someone live
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock_info(&lock_path_for(path))
            .ok()
            .filter(|info| !info.is_stale())
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// `project.scn` -> `project.scn.lock`
fn lock_path_for(project_path: &Path) -> PathBuf {
    with_suffix(project_path, "lock")
}

/// Append `suffix` to the existing extension
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut out = path.to_path_buf();
    let extension = path
        .extension()
        .map(|e| format!("{}.{}", e.to_string_lossy(), suffix))
        .unwrap_or_else(|| suffix.to_string());
    out.set_extension(extension);
    out
}

fn io_error(operation: &str, path: &Path, e: std::io::Error) -> ScantError {
    ScantError::file_error(operation, path.display().to_string(), e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> ScantResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| ScantError::SerializationError {
        reason: e.to_string(),
    })
}

fn read_to_string(path: &Path, operation: &str) -> ScantResult<String> {
    let mut file = File::open(path).map_err(|e| io_error(operation, path, e))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| io_error(operation, path, e))?;
    Ok(contents)
}

fn read_lock_info(lock_path: &Path) -> ScantResult<LockInfo> {
    let contents = read_to_string(lock_path, "read lock")?;
    serde_json::from_str(&contents).map_err(|e| ScantError::SerializationError {
        reason: e.to_string(),
    })
}

/// Write `contents` to `path` through a synced temporary file and a rename.
fn write_atomic(path: &Path, contents: &str) -> ScantResult<()> {
    let tmp_path = with_suffix(path, "tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| io_error("create temp file", &tmp_path, e))?;
    tmp_file
        .write_all(contents.as_bytes())
        .map_err(|e| io_error("write temp file", &tmp_path, e))?;
    tmp_file
        .sync_all()
        .map_err(|e| io_error("sync temp file", &tmp_path, e))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        io_error("rename to final", path, e)
    })
}

/// Save a project atomically.
///
/// The modified timestamp is written as it is; call
/// [`DesignProject::touch`] first to record an edit.
pub fn save_project(project: &DesignProject, path: &Path) -> ScantResult<()> {
    write_atomic(path, &to_json(project)?)?;
    log::debug!("saved project {} to {}", project.meta.job_id, path.display());
    Ok(())
}

/// Load a project and check its schema version.
///
/// # Errors
///
/// * `VersionMismatch` - written by an incompatible schema
/// * `SerializationError` - not a valid project document
/// * `FileError` - the file cannot be read
pub fn load_project(path: &Path) -> ScantResult<DesignProject> {
    let contents = read_to_string(path, "open")?;
    let project: DesignProject =
        serde_json::from_str(&contents).map_err(|e| ScantError::SerializationError {
            reason: format!("Invalid project in {}: {}", path.display(), e),
        })?;
    validate_version(&project.meta.version)?;
    Ok(project)
}

/// Load a project along with the current lock holder, if any.
pub fn load_project_with_lock_check(path: &Path) -> ScantResult<(DesignProject, Option<LockInfo>)> {
    let project = load_project(path)?;
    Ok((project, FileLock::check(path)))
}

/// Save a sweep outcome as JSON, atomically.
pub fn save_sweep_report(outcome: &SweepOutcome, path: &Path) -> ScantResult<()> {
    write_atomic(path, &to_json(outcome)?)?;
    log::debug!("saved sweep {} to {}", outcome.run_id, path.display());
    Ok(())
}

/// Same major version; for 0.x the file's minor may not be newer.
fn validate_version(file_version: &str) -> ScantResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file = parse(file_version);
    let current = parse(SCHEMA_VERSION);

    let compatible = match (file.as_slice(), current.as_slice()) {
        ([f_major, rest @ ..], [c_major, c_rest @ ..]) if f_major == c_major => {
            *c_major != 0 || rest.first().zip(c_rest.first()).map_or(true, |(f, c)| f <= c)
        }
        _ => false,
    };

    if compatible {
        Ok(())
    } else {
        Err(ScantError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::CountRange;
    use std::env::temp_dir;

    fn temp_path(name: &str, ext: &str) -> PathBuf {
        temp_dir().join(format!("scant_test_{}_{}.{}", name, std::process::id(), ext))
    }

    #[test]
    fn test_lock_path_generation() {
        let lock_path = lock_path_for(Path::new("/path/to/project.scn"));
        assert_eq!(lock_path, Path::new("/path/to/project.scn.lock"));
        assert_eq!(lock_path_for(Path::new("bare")), Path::new("bare.lock"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip", "scn");
        let project = DesignProject::demo();
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta, project.meta);
        assert_eq!(loaded.sections, project.sections);
        assert!(!with_suffix(&path, "tmp").exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_path("newer", "scn");
        let mut project = DesignProject::demo();
        project.meta.version = "0.9.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_project(&temp_path("missing", "scn")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("garbage", "scn");
        fs::write(&path, "{ not json").unwrap();
        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_path("lock", "scn");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "designer@yard.example").unwrap();
        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());
        assert_eq!(lock.project_path(), path.as_path());

        let (_, holder) = {
            save_project(&DesignProject::demo(), &path).unwrap();
            load_project_with_lock_check(&path).unwrap()
        };
        assert_eq!(holder.unwrap().user_id, "designer@yard.example");

        drop(lock);
        assert!(!lock_path.exists());
        assert!(FileLock::check(&path).is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_lost_lock_race_keeps_holder_details() {
        let path = temp_path("race", "scn");
        let lock_path = lock_path_for(&path);

        // A holder mid-takeover: the OS lock is held but the details still
        // describe the previous, stale holder.
        let mut info = LockInfo::new("holder@yard.example");
        info.locked_at = Utc::now() - chrono::Duration::hours(STALE_LOCK_HOURS + 1);
        fs::write(&lock_path, to_json(&info).unwrap()).unwrap();
        let holder = OpenOptions::new().read(true).write(true).open(&lock_path).unwrap();
        holder.try_lock_exclusive().unwrap();

        let err = FileLock::acquire(&path, "late@yard.example").err().unwrap();
        assert_eq!(err.error_code(), "FILE_LOCKED");
        let kept = read_lock_info(&lock_path).unwrap();
        assert_eq!(kept.user_id, "holder@yard.example");

        drop(holder);
        let _ = fs::remove_file(&lock_path);
    }

    #[test]
    fn test_stale_lock_by_age() {
        let mut info = LockInfo::new("old@yard.example");
        info.locked_at = Utc::now() - chrono::Duration::hours(STALE_LOCK_HOURS + 1);
        assert!(info.is_stale());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_save_sweep_report() {
        let mut project = DesignProject::demo();
        project.sweep.stiffener_counts = CountRange::new(0, 1);
        project.sweep.extrusions = vec!["Flat Bar 50 x 6".to_string()];
        let outcome = project.run_sweep().unwrap();

        let path = temp_path("sweep", "json");
        save_sweep_report(&outcome, &path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["run_id"], outcome.run_id.to_string());
        assert_eq!(json["records"].as_array().unwrap().len(), outcome.records.len());

        let _ = fs::remove_file(&path);
    }
}

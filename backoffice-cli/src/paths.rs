//! Where the CLI keeps its log files.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "backoffice";
const APPLICATION: &str = "backoffice";

/// Name of the log file of the running process.
const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Per-user cache directory, e.g. `~/.cache/backoffice` on Linux.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Log file of the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under its timestamp and prune the archive.
/// Runs before the logger opens a fresh `latest.log`.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache, MAX_OLD_LOGS);
    }
}

fn rotate_logs_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f");
        let _ = fs::rename(&latest, dir.join(format!("{}.log", timestamp)));
    }
    cleanup_old_logs(dir, keep);
}

/// Delete archived logs beyond the newest `keep`.
fn cleanup_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // By modification time, name breaks ties.
    logs.sort_by_key(|e| (e.metadata().and_then(|m| m.modified()).ok(), e.file_name()));

    let excess = logs.len().saturating_sub(keep);
    for entry in &logs[..excess] {
        let _ = fs::remove_file(entry.path());
    }
}

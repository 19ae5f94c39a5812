//! The settings-file synchronizer: one idempotent generation pass per project.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::encode::encode_relative_path;
use crate::error::AppError;
use crate::scan::discover_skip_folders;
use crate::sidecar::{contains_all, render, sidecar_path};

/// Result of a synchronization pass for one project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Generation is disabled; no filesystem access was performed.
    Disabled,
    /// The existing sidecar already lists every required identifier.
    UpToDate { path: PathBuf },
    /// The sidecar was (re)written wholesale.
    Written { path: PathBuf, entries: usize },
}

/// Read-only freshness classification used by check mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    UpToDate,
    /// Sidecar exists but misses at least one required identifier.
    Stale,
    /// Sidecar is absent while the qualifying set is non-empty.
    Missing,
}

/// Bring the sidecar of `project_file` in line with the current directory
/// layout.
///
/// The project file itself is never read and need not exist; only its parent
/// directory is scanned. With `force` the freshness check is skipped and the
/// sidecar is always rewritten. The write is a plain full overwrite with no
/// atomic-rename protection; an interrupted write leaves a truncated sidecar,
/// which the next run regenerates.
pub fn synchronize(
    project_file: &Path,
    config: &GeneratorConfig,
    force: bool,
) -> Result<SyncOutcome, AppError> {
    if !config.enabled {
        return Ok(SyncOutcome::Disabled);
    }

    let project_dir = resolve_project_dir(project_file)?;
    let identifiers = encoded_identifiers(project_dir, config)?;
    let settings_path = sidecar_path(project_file);

    if !force && settings_path.is_file() {
        let current_content = fs::read_to_string(&settings_path)?;
        if contains_all(&current_content, &identifiers) {
            return Ok(SyncOutcome::UpToDate { path: settings_path });
        }
    }

    let entries = identifiers.len();
    fs::write(&settings_path, render(&identifiers))?;
    Ok(SyncOutcome::Written { path: settings_path, entries })
}

/// Classify the sidecar of `project_file` without writing anything.
pub fn status(project_file: &Path, config: &GeneratorConfig) -> Result<SyncStatus, AppError> {
    let project_dir = resolve_project_dir(project_file)?;
    let identifiers = encoded_identifiers(project_dir, config)?;
    let settings_path = sidecar_path(project_file);

    if settings_path.is_file() {
        let current_content = fs::read_to_string(&settings_path)?;
        if contains_all(&current_content, &identifiers) {
            Ok(SyncStatus::UpToDate)
        } else {
            Ok(SyncStatus::Stale)
        }
    } else if identifiers.is_empty() {
        Ok(SyncStatus::UpToDate)
    } else {
        Ok(SyncStatus::Missing)
    }
}

fn resolve_project_dir(project_file: &Path) -> Result<&Path, AppError> {
    project_file.parent().filter(|parent| !parent.as_os_str().is_empty()).ok_or_else(|| {
        AppError::config_error(format!(
            "failed to resolve project directory of '{}'",
            project_file.display()
        ))
    })
}

fn encoded_identifiers(
    project_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<String>, AppError> {
    let folders = discover_skip_folders(project_dir, config)?;
    Ok(folders.iter().map(|relative| encode_relative_path(relative)).collect())
}

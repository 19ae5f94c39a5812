//! nsskip: Keep ReSharper `.DotSettings` sidecars in sync with the
//! namespace-folder layout of Unity-style C# projects.
//!
//! Each project file gets a sidecar at `<project>.DotSettings` listing the
//! directories ReSharper should not expect to contribute namespace segments.
//! Generation is idempotent: a sidecar that already lists every required
//! entry is left untouched.

pub mod config;
pub mod encode;
pub mod error;
pub mod scan;
pub mod sidecar;
pub mod sync;

use std::path::{Path, PathBuf};

pub use config::GeneratorConfig;
pub use error::AppError;
pub use sync::{SyncOutcome, SyncStatus};

/// Freshness report for a batch of project files.
#[derive(Debug)]
pub struct CheckReport {
    /// Per-project status, in input order.
    pub statuses: Vec<(PathBuf, SyncStatus)>,
}

impl CheckReport {
    /// True when every checked sidecar is up to date.
    pub fn all_up_to_date(&self) -> bool {
        self.statuses.iter().all(|(_, status)| *status == SyncStatus::UpToDate)
    }
}

/// Synchronize the sidecar of every given project file.
///
/// Prints a diagnostic line per written file; up-to-date and disabled
/// projects stay silent.
pub fn sync_projects(
    projects: &[PathBuf],
    config: &GeneratorConfig,
    force: bool,
) -> Result<Vec<SyncOutcome>, AppError> {
    let mut outcomes = Vec::with_capacity(projects.len());
    for project in projects {
        let outcome = sync::synchronize(project, config, force)?;
        if let SyncOutcome::Written { path, .. } = &outcome {
            println!("Generated ReSharper settings file {}", display_name(path));
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Check the sidecar of every given project file without writing.
pub fn check_projects(
    projects: &[PathBuf],
    config: &GeneratorConfig,
) -> Result<CheckReport, AppError> {
    let mut statuses = Vec::with_capacity(projects.len());
    for project in projects {
        let status = sync::status(project, config)?;
        let label = match status {
            SyncStatus::UpToDate => "up to date",
            SyncStatus::Stale => "stale",
            SyncStatus::Missing => "missing",
        };
        println!("{}: {label}", display_name(&sidecar::sidecar_path(project)));
        statuses.push((project.clone(), status));
    }
    Ok(CheckReport { statuses })
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.display().to_string(), |name| {
        name.to_string_lossy().into_owned()
    })
}

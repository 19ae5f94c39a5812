//! Discovery of directories that need a namespace-folder-to-skip entry.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::encode::encode_relative_path;
use crate::error::AppError;

/// Enumerate the directories under `project_dir` that qualify for a sidecar
/// entry, as paths relative to `project_dir`.
///
/// A directory qualifies when its subtree contains at least one source file
/// and its immediate children contain no sub-project marker file. The marker
/// check is per-directory: descendants of a marker directory are judged on
/// their own contents. The project directory itself is never a candidate.
///
/// The result is sorted by encoded identifier so output is deterministic.
pub fn discover_skip_folders(
    project_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, AppError> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    let mut has_source: HashSet<PathBuf> = HashSet::new();
    let mut marker_roots: HashSet<PathBuf> = HashSet::new();

    for entry in WalkDir::new(project_dir) {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            if entry.depth() > 0 {
                candidates.push(path.to_path_buf());
            }
            continue;
        }

        if has_extension(path, &config.source_extension) {
            mark_ancestors(path, project_dir, &mut has_source);
        }
        if config.marker_extensions.iter().any(|marker| has_extension(path, marker))
            && let Some(parent) = path.parent()
        {
            marker_roots.insert(parent.to_path_buf());
        }
    }

    let mut qualifying: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|dir| has_source.contains(dir) && !marker_roots.contains(dir))
        .map(|dir| {
            dir.strip_prefix(project_dir)
                .expect("walked path must be under the project directory")
                .to_path_buf()
        })
        .collect();

    qualifying.sort_by_key(|relative| encode_relative_path(relative));
    Ok(qualifying)
}

/// Mark every directory between a source file and the project root as
/// containing source, exclusive of the project root itself.
fn mark_ancestors(file_path: &Path, project_dir: &Path, has_source: &mut HashSet<PathBuf>) {
    let mut current = file_path.parent();
    while let Some(dir) = current {
        if dir == project_dir {
            break;
        }
        // Ancestors above an already-marked directory are marked too.
        if !has_source.insert(dir.to_path_buf()) {
            break;
        }
        current = dir.parent();
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|actual| actual.eq_ignore_ascii_case(extension))
}

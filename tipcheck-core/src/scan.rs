//! Content file discovery.
//!
//! Two strategies produce the same logical set of files:
//! - Ask a [`FileIndex`] (normally git) for tracked files. Ignored build
//!   output and dependencies never show up there.
//! - Walk the tree, pruning hidden directories and `node_modules` early via
//!   `WalkDir::filter_entry`.
//!
//! The index is tried first; a recoverable index error falls back to the walk.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{TipcheckError, TipcheckResult};

/// Default content file extension.
pub const DEFAULT_EXTENSION: &str = "mdx";

/// Directories always skipped by the walk (besides hidden ones).
const EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// A source of tracked file paths.
pub trait FileIndex {
    /// List tracked files under `root` with the given extension.
    ///
    /// Paths are relative to `root` and use `/` separators.
    fn tracked_files(&self, root: &Path, extension: &str) -> TipcheckResult<Vec<String>>;
}

/// File index backed by `git ls-files`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIndex;

impl FileIndex for GitIndex {
    fn tracked_files(&self, root: &Path, extension: &str) -> TipcheckResult<Vec<String>> {
        let pathspec = format!("*.{}", extension);
        let output = Command::new("git")
            .args(["ls-files", "-z", "--", &pathspec])
            .current_dir(root)
            .output()
            .map_err(|e| TipcheckError::index(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TipcheckError::index(format!(
                "git ls-files exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(output
            .stdout
            .split(|b| *b == 0)
            .filter(|entry| !entry.is_empty())
            .map(|entry| String::from_utf8_lossy(entry).into_owned())
            .collect())
    }
}

/// File index that is never available. Forces the directory walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndex;

impl FileIndex for NoIndex {
    fn tracked_files(&self, _root: &Path, _extension: &str) -> TipcheckResult<Vec<String>> {
        Err(TipcheckError::index("file index disabled"))
    }
}

/// Which strategy produced a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    Git,
    Walk,
}

/// Ordered content files to scan.
#[derive(Debug, Clone)]
pub struct ContentListing {
    /// Root-relative paths, `/`-separated
    pub files: Vec<String>,
    pub source: ListingSource,
}

/// Checks if a directory entry should be pruned. The walk root itself is never pruned.
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || excludes.contains(name))
}

/// Join path components with `/` regardless of platform.
fn to_slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walks `root` for files with `extension`, skipping hidden directories,
/// `node_modules`, and any extra directory names in `excludes`.
///
/// Returns root-relative paths sorted by byte order, which is the order
/// `git ls-files` prints.
pub fn walk_content_files(root: &Path, extension: &str, excludes: &[String]) -> Result<Vec<String>> {
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().map(String::as_str))
        .collect();
    let suffix = format!(".{}", extension);

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &all_excludes))
    {
        let entry =
            entry.with_context(|| format!("Failed to walk content files under {}", root.display()))?;
        let path = entry.path();
        let matches_ext = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&suffix));
        if entry.file_type().is_file() && matches_ext {
            let rel = path.strip_prefix(root).unwrap_or(path);
            files.push(to_slash_path(rel));
        }
    }

    files.sort();
    Ok(files)
}

/// Produces the ordered list of content files to scan.
///
/// Tries `index` first and falls back to [`walk_content_files`] when the
/// index is unavailable. Non-recoverable index errors are returned as is.
pub fn enumerate_content(
    root: &Path,
    extension: &str,
    excludes: &[String],
    index: &dyn FileIndex,
) -> Result<ContentListing> {
    match index.tracked_files(root, extension) {
        Ok(files) => {
            debug!(count = files.len(), "listed content files from index");
            Ok(ContentListing {
                files,
                source: ListingSource::Git,
            })
        }
        Err(e) if !e.is_recoverable() => Err(e.into()),
        Err(e) => {
            warn!(reason = %e, "file index unavailable, walking the tree");
            let files = walk_content_files(root, extension, excludes)?;
            debug!(count = files.len(), "listed content files by walking");
            Ok(ContentListing {
                files,
                source: ListingSource::Walk,
            })
        }
    }
}

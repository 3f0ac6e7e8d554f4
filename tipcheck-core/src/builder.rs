//! Builder pattern API for tooltip validation.
//!
//! ```rust,ignore
//! use tipcheck_core::prelude::*;
//!
//! let report = Tipcheck::new(".")
//!     .definitions("snippets/tooltips.jsx")
//!     .use_git(true)
//!     .run()?;
//!
//! std::process::exit(report.exit_code());
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::check::TooltipChecker;
use crate::config::TipcheckConfig;
use crate::definitions::{load_definitions, DEFAULT_DEFINITIONS_PATH, DEFAULT_SUFFIX};
use crate::error::IoResultExt;
use crate::extract::TooltipMatcher;
use crate::report::CheckReport;
use crate::scan::{enumerate_content, FileIndex, GitIndex, NoIndex, DEFAULT_EXTENSION};

/// Builder for configuring a validation run.
#[derive(Debug, Clone)]
pub struct Tipcheck {
    /// Root the definitions path and content paths are relative to
    root: PathBuf,

    /// Definitions module, relative to root
    definitions: String,

    /// Specifier used in import statements; derived from `definitions` when unset
    import_specifier: Option<String>,

    /// Export name suffix marking a tooltip
    suffix: String,

    /// Content file extension
    extension: String,

    /// Extra directory names skipped by the walk fallback
    excluded_dirs: Vec<String>,

    /// Ask git for tracked files before walking
    use_git: bool,
}

impl Tipcheck {
    /// Create a new run builder for the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            definitions: DEFAULT_DEFINITIONS_PATH.to_string(),
            import_specifier: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            excluded_dirs: Vec::new(),
            use_git: true,
        }
    }

    /// Apply every value set in a config file.
    pub fn with_config(mut self, config: &TipcheckConfig) -> Self {
        if let Some(definitions) = &config.definitions {
            self.definitions = definitions.clone();
        }
        if let Some(specifier) = &config.import_specifier {
            self.import_specifier = Some(specifier.clone());
        }
        if let Some(suffix) = &config.suffix {
            self.suffix = suffix.clone();
        }
        if let Some(extension) = &config.extension {
            self = self.extension(extension.clone());
        }
        if let Some(exclude) = &config.exclude {
            self.excluded_dirs.extend(exclude.iter().cloned());
        }
        if let Some(use_git) = config.use_git {
            self.use_git = use_git;
        }
        self
    }

    /// Set the definitions module path, relative to the root.
    pub fn definitions(mut self, path: impl Into<String>) -> Self {
        self.definitions = path.into();
        self
    }

    /// Set the module specifier content files import from.
    pub fn import_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.import_specifier = Some(specifier.into());
        self
    }

    /// Set the export name suffix marking a tooltip.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the content file extension (without the dot).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Add directories to skip when walking the tree.
    pub fn exclude_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Enable or disable the git file index.
    pub fn use_git(mut self, enabled: bool) -> Self {
        self.use_git = enabled;
        self
    }

    /// Specifier content files must import from.
    pub fn resolved_import_specifier(&self) -> String {
        self.import_specifier
            .clone()
            .unwrap_or_else(|| format!("/{}", self.definitions.trim_start_matches('/')))
    }

    /// Run with the configured file index.
    pub fn run(&self) -> Result<CheckReport> {
        if self.use_git {
            self.run_with_index(&GitIndex)
        } else {
            self.run_with_index(&NoIndex)
        }
    }

    /// Run with an explicit file index.
    pub fn run_with_index(&self, index: &dyn FileIndex) -> Result<CheckReport> {
        // 1. Definitions (fatal if missing)
        let definitions = load_definitions(&self.root, &self.definitions, &self.suffix)?;
        info!(
            count = definitions.len(),
            path = %self.definitions,
            "loaded tooltip definitions"
        );

        // 2. Content files
        let listing = enumerate_content(&self.root, &self.extension, &self.excluded_dirs, index)
            .context("Failed to enumerate content files")?;
        info!(
            count = listing.files.len(),
            source = ?listing.source,
            "enumerated content files"
        );

        // 3. Extract and cross-reference, file by file
        let import_specifier = self.resolved_import_specifier();
        let matcher = TooltipMatcher::new(&definitions, &import_specifier)?;
        let mut checker = TooltipChecker::new(&definitions);
        for file in &listing.files {
            let path = self.root.join(file);
            // Invalid UTF-8 decodes lossily; only real read failures are fatal.
            let bytes = fs::read(&path).with_path(&path)?;
            let content = String::from_utf8_lossy(&bytes);
            let tooltips = matcher.scan(&content);
            debug!(
                file = %file,
                imported = tooltips.imported.len(),
                used = tooltips.used.len(),
                "scanned content file"
            );
            checker.check_file(file, &tooltips);
        }
        let outcome = checker.finish();

        info!(
            files_using = outcome.files_using,
            warnings = outcome.warnings.len(),
            errors = outcome.errors.len(),
            "tooltip check complete"
        );

        Ok(CheckReport {
            definitions_path: self.definitions.clone(),
            definition_count: definitions.len(),
            content_kind: self.extension.to_uppercase(),
            files_scanned: listing.files.len(),
            files_using_tooltips: outcome.files_using,
            listing_source: listing.source,
            import_specifier,
            warnings: outcome.warnings,
            errors: outcome.errors,
        })
    }
}

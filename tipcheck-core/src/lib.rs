//! tipcheck-core: tooltip import validation for MDX documentation trees
//!
//! A documentation site keeps its tooltip components in one definitions
//! module (`snippets/tooltips.jsx`). Content pages import the tooltips they
//! render. This library checks that every rendered tooltip is imported in the
//! same file, and reports unused or unknown imports.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tipcheck_core::prelude::*;
//!
//! let report = Tipcheck::new(".").run()?;
//! print_plain(&report);
//! std::process::exit(report.exit_code());
//! ```
//!
//! # Module Organization
//!
//! - [`definitions`]: Loads the set of known tooltip names
//! - [`scan`]: Content file discovery (git index with a directory-walk fallback)
//! - [`extract`]: Per-file import and usage extraction
//! - [`check`]: Cross-referencing into findings
//! - [`report`]: Plain-text and JSON output
//! - [`builder`]: Fluent builder that runs the whole pipeline
//! - [`config`]: Optional `tipcheck.toml`
//! - [`error`]: Typed error handling

pub mod builder;
pub mod check;
pub mod config;
pub mod definitions;
pub mod error;
pub mod extract;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod scan;

// Error types
pub use error::{IoResultExt, TipcheckError, TipcheckResult};

// Builder API
pub use builder::Tipcheck;

// Configuration
pub use config::{load_config, OutputConfig, TipcheckConfig, CONFIG_FILE};

// Definitions
pub use definitions::{
    load_definitions, parse_definitions, DefinitionSet, DEFAULT_DEFINITIONS_PATH, DEFAULT_SUFFIX,
};

// Extraction
pub use extract::{FileTooltips, NameSet, TooltipMatcher};

// Cross-referencing
pub use check::{check_files, CheckOutcome, Finding, FindingKind, Severity, TooltipChecker};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print_json, print_plain, render_plain, write_plain, CheckReport};

// File discovery
pub use scan::{
    enumerate_content, walk_content_files, ContentListing, FileIndex, GitIndex, ListingSource,
    NoIndex, DEFAULT_EXTENSION,
};

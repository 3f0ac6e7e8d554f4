//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use tipcheck_core::prelude::*;
//! ```

pub use crate::error::{TipcheckError, TipcheckResult};

pub use crate::builder::Tipcheck;

pub use crate::config::{load_config, TipcheckConfig};

pub use crate::check::{Finding, FindingKind, Severity};

pub use crate::report::{print_json, print_plain, CheckReport};

pub use crate::scan::{FileIndex, GitIndex, NoIndex};

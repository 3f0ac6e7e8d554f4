//! Cross-referencing of per-file imports and usages.
//!
//! Rules, applied per file:
//! 1. Used but not imported: error
//! 2. Imported but not used: warning
//! 3. Imported but not defined: error
//!
//! An import of an undefined name triggers both 2 and 3, since usages are only
//! detected for defined names.

use serde::Serialize;

use crate::definitions::DefinitionSet;
use crate::extract::FileTooltips;

/// How serious a finding is. Only errors fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Classification of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// Rendered in a file that does not import it
    MissingImport,
    /// Imported in a file that never renders it
    UnusedImport,
    /// Imported but absent from the definitions module
    InvalidImport,
}

impl FindingKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::UnusedImport => Severity::Warning,
            Self::MissingImport | Self::InvalidImport => Severity::Error,
        }
    }
}

/// A single discrepancy between usage, imports, and definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    pub tooltip: String,
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Aggregated result of checking every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Files that import or render at least one tooltip
    pub files_using: usize,
    /// Warning findings, in file order
    pub warnings: Vec<Finding>,
    /// Error findings, in file order
    pub errors: Vec<Finding>,
}

/// Accumulates findings file by file against one definition set.
pub struct TooltipChecker<'a> {
    definitions: &'a DefinitionSet,
    outcome: CheckOutcome,
}

impl<'a> TooltipChecker<'a> {
    pub fn new(definitions: &'a DefinitionSet) -> Self {
        Self {
            definitions,
            outcome: CheckOutcome::default(),
        }
    }

    fn finding(&self, file: &str, tooltip: &str, kind: FindingKind) -> Finding {
        let message = match kind {
            FindingKind::MissingImport => format!("Tooltip \"{}\" is used but not imported", tooltip),
            FindingKind::UnusedImport => format!("Tooltip \"{}\" is imported but not used", tooltip),
            FindingKind::InvalidImport => format!(
                "Tooltip \"{}\" does not exist in {}",
                tooltip,
                self.definitions.source()
            ),
        };
        Finding {
            file: file.to_string(),
            tooltip: tooltip.to_string(),
            kind,
            message,
        }
    }

    fn push(&mut self, finding: Finding) {
        match finding.severity() {
            Severity::Warning => self.outcome.warnings.push(finding),
            Severity::Error => self.outcome.errors.push(finding),
        }
    }

    /// Record the findings for one file. Files with no imports and no usages are skipped.
    pub fn check_file(&mut self, file: &str, tooltips: &FileTooltips) {
        if tooltips.is_empty() {
            return;
        }
        self.outcome.files_using += 1;

        for name in tooltips.used.iter() {
            if !tooltips.imported.contains(name) {
                let finding = self.finding(file, name, FindingKind::MissingImport);
                self.push(finding);
            }
        }

        for name in tooltips.imported.iter() {
            if !tooltips.used.contains(name) {
                let finding = self.finding(file, name, FindingKind::UnusedImport);
                self.push(finding);
            }
        }

        for name in tooltips.imported.iter() {
            if !self.definitions.contains(name) {
                let finding = self.finding(file, name, FindingKind::InvalidImport);
                self.push(finding);
            }
        }
    }

    pub fn finish(self) -> CheckOutcome {
        self.outcome
    }
}

/// Check a sequence of `(file, tooltips)` pairs in order.
pub fn check_files<'f, I>(definitions: &DefinitionSet, files: I) -> CheckOutcome
where
    I: IntoIterator<Item = (&'f str, &'f FileTooltips)>,
{
    let mut checker = TooltipChecker::new(definitions);
    for (file, tooltips) in files {
        checker.check_file(file, tooltips);
    }
    checker.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::NameSet;

    fn defs() -> DefinitionSet {
        DefinitionSet::from_names("snippets/tooltips.jsx", ["AlphaTooltip", "BetaTooltip"])
    }

    fn tips(imported: &[&str], used: &[&str]) -> FileTooltips {
        FileTooltips {
            imported: imported.iter().copied().collect::<NameSet>(),
            used: used.iter().copied().collect::<NameSet>(),
        }
    }

    #[test]
    fn test_clean_file() {
        let d = defs();
        let t = tips(&["AlphaTooltip"], &["AlphaTooltip"]);
        let outcome = check_files(&d, [("ok.mdx", &t)]);
        assert_eq!(outcome.files_using, 1);
        assert!(outcome.warnings.is_empty());
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_empty_file_not_counted() {
        let d = defs();
        let t = FileTooltips::default();
        let outcome = check_files(&d, [("plain.mdx", &t)]);
        assert_eq!(outcome, CheckOutcome::default());
    }

    #[test]
    fn test_missing_import() {
        let d = defs();
        let t = tips(&["AlphaTooltip"], &["AlphaTooltip", "BetaTooltip"]);
        let outcome = check_files(&d, [("a.mdx", &t)]);
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        let err = &outcome.errors[0];
        assert_eq!(err.file, "a.mdx");
        assert_eq!(err.tooltip, "BetaTooltip");
        assert_eq!(err.kind, FindingKind::MissingImport);
        assert_eq!(err.message, "Tooltip \"BetaTooltip\" is used but not imported");
    }

    #[test]
    fn test_unused_import_is_warning() {
        let d = defs();
        let t = tips(&["AlphaTooltip", "BetaTooltip"], &["AlphaTooltip"]);
        let outcome = check_files(&d, [("b.mdx", &t)]);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, FindingKind::UnusedImport);
        assert_eq!(outcome.warnings[0].severity(), Severity::Warning);
    }

    #[test]
    fn test_invalid_import_reported_regardless_of_usage() {
        let d = defs();
        let t = tips(&["GammaTooltip"], &[]);
        let outcome = check_files(&d, [("c.mdx", &t)]);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].kind, FindingKind::InvalidImport);
        assert_eq!(
            outcome.errors[0].message,
            "Tooltip \"GammaTooltip\" does not exist in snippets/tooltips.jsx"
        );
        // It can never be detected as used, so it is also unused.
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].tooltip, "GammaTooltip");
    }

    #[test]
    fn test_declarations_scoped_per_file() {
        let d = defs();
        let importer = tips(&["AlphaTooltip"], &[]);
        let renderer = tips(&[], &["AlphaTooltip"]);
        let outcome = check_files(&d, [("x.mdx", &importer), ("y.mdx", &renderer)]);
        assert_eq!(outcome.files_using, 2);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].file, "x.mdx");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].file, "y.mdx");
    }

    #[test]
    fn test_error_order_follows_files_then_rules() {
        let d = defs();
        let first = tips(&["GammaTooltip"], &["BetaTooltip", "AlphaTooltip"]);
        let second = tips(&[], &["AlphaTooltip"]);
        let outcome = check_files(&d, [("1.mdx", &first), ("2.mdx", &second)]);
        let order: Vec<_> = outcome
            .errors
            .iter()
            .map(|f| (f.file.as_str(), f.tooltip.as_str(), f.kind))
            .collect();
        assert_eq!(
            order,
            vec![
                ("1.mdx", "BetaTooltip", FindingKind::MissingImport),
                ("1.mdx", "AlphaTooltip", FindingKind::MissingImport),
                ("1.mdx", "GammaTooltip", FindingKind::InvalidImport),
                ("2.mdx", "AlphaTooltip", FindingKind::MissingImport),
            ]
        );
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&FindingKind::MissingImport).unwrap();
        assert_eq!(json, "\"missing-import\"");
    }
}

//! Tooltip definition discovery.
//!
//! The definitions module is the single source of truth for which tooltip
//! names exist. Every `export const <Name><suffix> = ...` contributes one name.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::info;

use crate::error::{IoResultExt, TipcheckError, TipcheckResult};

/// Default location of the definitions module, relative to the root.
pub const DEFAULT_DEFINITIONS_PATH: &str = "snippets/tooltips.jsx";

/// Default suffix that marks an export as a tooltip component.
pub const DEFAULT_SUFFIX: &str = "Tooltip";

/// Known tooltip names, in the order they appear in the definitions module.
#[derive(Debug, Clone, Default)]
pub struct DefinitionSet {
    /// Path the set was loaded from, as given (relative to the root)
    source: String,
    names: Vec<String>,
    index: HashSet<String>,
}

impl DefinitionSet {
    /// Build a set from names directly. Duplicates collapse onto the first.
    pub fn from_names<I, S>(source: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            source: source.into(),
            ..Self::default()
        };
        for name in names {
            set.insert(name.into());
        }
        set
    }

    fn insert(&mut self, name: String) {
        if self.index.insert(name.clone()) {
            self.names.push(name);
        }
    }

    /// Path of the definitions module this set was read from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Names in discovery order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Compile the export pattern for a given suffix.
fn export_pattern(suffix: &str) -> TipcheckResult<Regex> {
    let pattern = format!(r"export\s+const\s+(\w+{})\s*=", regex::escape(suffix));
    Regex::new(&pattern).map_err(|e| TipcheckError::pattern(e.to_string()))
}

/// Extract tooltip names from the text of a definitions module.
pub fn parse_definitions(
    source: impl Into<String>,
    content: &str,
    suffix: &str,
) -> TipcheckResult<DefinitionSet> {
    let re = export_pattern(suffix)?;
    let names = re
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string());
    Ok(DefinitionSet::from_names(source, names))
}

/// Load the definition set from `root/rel_path`.
///
/// A missing file is fatal: nothing else can be validated without it.
pub fn load_definitions(
    root: &Path,
    rel_path: &str,
    suffix: &str,
) -> TipcheckResult<DefinitionSet> {
    let path = root.join(rel_path);
    if !path.is_file() {
        return Err(TipcheckError::definitions_not_found(absolute(&path)));
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    let set = parse_definitions(rel_path, &content, suffix)?;

    if set.is_empty() {
        info!(path = %path.display(), "definitions module exports no tooltips");
    }
    Ok(set)
}

/// Best-effort absolute form of a path for error reporting.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
// PODS

export const PodTooltip = () => {
  return (
  <Tooltip headline="Pod" tip="A dedicated GPU or CPU instance.">Pod</Tooltip>
  );
};

export const PodsTooltip = () => {
  return (<Tooltip headline="Pods">Pods</Tooltip>);
};

export const helper = () => null;
export   const   ServerlessTooltip=() => null;
const PrivateTooltip = () => null;
"#;

    #[test]
    fn test_parse_definitions_in_source_order() {
        let set = parse_definitions("snippets/tooltips.jsx", SAMPLE, DEFAULT_SUFFIX).unwrap();
        assert_eq!(
            set.names(),
            &["PodTooltip", "PodsTooltip", "ServerlessTooltip"]
        );
        assert!(!set.contains("helper"));
        assert!(!set.contains("PrivateTooltip"));
        assert_eq!(set.source(), "snippets/tooltips.jsx");
    }

    #[test]
    fn test_duplicates_collapse() {
        let content = "export const ATooltip = 1;\nexport const ATooltip = 2;\n";
        let set = parse_definitions("t.jsx", content, DEFAULT_SUFFIX).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_custom_suffix() {
        let content = "export const PodTip = 1;\nexport const PodTooltip = 2;\n";
        let set = parse_definitions("t.jsx", content, "Tip").unwrap();
        assert_eq!(set.names(), &["PodTip"]);
    }

    #[test]
    fn test_suffix_is_escaped() {
        let content = "export const Pod_X = 1;\nexport const Pod.X = 2;\n";
        let set = parse_definitions("t.jsx", content, ".X").unwrap();
        assert_eq!(set.names(), &["Pod.X"]);
    }

    #[test]
    fn test_empty_module_yields_empty_set() {
        let set = parse_definitions("t.jsx", "// nothing here\n", DEFAULT_SUFFIX).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let root = std::env::temp_dir().join(format!(
            "tipcheck_defs_missing_{}",
            std::process::id()
        ));
        let err = load_definitions(&root, DEFAULT_DEFINITIONS_PATH, DEFAULT_SUFFIX).unwrap_err();
        match err {
            TipcheckError::DefinitionsNotFound { path } => {
                assert!(path.is_absolute());
                assert!(path.ends_with("snippets/tooltips.jsx"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! Per-file extraction of tooltip imports and usages.
//!
//! Detects:
//! - Imports: `import { A, B } from "/snippets/tooltips.jsx";` (braces may span lines)
//! - Usages: `<A />`, `<A>`, or `<A prop="...">` for names in the definition set
//!
//! Usages are only detected for known names, so unrelated angle-bracket text
//! in content never produces a finding.

use std::collections::HashSet;

use regex::Regex;

use crate::definitions::DefinitionSet;
use crate::error::{TipcheckError, TipcheckResult};

/// Insertion-ordered set of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl NameSet {
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.seen.insert(name.clone()) {
            self.order.push(name);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameSet::default();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

/// Tooltip imports and usages found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTooltips {
    /// Names imported from the definitions module
    pub imported: NameSet,
    /// Known names rendered as elements
    pub used: NameSet,
}

impl FileTooltips {
    /// True when the file neither imports nor renders any tooltip.
    pub fn is_empty(&self) -> bool {
        self.imported.is_empty() && self.used.is_empty()
    }
}

/// Compiled patterns for one run.
#[derive(Debug, Clone)]
pub struct TooltipMatcher {
    import_re: Regex,
    /// One pattern per known name, in definition order
    usage_res: Vec<(String, Regex)>,
}

impl TooltipMatcher {
    pub fn new(definitions: &DefinitionSet, import_specifier: &str) -> TipcheckResult<Self> {
        let import_re = compile(&format!(
            r#"import\s*\{{([^}}]+)\}}\s*from\s*["']{}["']"#,
            regex::escape(import_specifier)
        ))?;

        let usage_res = definitions
            .names()
            .iter()
            .map(|name| {
                let re = compile(&format!(r"<{}(?:\s*/>|[\s>])", regex::escape(name)))?;
                Ok((name.clone(), re))
            })
            .collect::<TipcheckResult<Vec<_>>>()?;

        Ok(Self {
            import_re,
            usage_res,
        })
    }

    /// Names imported from the definitions module, across all import statements.
    pub fn imported(&self, content: &str) -> NameSet {
        let mut imported = NameSet::default();
        for caps in self.import_re.captures_iter(content) {
            let Some(list) = caps.get(1) else { continue };
            for name in list.as_str().split(',').map(str::trim) {
                if !name.is_empty() {
                    imported.insert(name);
                }
            }
        }
        imported
    }

    /// Known names rendered as elements.
    pub fn used(&self, content: &str) -> NameSet {
        self.usage_res
            .iter()
            .filter(|(_, re)| re.is_match(content))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn scan(&self, content: &str) -> FileTooltips {
        FileTooltips {
            imported: self.imported(content),
            used: self.used(content),
        }
    }
}

fn compile(pattern: &str) -> TipcheckResult<Regex> {
    Regex::new(pattern).map_err(|e| TipcheckError::pattern(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::DEFAULT_DEFINITIONS_PATH;

    fn matcher() -> TooltipMatcher {
        let defs = DefinitionSet::from_names(
            DEFAULT_DEFINITIONS_PATH,
            ["PodTooltip", "PodsTooltip", "ServerlessTooltip"],
        );
        TooltipMatcher::new(&defs, "/snippets/tooltips.jsx").unwrap()
    }

    fn names(set: &NameSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn test_single_import() {
        let m = matcher();
        let content = r#"import { PodTooltip } from "/snippets/tooltips.jsx";"#;
        assert_eq!(names(&m.imported(content)), vec!["PodTooltip"]);
    }

    #[test]
    fn test_single_quotes_and_no_spaces() {
        let m = matcher();
        let content = "import {PodTooltip,PodsTooltip} from '/snippets/tooltips.jsx'";
        assert_eq!(names(&m.imported(content)), vec!["PodTooltip", "PodsTooltip"]);
    }

    #[test]
    fn test_multiline_import_and_trailing_comma() {
        let m = matcher();
        let content = "import {\n  PodTooltip,\n  ServerlessTooltip,\n} from \"/snippets/tooltips.jsx\";\n";
        assert_eq!(
            names(&m.imported(content)),
            vec!["PodTooltip", "ServerlessTooltip"]
        );
    }

    #[test]
    fn test_multiple_import_statements_all_contribute() {
        let m = matcher();
        let content = r#"
import { PodTooltip } from "/snippets/tooltips.jsx";
import { ServerlessTooltip, PodTooltip } from "/snippets/tooltips.jsx";
"#;
        assert_eq!(
            names(&m.imported(content)),
            vec!["PodTooltip", "ServerlessTooltip"]
        );
    }

    #[test]
    fn test_imports_from_other_modules_ignored() {
        let m = matcher();
        let content = r#"
import { Card } from "/snippets/cards.jsx";
import { PodTooltip } from "snippets/tooltips.jsx";
import { PodsTooltip } from "/snippets/tooltips.jsx.bak";
"#;
        assert!(m.imported(content).is_empty());
    }

    #[test]
    fn test_usage_forms() {
        let m = matcher();
        assert_eq!(names(&m.used("<PodTooltip/>")), vec!["PodTooltip"]);
        assert_eq!(names(&m.used("<PodTooltip />")), vec!["PodTooltip"]);
        assert_eq!(names(&m.used("Deploy a <PodTooltip>pod</PodTooltip>")), vec!["PodTooltip"]);
        assert_eq!(names(&m.used("<PodTooltip\n  cta=\"x\"/>")), vec!["PodTooltip"]);
    }

    #[test]
    fn test_usage_requires_exact_name() {
        let m = matcher();
        assert!(m.used("<PodTooltipX/>").is_empty());
        assert!(m.used("<PodTooltip.Item>").is_empty());
        assert!(m.used("PodTooltip is mentioned in prose").is_empty());
        assert!(m.used("</PodTooltip>").is_empty());
    }

    #[test]
    fn test_usage_in_definition_order() {
        let m = matcher();
        let content = "<ServerlessTooltip/> then <PodTooltip/>";
        assert_eq!(
            names(&m.used(content)),
            vec!["PodTooltip", "ServerlessTooltip"]
        );
    }

    #[test]
    fn test_unknown_tags_invisible() {
        let m = matcher();
        let tips = m.scan("<GpuTooltip/> and <PodTooltp/>");
        assert!(tips.is_empty());
    }

    #[test]
    fn test_custom_specifier() {
        let defs = DefinitionSet::from_names("shared/tips.jsx", ["PodTip"]);
        let m = TooltipMatcher::new(&defs, "@site/shared/tips.jsx").unwrap();
        let tips = m.scan("import { PodTip } from '@site/shared/tips.jsx'\n\n<PodTip/>");
        assert_eq!(names(&tips.imported), vec!["PodTip"]);
        assert_eq!(names(&tips.used), vec!["PodTip"]);
    }

    #[test]
    fn test_name_set_collapses_duplicates() {
        let set: NameSet = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}

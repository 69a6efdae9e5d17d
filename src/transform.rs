//! Find/replace and deletion transforms applied to extracted strings.
//!
//! All matching is literal. Rule strings are parsed with comma priority: a string
//! with a comma splits on commas, a comma-free string with spaces is a single
//! phrase, anything else is a single word. Malformed rule strings never fail; unpaired
//! and empty entries are skipped.

use tracing::debug;

/// Parse a replace/delete rule string into literal targets.
///
/// # Example
///
/// ```rust
/// use rs_htmlextract::transform::parse_replacement_strings;
///
/// assert_eq!(parse_replacement_strings("a, b,,c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_replacement_strings(" read more "), vec!["read more"]);
/// assert!(parse_replacement_strings("  ").is_empty());
/// ```
#[must_use]
pub fn parse_replacement_strings(raw: &str) -> Vec<String> {
    if raw.contains(',') {
        return raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}

/// Apply index-paired literal replacements in order.
///
/// Pairs beyond the shorter list are ignored. Blank text, targets or
/// replacements leave the text unchanged.
#[must_use]
pub fn replace_content(text: &str, target: &str, replacement: &str) -> String {
    if text.is_empty() || target.is_empty() || replacement.is_empty() {
        return text.to_string();
    }

    let targets = parse_replacement_strings(target);
    let replacements = parse_replacement_strings(replacement);
    apply_replacements(text, &targets, &replacements)
}

/// Remove every literal occurrence of each target.
#[must_use]
pub fn delete_content(text: &str, delete: &str) -> String {
    if text.is_empty() || delete.is_empty() {
        return text.to_string();
    }

    apply_deletions(text, &parse_replacement_strings(delete))
}

fn apply_replacements(text: &str, targets: &[String], replacements: &[String]) -> String {
    if targets.len() != replacements.len() {
        debug!(
            targets = targets.len(),
            replacements = replacements.len(),
            "unpaired replace entries ignored"
        );
    }

    targets
        .iter()
        .zip(replacements)
        .filter(|(from, to)| !from.is_empty() && !to.is_empty())
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
}

fn apply_deletions(text: &str, targets: &[String]) -> String {
    targets
        .iter()
        .filter(|target| !target.is_empty())
        .fold(text.to_string(), |acc, target| acc.replace(target.as_str(), ""))
}

/// Parsed replace and delete rules, applied together to several fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transform {
    /// Literal targets of the replace step.
    pub replace_targets: Vec<String>,
    /// Replacements paired index-wise with `replace_targets`.
    pub replacements: Vec<String>,
    /// Literal targets of the delete step.
    pub delete_targets: Vec<String>,
}

impl Transform {
    /// Build from raw parameter strings.
    ///
    /// The replace step only exists when both target and replacement are given.
    #[must_use]
    pub fn new(replace_target: &str, replace_with: &str, delete: &str) -> Self {
        let (replace_targets, replacements) = if replace_target.is_empty() || replace_with.is_empty()
        {
            (Vec::new(), Vec::new())
        } else {
            (
                parse_replacement_strings(replace_target),
                parse_replacement_strings(replace_with),
            )
        };

        Self {
            replace_targets,
            replacements,
            delete_targets: parse_replacement_strings(delete),
        }
    }

    /// Run only the replace step.
    #[must_use]
    pub fn replace(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        apply_replacements(text, &self.replace_targets, &self.replacements)
    }

    /// Run only the delete step.
    #[must_use]
    pub fn delete(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        apply_deletions(text, &self.delete_targets)
    }

    /// Replace, then delete.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.delete(&self.replace(text))
    }
}

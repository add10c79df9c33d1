//! Compiled suppression rules and the matching predicate.
//!
//! A [`RuleSet`] is built once per lint run from the normalized
//! configuration, then shared read-only for every diagnostic the host
//! considers emitting. Matching is a pure predicate over that static state,
//! so a host that lints files in parallel can share one set across workers
//! without locking.

use crate::message::MessageIdentity;
use perfile_config::{ConfigWarning, RuleSpec};
use regex::Regex;
use std::collections::HashSet;

/// One compiled suppression rule: a path pattern and the codes it ignores.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    source: String,
    codes: HashSet<String>,
}

impl Rule {
    fn compile(spec: RuleSpec) -> Result<Self, ConfigWarning> {
        let pattern = Regex::new(&spec.pattern).map_err(|err| ConfigWarning::InvalidPattern {
            pattern: spec.pattern.clone(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            pattern,
            source: spec.pattern,
            codes: spec.codes.into_iter().collect(),
        })
    }

    /// The pattern as written in the configuration.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Whether this rule's pattern matches anywhere in the given path.
    ///
    /// Search semantics, not full-string: `/folder_1/` matches any file
    /// under that folder, `file.py` matches by substring. The path is
    /// matched as the host supplies it; no normalization is applied.
    #[must_use]
    pub fn matches_path(&self, file_path: &str) -> bool {
        self.pattern.is_match(file_path)
    }

    /// Whether this rule lists either spelling of the message.
    ///
    /// Comparison is case-sensitive.
    #[must_use]
    pub fn suppresses(&self, message: &MessageIdentity) -> bool {
        self.codes.contains(&message.symbolic) || self.codes.contains(&message.code)
    }
}

/// An ordered, immutable set of suppression rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile rule specs into a rule set.
    ///
    /// A pattern that fails to compile drops its rule and records a warning;
    /// compilation itself never fails. Input order is preserved.
    #[must_use]
    pub fn compile(specs: impl IntoIterator<Item = RuleSpec>) -> (Self, Vec<ConfigWarning>) {
        let mut rules = Vec::new();
        let mut warnings = Vec::new();

        for spec in specs {
            match Rule::compile(spec) {
                Ok(rule) => rules.push(rule),
                Err(warning) => warnings.push(warning),
            }
        }

        (Self { rules }, warnings)
    }

    /// A set that suppresses nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled rules in configuration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of compiled rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decide whether the message should be suppressed for the file.
    ///
    /// Returns true on the first rule whose pattern matches the path and
    /// whose code set lists either spelling of the message. Because a hit
    /// short-circuits and a miss contributes nothing, rule order cannot
    /// change the decision.
    #[must_use]
    pub fn should_ignore(&self, file_path: &str, message: &MessageIdentity) -> bool {
        for rule in &self.rules {
            if rule.matches_path(file_path) && rule.suppresses(message) {
                tracing::trace!(
                    pattern = rule.pattern(),
                    file = file_path,
                    code = message.code.as_str(),
                    "Suppressing message"
                );
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(entries: &[(&str, &[&str])]) -> RuleSet {
        let specs = entries
            .iter()
            .map(|(pattern, codes)| {
                RuleSpec::new(*pattern, codes.iter().map(|c| (*c).to_string()).collect())
            })
            .collect::<Vec<_>>();
        let (rules, warnings) = RuleSet::compile(specs);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        rules
    }

    fn msg(symbolic: &str, code: &str) -> MessageIdentity {
        MessageIdentity::new(symbolic, code)
    }

    #[test]
    fn test_filename_pattern_matches_by_search() {
        let rules = compile(&[(".*_test\\.py", &["protected-access"])]);
        let message = msg("protected-access", "W0212");

        assert!(rules.should_ignore("foo_test.py", &message));
        assert!(!rules.should_ignore("foo.py", &message));
    }

    #[test]
    fn test_folder_fragment_matches_any_file_under_folder() {
        let rules = compile(&[("/folder_1/", &["missing-function-docstring", "W0621"])]);
        let message = msg("redefined-outer-name", "W0621");

        assert!(rules.should_ignore("src/folder_1/mod.py", &message));
        assert!(!rules.should_ignore("src/folder_2/mod.py", &message));
    }

    #[test]
    fn test_unlisted_code_is_not_suppressed() {
        let rules = compile(&[("file.py", &["C0116", "E0001"])]);

        assert!(rules.should_ignore("file.py", &msg("missing-function-docstring", "C0116")));
        assert!(!rules.should_ignore("file.py", &msg("missing-class-docstring", "C0115")));
    }

    #[test]
    fn test_suppression_matches_either_spelling() {
        // Rule lists the symbolic name; the identity carries both, so a
        // query spelled as the short code still hits (and vice versa).
        let rules = compile(&[
            ("a\\.py", &["missing-function-docstring"]),
            ("b\\.py", &["C0116"]),
        ]);
        let message = msg("missing-function-docstring", "C0116");

        assert!(rules.should_ignore("a.py", &message));
        assert!(rules.should_ignore("b.py", &message));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let rules = compile(&[("a\\.py", &["C0116"])]);
        assert!(!rules.should_ignore("a.py", &msg("missing-function-docstring", "c0116")));
    }

    #[test]
    fn test_empty_set_suppresses_nothing() {
        let rules = RuleSet::empty();
        assert!(rules.is_empty());
        assert!(!rules.should_ignore("a.py", &msg("missing-function-docstring", "C0116")));
    }

    #[test]
    fn test_rule_with_no_codes_is_a_noop() {
        let rules = compile(&[("a\\.py", &[])]);
        assert_eq!(rules.len(), 1);
        assert!(!rules.should_ignore("a.py", &msg("missing-function-docstring", "C0116")));
    }

    #[test]
    fn test_invalid_pattern_dropped_without_failing_compile() {
        let specs = vec![
            RuleSpec::new("[unclosed", vec!["C0116".to_string()]),
            RuleSpec::new("a\\.py", vec!["C0116".to_string()]),
        ];
        let (rules, warnings) = RuleSet::compile(specs);

        assert_eq!(rules.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code(), "invalid-pattern");
        assert!(rules.should_ignore("a.py", &msg("missing-function-docstring", "C0116")));
    }

    #[test]
    fn test_order_independence_of_overlapping_rules() {
        let forward = compile(&[("tests/", &["C0116"]), ("tests/unit/", &["C0116", "W0212"])]);
        let reversed = compile(&[("tests/unit/", &["C0116", "W0212"]), ("tests/", &["C0116"])]);

        for (symbolic, code) in [
            ("missing-function-docstring", "C0116"),
            ("protected-access", "W0212"),
            ("missing-class-docstring", "C0115"),
        ] {
            let message = msg(symbolic, code);
            for path in ["tests/unit/a.py", "tests/b.py", "src/c.py"] {
                assert_eq!(
                    forward.should_ignore(path, &message),
                    reversed.should_ignore(path, &message),
                    "order changed the decision for {path} / {code}"
                );
            }
        }
    }

    #[test]
    fn test_duplicate_codes_collapse() {
        let rules = compile(&[("a\\.py", &["C0116", "C0116"])]);
        assert_eq!(rules.rules()[0].pattern(), "a\\.py");
        assert!(rules.should_ignore("a.py", &msg("missing-function-docstring", "C0116")));
    }

    #[test]
    fn test_path_matched_as_given() {
        // No normalization: an absolute path still hits a fragment pattern,
        // but a backslash-separated path does not match a `/` fragment.
        let rules = compile(&[("/folder_1/", &["W0621"])]);
        let message = msg("redefined-outer-name", "W0621");

        assert!(rules.should_ignore("/home/user/src/folder_1/mod.py", &message));
        assert!(!rules.should_ignore("src\\folder_1\\mod.py", &message));
    }
}

//! Parsing of both accepted per-file-ignores syntaxes into a uniform
//! [`RuleSpec`] list.
//!
//! Loading never fails. Malformed entries are dropped and reported as
//! [`ConfigWarning`]s so a single bad line cannot disable linting for an
//! entire project.

use crate::model::{IgnoresConfig, LegacyTable, RuleSpec};
use crate::warning::ConfigWarning;

/// Normalize a configuration section into rule specs.
///
/// Native-setting entries come first, then legacy-table entries in their
/// stored order. Order never changes a suppression decision; it is fixed so
/// loads are deterministic and debuggable.
#[must_use]
#[tracing::instrument(skip(config))]
pub fn load(config: &IgnoresConfig) -> (Vec<RuleSpec>, Vec<ConfigWarning>) {
    let mut specs = Vec::new();
    let mut warnings = Vec::new();

    if let Some(native) = &config.per_file_ignores {
        let (native_specs, native_warnings) = parse_native_setting(native);
        specs.extend(native_specs);
        warnings.extend(native_warnings);
    }

    if let Some(legacy) = &config.legacy {
        let (legacy_specs, legacy_warnings) = parse_legacy_table(legacy);
        specs.extend(legacy_specs);
        warnings.extend(legacy_warnings);
    }

    tracing::debug!(
        rules = specs.len(),
        dropped = warnings.len(),
        "Loaded per-file-ignores configuration"
    );

    (specs, warnings)
}

/// Parse the native `per-file-ignores` setting.
///
/// Entries are newline-separated `<pattern>:<code1>,<code2>,...` lines. A
/// trailing `#`-comment on an entry is stripped. Single-line config files
/// supply the whole setting as one comma-separated string; that form is
/// re-split into entries before each `<pattern>:` token.
///
/// The entry splits on the *first* `:`, so a pattern cannot itself contain
/// a colon.
#[must_use]
pub fn parse_native_setting(input: &str) -> (Vec<RuleSpec>, Vec<ConfigWarning>) {
    let mut specs = Vec::new();
    let mut warnings = Vec::new();

    for entry in split_entries(input) {
        match parse_entry(&entry) {
            Ok(Some(spec)) => specs.push(spec),
            Ok(None) => {}
            Err(warning) => warnings.push(warning),
        }
    }

    (specs, warnings)
}

/// Parse the legacy `<pattern> = <comma-separated-codes>` table.
///
/// Values follow the same trim/split rules as native code lists.
#[must_use]
pub fn parse_legacy_table(table: &LegacyTable) -> (Vec<RuleSpec>, Vec<ConfigWarning>) {
    let mut specs = Vec::new();
    let mut warnings = Vec::new();

    for (pattern, codes) in table.entries() {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            warnings.push(ConfigWarning::EmptyPattern {
                entry: format!("{pattern}:{codes}"),
            });
            continue;
        }
        specs.push(RuleSpec::new(pattern, split_codes(codes)));
    }

    (specs, warnings)
}

/// Split the native setting into individual entries.
///
/// Multi-line input splits on newlines. Flat input (no newline) splits on
/// commas, starting a new entry at every comma-separated segment of the form
/// `<pattern>:...`; colon-less segments belong to the preceding entry's code
/// list.
fn split_entries(input: &str) -> Vec<String> {
    if input.contains('\n') {
        return input.lines().map(str::to_string).collect();
    }

    let mut entries: Vec<String> = Vec::new();
    for segment in input.split(',') {
        let starts_entry = segment
            .split_once(':')
            .is_some_and(|(pattern, _)| !pattern.is_empty());
        match entries.last_mut() {
            Some(current) if !starts_entry => {
                current.push(',');
                current.push_str(segment);
            }
            _ => entries.push(segment.to_string()),
        }
    }
    entries
}

/// Parse one entry. Returns `Ok(None)` for blank entries (including entries
/// that are only a comment).
fn parse_entry(entry: &str) -> Result<Option<RuleSpec>, ConfigWarning> {
    let entry = strip_comment(entry).trim();
    if entry.is_empty() {
        return Ok(None);
    }

    let Some((pattern, codes)) = entry.split_once(':') else {
        return Err(ConfigWarning::MissingSeparator {
            entry: entry.to_string(),
        });
    };

    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(ConfigWarning::EmptyPattern {
            entry: entry.to_string(),
        });
    }

    Ok(Some(RuleSpec::new(pattern, split_codes(codes))))
}

/// Strip a trailing `#`-comment from an entry.
fn strip_comment(entry: &str) -> &str {
    match entry.split_once('#') {
        Some((before, _)) => before,
        None => entry,
    }
}

/// Split a comma-separated code list, trimming whitespace and dropping
/// empties.
fn split_codes(codes: &str) -> Vec<String> {
    codes
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

/// The plugin's configuration section, as hosts deserialize it.
///
/// Two syntaxes are accepted and may coexist:
///
/// ```yaml
/// # Native: one multi-line string setting
/// per-file-ignores: |
///   tests/.*:missing-function-docstring,protected-access
///   /migrations/:C0103
///
/// # Legacy: one pattern = codes entry per key
/// legacy:
///   file.py: C0116,E0001
/// ```
///
/// Both are normalized into the same [`RuleSpec`] list by [`crate::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoresConfig {
    /// Native setting: newline-separated `<pattern>:<code1>,<code2>,...`
    /// entries. A single-line comma-separated form is also accepted.
    #[serde(
        default,
        rename = "per-file-ignores",
        skip_serializing_if = "Option::is_none"
    )]
    pub per_file_ignores: Option<String>,

    /// Legacy section: a `<pattern> = <comma-separated-codes>` table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy: Option<LegacyTable>,
}

impl IgnoresConfig {
    /// True when neither syntax is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.per_file_ignores.is_none() && self.legacy.is_none()
    }
}

/// An order-preserving `<pattern> = <codes>` table.
///
/// Deserialized from a map but stored as a sequence of pairs so that rule
/// order is deterministic regardless of the host's map implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyTable {
    entries: Vec<(String, String)>,
}

impl LegacyTable {
    /// Build a table from `(pattern, codes)` pairs, preserving their order.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Iterate `(pattern, codes)` entries in stored order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LegacyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, codes) in &self.entries {
            map.serialize_entry(pattern, codes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LegacyTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};

        struct LegacyTableVisitor;

        impl<'de> Visitor<'de> for LegacyTableVisitor {
            type Value = LegacyTable;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of pattern strings to comma-separated code strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((pattern, codes)) = map.next_entry::<String, String>()? {
                    entries.push((pattern, codes));
                }
                Ok(LegacyTable { entries })
            }
        }

        deserializer.deserialize_map(LegacyTableVisitor)
    }
}

/// One normalized configuration entry: a path pattern and the message codes
/// it suppresses.
///
/// The pattern is uncompiled text here; compilation (and the drop-on-invalid
/// policy) happens when the rule set is built. Codes keep their parsed order
/// and may contain duplicates; the compiled set collapses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Regular expression text matched against file paths.
    pub pattern: String,
    /// Message codes or symbolic names to suppress. May be empty, in which
    /// case the rule is a no-op.
    pub codes: Vec<String>,
}

impl RuleSpec {
    /// Create a spec from a pattern and its codes.
    #[must_use]
    pub fn new(pattern: impl Into<String>, codes: Vec<String>) -> Self {
        Self {
            pattern: pattern.into(),
            codes,
        }
    }
}

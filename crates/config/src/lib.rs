mod model;
mod parse;
mod warning;

pub use model::{IgnoresConfig, LegacyTable, RuleSpec};
pub use parse::{load, parse_legacy_table, parse_native_setting};
pub use warning::ConfigWarning;

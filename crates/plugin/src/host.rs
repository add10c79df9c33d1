//! Traits the host linter implements.
//!
//! The plugin never reimplements the host's message registry or its
//! configuration pipeline; both are injected through these seams.

use perfile_config::IgnoresConfig;
use perfile_engine::MessageIdentity;
use std::sync::Arc;

/// Alias lookup owned by the host's message registry.
///
/// Symbolic names and short codes are two spellings of the same diagnostic;
/// only the host knows the mapping between them.
pub trait MessageStore: Send + Sync {
    /// Resolve either spelling of a diagnostic id to its full identity.
    ///
    /// Returns `None` for ids the registry does not know.
    fn resolve(&self, msg_id: &str) -> Option<MessageIdentity>;
}

/// What registration needs from the host linter.
pub trait LinterHost {
    /// The plugin's configuration section, already deserialized by the
    /// host's config pipeline.
    fn ignores_config(&self) -> IgnoresConfig;

    /// The host's message registry, shared with the plugin for alias
    /// resolution on every filtered diagnostic.
    fn message_store(&self) -> Arc<dyn MessageStore>;
}

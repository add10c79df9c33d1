use crate::host::{LinterHost, MessageStore};
use perfile_config::{ConfigWarning, IgnoresConfig};
use perfile_engine::{MessageIdentity, RuleSet};
use std::sync::Arc;

/// The per-file-ignores plugin instance.
///
/// Built once at startup from the host's configuration, then queried for
/// every diagnostic the host considers emitting. Immutable after
/// construction, so a host that checks files in parallel can share one
/// instance across workers.
pub struct PerFileIgnoresPlugin {
    rules: RuleSet,
    messages: Arc<dyn MessageStore>,
    warnings: Vec<ConfigWarning>,
}

impl PerFileIgnoresPlugin {
    /// Build the plugin from a configuration section and the host's message
    /// store.
    ///
    /// Loading never fails: malformed entries and invalid patterns are
    /// dropped, logged, and kept available through [`Self::warnings`].
    #[must_use]
    #[tracing::instrument(skip_all)]
    pub fn from_config(config: &IgnoresConfig, messages: Arc<dyn MessageStore>) -> Self {
        let (specs, mut warnings) = perfile_config::load(config);
        let (rules, compile_warnings) = RuleSet::compile(specs);
        warnings.extend(compile_warnings);

        for warning in &warnings {
            tracing::warn!(code = warning.code(), "{warning}");
        }
        tracing::debug!(
            rules = rules.len(),
            dropped = warnings.len(),
            "Per-file-ignores plugin ready"
        );

        Self {
            rules,
            messages,
            warnings,
        }
    }

    /// The per-diagnostic filter hook.
    ///
    /// `msg_id` may be either spelling of the diagnostic; it is resolved
    /// through the host's message store so a rule configured with the other
    /// spelling still applies. An id the store does not know is compared as
    /// its own identity. Returns true when the host should drop the
    /// diagnostic.
    #[must_use]
    pub fn is_message_ignored(&self, file_path: &str, msg_id: &str) -> bool {
        let identity = self
            .messages
            .resolve(msg_id)
            .unwrap_or_else(|| MessageIdentity::opaque(msg_id));
        self.rules.should_ignore(file_path, &identity)
    }

    /// The compiled rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Configuration entries dropped during loading, for hosts that want to
    /// warn at startup. Suppression still works for every valid entry.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}

/// Registration hook: called once by the host to obtain the plugin instance.
#[must_use]
pub fn register(host: &dyn LinterHost) -> PerFileIgnoresPlugin {
    PerFileIgnoresPlugin::from_config(&host.ignores_config(), host.message_store())
}

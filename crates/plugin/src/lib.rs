mod host;
mod plugin;

pub use host::{LinterHost, MessageStore};
pub use plugin::{register, PerFileIgnoresPlugin};

// Re-exported so hosts only need this crate to drive the whole surface.
pub use perfile_config::{ConfigWarning, IgnoresConfig, LegacyTable};
pub use perfile_engine::MessageIdentity;

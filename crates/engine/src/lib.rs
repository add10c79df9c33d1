mod message;
mod rules;

pub use message::MessageIdentity;
pub use rules::{Rule, RuleSet};

use std::collections::HashMap;

use tracing::trace;

/// Length of a node key such as `S-0002c9000100d050`.
pub const NODE_KEY_LEN: usize = 18;

/// Maps node keys to the identity string of the device that declared them.
///
/// Duplicate keys are not rejected: the last registration wins.
#[derive(Debug, Default, Clone)]
pub struct IdentityRegistry {
    entries: HashMap<String, String>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `identity` under `key`.
    ///
    /// Keys that are not exactly [`NODE_KEY_LEN`] long are dropped and
    /// `false` is returned.
    pub fn register(&mut self, key: &str, identity: String) -> bool {
        if key.len() != NODE_KEY_LEN {
            trace!(key, "node key rejected");
            return false;
        }
        self.entries.insert(key.to_string(), identity);
        true
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! # Topology Model
//!
//! In-memory representation of a discovered fabric.
//!
//! * [`Device`]: one switch or host adapter, owning its [`Connection`]s.
//! * [`IdentityRegistry`]: node keys (`S-...`/`H-...`) mapped to rendered identities.
//! * [`DeviceGraph`]: committed devices in the order they appeared in the dump.
//!
//! Connections only carry the remote node key. Resolving it against the
//! registry is left to the renderer, once the whole dump has been read.

mod connection;
mod device;
mod graph;
mod registry;

pub use connection::Connection;
pub use device::{BasePortType, Device, NodeKind};
pub use graph::DeviceGraph;
pub use registry::{IdentityRegistry, NODE_KEY_LEN};

/// Everything a parse produces: the committed devices and the identities they declared.
#[derive(Debug, Default, Clone)]
pub struct Topology {
    pub devices: DeviceGraph,
    pub identities: IdentityRegistry,
}

impl Topology {
    /// Resolves a remote node key to the identity of the device that declared it.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.identities.lookup(key)
    }
}

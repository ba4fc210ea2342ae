use crate::topology::NodeKind;

/// One cable end as seen from the device that owns it.
///
/// The remote side is only known by its node key. Turning that key into an
/// identity happens at render time through the
/// [`IdentityRegistry`](crate::topology::IdentityRegistry).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Connection {
    pub local_port: u32,
    pub remote_port: u32,
    /// Key of the device on the other end, quotes stripped.
    pub remote_key: String,
    /// Remote port GUID on switch-owned lines, the local one on adapter-owned lines.
    pub port_guid: String,
    pub local_lid: u32,
    /// Adapters only.
    pub lmc: u32,
    /// Adapters only.
    pub remote_lid: u32,
    pub description: String,
    /// Link width and speed, e.g. `4xQDR`.
    pub width_speed: String,
    /// Kind of the owning device, which decides the line shape.
    pub kind: NodeKind,
}

impl Connection {
    pub fn remote_kind(&self) -> NodeKind {
        NodeKind::from_node_key(&self.remote_key)
    }
}

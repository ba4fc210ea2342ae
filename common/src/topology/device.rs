use std::fmt;

use crate::topology::Connection;

/// The two kinds of node found in a topology dump.
///
/// A record is treated as a switch until a `caguid` line says otherwise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[default]
    Switch,
    Adapter,
}

impl NodeKind {
    /// Keyword opening the descriptor line (`Switch` / `Ca`).
    pub fn keyword(self) -> &'static str {
        match self {
            NodeKind::Switch => "Switch",
            NodeKind::Adapter => "Ca",
        }
    }

    /// Header used in the rendered report.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Switch => "Switch",
            NodeKind::Adapter => "Host",
        }
    }

    /// Relation word used on rendered connection lines.
    pub fn relation(self) -> &'static str {
        match self {
            NodeKind::Switch => "switch",
            NodeKind::Adapter => "host",
        }
    }

    /// Attribute carrying the node GUID (`switchguid` / `caguid`).
    pub fn guid_attribute(self) -> &'static str {
        match self {
            NodeKind::Switch => "switchguid",
            NodeKind::Adapter => "caguid",
        }
    }

    /// Guesses the kind of a remote node from its key prefix.
    ///
    /// Only `S-` keys are switches, anything else is reported as a host.
    pub fn from_node_key(key: &str) -> Self {
        if key.starts_with('S') {
            NodeKind::Switch
        } else {
            NodeKind::Adapter
        }
    }
}

/// How switch port 0 is implemented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BasePortType {
    #[default]
    Enhanced,
    Base,
}

impl BasePortType {
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.starts_with("enhanced") {
            Some(BasePortType::Enhanced)
        } else if word.starts_with("base") {
            Some(BasePortType::Base)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BasePortType::Enhanced => "enhanced",
            BasePortType::Base => "base",
        }
    }
}

impl fmt::Display for BasePortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the fabric as read from the dump.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Device {
    pub vendor_id: u32,
    pub device_id: u32,
    pub sys_image_guid: u64,
    /// `switchguid` or `caguid`, depending on [`Device::kind`].
    pub node_guid: u64,
    /// Port GUID from the `switchguid=<hex>(<hex>)` form. Switches only.
    pub port_guid: u64,
    pub kind: NodeKind,
    /// Quoted key from the descriptor line, e.g. `S-0002c9000100d050`.
    pub node_key: String,
    pub description: String,
    pub port_count: u32,
    pub base_port_type: BasePortType,
    pub base_port: u32,
    pub lid: u32,
    pub lmc: u32,
    pub connections: Vec<Connection>,
}

impl Device {
    /// True when nothing has been read into this record yet.
    pub fn is_blank(&self) -> bool {
        *self == Device::default()
    }

    /// Identity string other devices resolve to, `0x<guid>` or `0x<guid>(<portguid>)`.
    pub fn identity(&self) -> String {
        match self.kind {
            NodeKind::Switch => format!("0x{:x}({:x})", self.node_guid, self.port_guid),
            NodeKind::Adapter => format!("0x{:x}", self.node_guid),
        }
    }
}

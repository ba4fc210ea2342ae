//! Scanner for the node summary line:
//!
//! ```text
//! Switch  36 "S-0002c9000100d050"   # "switch1" enhanced port 0 lid 1 lmc 0
//! Ca      2 "H-0002c9000100d060"    # "host1"
//! ```
//!
//! The part before `#` carries the port count and node key, the part after it
//! the quoted description and, for switches, base port details.

use ibtopo_common::topology::{BasePortType, NodeKind};

use crate::parser::{Cursor, Scan};

/// Fields read from a descriptor line. `None` means the field was absent or unreadable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub port_count: Option<u32>,
    /// Set only when both the port count and the key were read.
    pub node_key: Option<String>,
    pub description: Option<String>,
    pub base_port_type: Option<BasePortType>,
    pub base_port: Option<u32>,
    pub lid: Option<u32>,
    pub lmc: Option<u32>,
}

pub fn is_descriptor(line: &str) -> bool {
    line.starts_with(NodeKind::Switch.keyword()) || line.starts_with(NodeKind::Adapter.keyword())
}

/// Scans a descriptor line for a device of the given kind.
///
/// The kind comes from the record being built, not from the line: a `Ca`
/// line inside a switch record yields no header fields.
pub fn scan(line: &str, kind: NodeKind) -> Scan<Descriptor> {
    if !is_descriptor(line) {
        return Scan::NotThisShape;
    }

    let (header, details) = match line.split_once('#') {
        Some((header, details)) => (header, Some(details)),
        None => (line, None),
    };

    let mut descriptor = Descriptor::default();
    scan_header(header, kind, &mut descriptor);
    if let Some(details) = details {
        scan_details(details, kind, &mut descriptor);
    }

    let complete = descriptor.node_key.is_some()
        && descriptor.description.is_some()
        && (kind == NodeKind::Adapter
            || (descriptor.base_port_type.is_some()
                && descriptor.base_port.is_some()
                && descriptor.lid.is_some()
                && descriptor.lmc.is_some()));

    Scan::from_fields(descriptor, complete)
}

fn scan_header(header: &str, kind: NodeKind, descriptor: &mut Descriptor) {
    let mut cursor = Cursor::new(header);
    if !cursor.keyword(kind.keyword()) {
        return;
    }
    descriptor.port_count = cursor.number();
    if descriptor.port_count.is_none() {
        return;
    }
    descriptor.node_key = cursor
        .word()
        .map(|token| token.replace('"', ""))
        .filter(|key| !key.is_empty());
}

fn scan_details(details: &str, kind: NodeKind, descriptor: &mut Descriptor) {
    let mut cursor = Cursor::new(details);
    descriptor.description = cursor.seek_quoted().map(str::to_string);

    if kind != NodeKind::Switch {
        return;
    }

    // <base|enhanced> port <n> lid <n> lmc <n>
    descriptor.base_port_type = cursor.word().and_then(BasePortType::from_keyword);
    cursor.word();
    descriptor.base_port = cursor.number();
    cursor.word();
    descriptor.lid = cursor.number();
    cursor.word();
    descriptor.lmc = cursor.number();
}

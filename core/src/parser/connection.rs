//! Scanner for port lines. The shape depends on the kind of the owning device:
//!
//! ```text
//! [1]      "H-0002c903000e0b70"[1](2c903000e0b71)   # "host1 HCA-1" lid 3 4xQDR
//! [1](2c903000e0b71)  "S-0002c903007b7870"[5]       # lid 3 lmc 0 "switch1" lid 1 4xQDR
//! ```
//!
//! The first is listed under a switch, the second under a host adapter.

use ibtopo_common::topology::{Connection, NodeKind};

use crate::parser::{Cursor, Scan, parse_dec};

pub fn is_connection(line: &str) -> bool {
    line.starts_with('[')
}

/// Scans a port line listed under a device of the given kind.
///
/// A line whose `[port]` prefix and remote key cannot be read is not a
/// connection. Anything missing after that leaves the field at its default.
pub fn scan(line: &str, kind: NodeKind) -> Scan<Connection> {
    if !is_connection(line) {
        return Scan::NotThisShape;
    }

    let (ports, details) = match line.split_once('#') {
        Some((ports, details)) => (ports, Some(details)),
        None => (line, None),
    };

    let mut connection = Connection {
        kind,
        ..Connection::default()
    };

    let ports_complete = match kind {
        NodeKind::Switch => scan_switch_ports(ports, &mut connection),
        NodeKind::Adapter => scan_adapter_ports(ports, &mut connection),
    };
    let Some(ports_complete) = ports_complete else {
        return Scan::NotThisShape;
    };

    let details_complete = match (kind, details) {
        (NodeKind::Switch, Some(details)) => scan_switch_details(details, &mut connection),
        (NodeKind::Adapter, Some(details)) => scan_adapter_details(details, &mut connection),
        (_, None) => false,
    };

    Scan::from_fields(connection, ports_complete && details_complete)
}

/// `[lport] "key"[rport](portguid)`. Returns `None` when the prefix is unreadable.
fn scan_switch_ports(ports: &str, connection: &mut Connection) -> Option<bool> {
    let mut cursor = Cursor::new(ports);
    connection.local_port = cursor.delimited('[', ']').and_then(parse_dec)?;
    cursor.skip_ws();
    connection.remote_key = cursor.delimited('"', '"')?.to_string();

    let remote_port = cursor.delimited('[', ']').and_then(parse_dec);
    let port_guid = cursor.delimited('(', ')');
    if let Some(remote_port) = remote_port {
        connection.remote_port = remote_port;
    }
    if let Some(port_guid) = port_guid {
        connection.port_guid = port_guid.to_string();
    }
    Some(remote_port.is_some() && port_guid.is_some())
}

/// `[lport](portguid) "key"[rport]`. Returns `None` when the prefix is unreadable.
fn scan_adapter_ports(ports: &str, connection: &mut Connection) -> Option<bool> {
    let mut cursor = Cursor::new(ports);
    connection.local_port = cursor.delimited('[', ']').and_then(parse_dec)?;
    let port_guid = cursor.delimited('(', ')');
    if let Some(port_guid) = port_guid {
        connection.port_guid = port_guid.to_string();
    }
    cursor.skip_ws();
    connection.remote_key = cursor.delimited('"', '"')?.to_string();

    let remote_port = cursor.delimited('[', ']').and_then(parse_dec);
    if let Some(remote_port) = remote_port {
        connection.remote_port = remote_port;
    }
    Some(remote_port.is_some() && port_guid.is_some())
}

/// `"desc" lid <n> <widthspeed>`
fn scan_switch_details(details: &str, connection: &mut Connection) -> bool {
    let mut cursor = Cursor::new(details);
    let description = cursor.seek_quoted();
    cursor.word();
    let lid = cursor.number();
    let width_speed = cursor.word();

    if let Some(description) = description {
        connection.description = description.to_string();
    }
    if let Some(lid) = lid {
        connection.local_lid = lid;
    }
    if let Some(width_speed) = width_speed {
        connection.width_speed = width_speed.to_string();
    }
    description.is_some() && lid.is_some() && width_speed.is_some()
}

/// `lid <n> lmc <n> "desc" lid <n> <widthspeed>`
fn scan_adapter_details(details: &str, connection: &mut Connection) -> bool {
    let mut cursor = Cursor::new(details);
    cursor.word();
    let local_lid = cursor.number();
    cursor.word();
    let lmc = cursor.number();
    let description = cursor.seek_quoted();
    cursor.word();
    let remote_lid = cursor.number();
    let width_speed = cursor.word();

    if let Some(local_lid) = local_lid {
        connection.local_lid = local_lid;
    }
    if let Some(lmc) = lmc {
        connection.lmc = lmc;
    }
    if let Some(description) = description {
        connection.description = description.to_string();
    }
    if let Some(remote_lid) = remote_lid {
        connection.remote_lid = remote_lid;
    }
    if let Some(width_speed) = width_speed {
        connection.width_speed = width_speed.to_string();
    }
    local_lid.is_some()
        && lmc.is_some()
        && description.is_some()
        && remote_lid.is_some()
        && width_speed.is_some()
}

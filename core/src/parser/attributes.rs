use crate::parser::{Scan, parse_hex};

/// A single `name=hex` attribute line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    VendorId(u32),
    DeviceId(u32),
    SysImageGuid(u64),
    /// `switchguid=<hex>(<hex>)`. Either half may be unreadable.
    SwitchGuid {
        node: Option<u64>,
        port: Option<u64>,
    },
    CaGuid(u64),
}

/// Attribute that opens a new device record.
pub const RECORD_START: &str = "vendid";

pub fn starts_record(line: &str) -> bool {
    line.starts_with(RECORD_START)
}

pub fn scan(line: &str) -> Scan<Attribute> {
    let Some((name, value)) = line.split_once('=') else {
        return Scan::NotThisShape;
    };
    if value.trim().is_empty() {
        return Scan::NotThisShape;
    }

    let attribute = match name.trim_end() {
        "vendid" => hex_u32(value).map(Attribute::VendorId),
        "devid" => hex_u32(value).map(Attribute::DeviceId),
        "sysimgguid" => parse_hex(value).map(Attribute::SysImageGuid),
        "caguid" => parse_hex(value).map(Attribute::CaGuid),
        "switchguid" => return scan_switch_guid(value),
        _ => None,
    };

    match attribute {
        Some(attribute) => Scan::Matched(attribute),
        None => Scan::NotThisShape,
    }
}

fn hex_u32(value: &str) -> Option<u32> {
    parse_hex(value).and_then(|v| u32::try_from(v).ok())
}

fn scan_switch_guid(value: &str) -> Scan<Attribute> {
    let (node, port) = match value.split_once('(') {
        Some((node, port)) => (node, Some(port.trim_end_matches(')'))),
        None => (value, None),
    };
    let node = parse_hex(node);
    let port = port.and_then(parse_hex);

    match (node, port) {
        (None, None) => Scan::NotThisShape,
        (Some(_), Some(_)) => Scan::Matched(Attribute::SwitchGuid { node, port }),
        _ => Scan::Partial(Attribute::SwitchGuid { node, port }),
    }
}

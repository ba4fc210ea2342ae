//! # Parse Session
//!
//! The device accumulator. A session owns the record currently being built,
//! the committed [`DeviceGraph`] and the [`IdentityRegistry`], and is fed one
//! raw line at a time.
//!
//! Every content line is offered to the attribute, descriptor and connection
//! scanners, in that order. A `vendid` line opens a new record: the previous
//! one is committed first, unless it is still blank. Whatever is open at the
//! end of input is committed by [`ParseSession::finish`].

use ibtopo_common::topology::{Device, DeviceGraph, IdentityRegistry, NodeKind, Topology};
use tracing::{debug, trace};

use crate::parser::attributes::{self, Attribute};
use crate::parser::classify::{LineClass, classify};
use crate::parser::connection;
use crate::parser::descriptor::{self, Descriptor};

/// What happened to a line fed into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or comment line, nothing looked at it.
    Skipped,
    /// Offered to the scanners.
    Accepted,
    /// Offered to the scanners after committing the previous record.
    Committed,
}

#[derive(Debug, Default)]
pub struct ParseSession {
    /// Record being built. `None` until the first content line after a commit.
    current: Option<Device>,
    devices: DeviceGraph,
    identities: IdentityRegistry,
    lines_parsed: u64,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw line, terminator included or not.
    pub fn feed(&mut self, raw: &str) -> LineOutcome {
        let LineClass::Content(line) = classify(raw) else {
            return LineOutcome::Skipped;
        };
        self.lines_parsed += 1;

        let committed = attributes::starts_record(line) && self.commit();

        let device = self.current.get_or_insert_with(Device::default);
        if let Some(attribute) = attributes::scan(line).fields() {
            apply_attribute(device, attribute);
        }
        if let Some(descriptor) = descriptor::scan(line, device.kind).fields() {
            apply_descriptor(device, descriptor, &mut self.identities);
        }
        if let Some(connection) = connection::scan(line, device.kind).fields() {
            trace!(
                local_port = connection.local_port,
                remote = %connection.remote_key,
                remote_port = connection.remote_port,
                "connection"
            );
            device.connections.push(connection);
        }

        if committed {
            LineOutcome::Committed
        } else {
            LineOutcome::Accepted
        }
    }

    /// Moves the open record into the graph. Returns whether a device was added.
    fn commit(&mut self) -> bool {
        let Some(device) = self.current.take() else {
            return false;
        };
        let added = self.devices.commit(device);
        if added {
            debug!(devices = self.devices.len(), "device committed");
        }
        added
    }

    pub fn devices(&self) -> &DeviceGraph {
        &self.devices
    }

    pub fn identities(&self) -> &IdentityRegistry {
        &self.identities
    }

    /// Lines that survived classification so far.
    pub fn lines_parsed(&self) -> u64 {
        self.lines_parsed
    }

    /// Committed devices plus the open record, if anything has been read into it.
    pub fn devices_found(&self) -> usize {
        let open = self.current.as_ref().is_some_and(|device| !device.is_blank());
        self.devices.len() + usize::from(open)
    }

    /// Commits the open record and hands over the result.
    pub fn finish(mut self) -> Topology {
        self.commit();
        Topology {
            devices: self.devices,
            identities: self.identities,
        }
    }

    /// Hands over what has been committed so far, dropping the open record.
    pub fn checkpoint(self) -> Topology {
        if let Some(device) = self.current.as_ref().filter(|device| !device.is_blank()) {
            debug!(key = %device.node_key, "discarding unfinished device");
        }
        Topology {
            devices: self.devices,
            identities: self.identities,
        }
    }
}

fn apply_attribute(device: &mut Device, attribute: Attribute) {
    match attribute {
        Attribute::VendorId(vendor_id) => device.vendor_id = vendor_id,
        Attribute::DeviceId(device_id) => device.device_id = device_id,
        Attribute::SysImageGuid(guid) => device.sys_image_guid = guid,
        Attribute::SwitchGuid { node, port } => {
            if let Some(node) = node {
                device.node_guid = node;
                device.kind = NodeKind::Switch;
            }
            if let Some(port) = port {
                device.port_guid = port;
            }
        }
        Attribute::CaGuid(guid) => {
            device.node_guid = guid;
            device.kind = NodeKind::Adapter;
        }
    }
    trace!(?attribute, "attribute");
}

fn apply_descriptor(
    device: &mut Device,
    descriptor: Descriptor,
    identities: &mut IdentityRegistry,
) {
    if let Some(port_count) = descriptor.port_count {
        device.port_count = port_count;
    }
    if let Some(node_key) = descriptor.node_key {
        let identity = device.identity();
        if !identities.register(&node_key, identity) {
            debug!(key = %node_key, "node key is not resolvable");
        }
        device.node_key = node_key;
    }
    if let Some(description) = descriptor.description {
        device.description = description;
    }
    if let Some(base_port_type) = descriptor.base_port_type {
        device.base_port_type = base_port_type;
    }
    if let Some(base_port) = descriptor.base_port {
        device.base_port = base_port;
    }
    if let Some(lid) = descriptor.lid {
        device.lid = lid;
    }
    if let Some(lmc) = descriptor.lmc {
        device.lmc = lmc;
    }
    debug!(
        kind = device.kind.keyword(),
        key = %device.node_key,
        ports = device.port_count,
        "descriptor"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibtopo_common::topology::BasePortType;

    const SWITCH: &[&str] = &[
        "vendid=0x2c9",
        "devid=0x5a09",
        "sysimgguid=0x2c9000100d051",
        "switchguid=0x2c9000100d050(2c9000100d052)",
        "Switch\t36 \"S-0002c9000100d050\"\t\t# \"switch1\" base port 0 lid 1 lmc 0",
    ];

    fn feed_all(session: &mut ParseSession, lines: &[&str]) {
        for line in lines {
            session.feed(line);
        }
    }

    #[test]
    fn vendor_id_is_read_into_open_record() {
        let mut session = ParseSession::new();
        session.feed("vendid=0x2c9\n");
        let topology = session.finish();
        assert_eq!(topology.devices.devices()[0].vendor_id, 0x2c9);
    }

    #[test]
    fn switch_record_is_fully_populated() {
        let mut session = ParseSession::new();
        feed_all(&mut session, SWITCH);
        let topology = session.finish();

        let device = &topology.devices.devices()[0];
        assert_eq!(device.kind, NodeKind::Switch);
        assert_eq!(device.device_id, 0x5a09);
        assert_eq!(device.sys_image_guid, 0x2c9000100d051);
        assert_eq!(device.node_guid, 0x2c9000100d050);
        assert_eq!(device.port_guid, 0x2c9000100d052);
        assert_eq!(device.port_count, 36);
        assert_eq!(device.node_key, "S-0002c9000100d050");
        assert_eq!(device.description, "switch1");
        assert_eq!(device.base_port_type, BasePortType::Base);
        assert_eq!(device.lid, 1);
        assert_eq!(
            topology.identities.lookup("S-0002c9000100d050"),
            Some("0x2c9000100d050(2c9000100d052)")
        );
    }

    #[test]
    fn adapter_identity_has_no_port_guid() {
        let mut session = ParseSession::new();
        feed_all(
            &mut session,
            &[
                "vendid=0x2c9",
                "caguid=0x2c9000100d060",
                "Ca\t2 \"H-0002c9000100d060\"\t\t# \"host1\"",
            ],
        );
        let topology = session.finish();
        assert_eq!(topology.identities.lookup("H-0002c9000100d060"), Some("0x2c9000100d060"));
    }

    #[test]
    fn first_vendid_commits_nothing_later_ones_do() {
        let mut session = ParseSession::new();
        assert_eq!(session.feed("vendid=0x2c9"), LineOutcome::Accepted);
        assert!(session.devices().is_empty());

        session.feed("devid=0x5a09");
        assert_eq!(session.feed("vendid=0x2c9"), LineOutcome::Committed);
        assert_eq!(session.devices().len(), 1);
        assert_eq!(session.devices().devices()[0].device_id, 0x5a09);

        let topology = session.finish();
        assert_eq!(topology.devices.len(), 2);
    }

    #[test]
    fn blank_record_is_never_committed() {
        let mut session = ParseSession::new();
        feed_all(&mut session, &["garbage line", "vendid=zz"]);
        assert_eq!(session.feed("vendid=zz"), LineOutcome::Accepted);
        assert_eq!(session.finish().devices.len(), 0);
    }

    #[test]
    fn connections_keep_file_order() {
        let mut session = ParseSession::new();
        feed_all(&mut session, SWITCH);
        feed_all(
            &mut session,
            &[
                "[1]\t\"H-0002c9000100d060\"[1](2c9000100d061) \t\t# \"host1\" lid 2 4xQDR",
                "[2]\t\"H-0002c9000100d070\"[1](2c9000100d071) \t\t# \"host2\" lid 3 4xQDR",
                "[3]\t\"H-0002c9000100d080\"[1](2c9000100d081) \t\t# \"host3\" lid 4 4xQDR",
            ],
        );
        let topology = session.finish();
        let ports: Vec<u32> = topology.devices.devices()[0]
            .connections
            .iter()
            .map(|c| c.local_port)
            .collect();
        assert_eq!(ports, vec![1, 2, 3]);
    }

    #[test]
    fn comments_and_blank_lines_change_nothing() {
        let mut session = ParseSession::new();
        for line in ["", "\n", "# vendid=0x2c9", "#[1]\t\"S-0002c9000100d050\"[1]", "   \r\n"] {
            assert_eq!(session.feed(line), LineOutcome::Skipped);
        }
        assert_eq!(session.lines_parsed(), 0);
        assert_eq!(session.devices_found(), 0);
        assert!(session.finish().devices.is_empty());
    }

    #[test]
    fn malformed_values_keep_previous_fields() {
        let mut session = ParseSession::new();
        feed_all(&mut session, &["vendid=0x2c9", "devid=0x5a09", "devid=oops"]);
        let topology = session.finish();
        assert_eq!(topology.devices.devices()[0].device_id, 0x5a09);
    }

    #[test]
    fn checkpoint_drops_open_record() {
        let mut session = ParseSession::new();
        feed_all(&mut session, SWITCH);
        feed_all(&mut session, &["vendid=0x2c9", "caguid=0x2c9000100d060"]);
        assert_eq!(session.devices_found(), 2);

        let topology = session.checkpoint();
        assert_eq!(topology.devices.len(), 1);
        assert_eq!(topology.devices.devices()[0].kind, NodeKind::Switch);
    }

    #[test]
    fn short_node_key_still_commits_device() {
        let mut session = ParseSession::new();
        feed_all(
            &mut session,
            &["vendid=0x2c9", "caguid=0x10", "Ca\t2 \"H-0002c9\"\t\t# \"stub\""],
        );
        feed_all(&mut session, SWITCH);
        feed_all(&mut session, &["[1]\t\"H-0002c9\"[1]\t\t# \"stub\" lid 2 4x"]);
        let topology = session.finish();

        assert_eq!(topology.devices.len(), 2);
        assert_eq!(topology.devices.devices()[0].node_key, "H-0002c9");
        assert_eq!(topology.identities.len(), 1);
        assert_eq!(topology.resolve("H-0002c9"), None);

        let report = crate::render::render_report(&topology);
        assert!(report.contains("\tConnected to host: caguid=, port=1\n"), "{report}");
    }
}

//! # Report Rendering
//!
//! Walks a parsed [`Topology`] and writes it out, either as the resolved
//! report or back in the dump format it was read from.

use std::fmt::{self, Write};

use ibtopo_common::topology::{Device, DeviceGraph, NodeKind, Topology};

/// Renders the resolved report into a string.
pub fn render_report(topology: &Topology) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, topology);
    out
}

/// Writes one block per device, each connection resolved through the registry.
///
/// A remote key that was never registered renders as an empty identity.
pub fn write_report<W: Write>(out: &mut W, topology: &Topology) -> fmt::Result {
    for device in &topology.devices {
        writeln!(out, "{}:", device.kind.label())?;
        writeln!(out, "sysimgguid: 0x{:x}", device.sys_image_guid)?;
        let id_label = match device.kind {
            NodeKind::Switch => "switch_id",
            NodeKind::Adapter => "port_id",
        };
        writeln!(out, "{id_label}: {}", device.identity())?;

        for connection in &device.connections {
            let remote = connection.remote_kind();
            writeln!(
                out,
                "\tConnected to {}: {}={}, port={}",
                remote.relation(),
                remote.guid_attribute(),
                topology.resolve(&connection.remote_key).unwrap_or_default(),
                connection.remote_port
            )?;
        }

        writeln!(out)?;
    }
    Ok(())
}

/// Renders the committed devices back in dump format.
pub fn render_topology(devices: &DeviceGraph) -> String {
    let mut out = String::new();
    let _ = write_topology(&mut out, devices);
    out
}

pub fn write_topology<W: Write>(out: &mut W, devices: &DeviceGraph) -> fmt::Result {
    for device in devices {
        write_device(out, device)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_device<W: Write>(out: &mut W, device: &Device) -> fmt::Result {
    writeln!(out, "vendid=0x{:x}", device.vendor_id)?;
    writeln!(out, "devid=0x{:x}", device.device_id)?;
    writeln!(out, "sysimgguid=0x{:x}", device.sys_image_guid)?;
    write!(out, "{}=0x{:x}", device.kind.guid_attribute(), device.node_guid)?;
    if device.kind == NodeKind::Switch {
        write!(out, "({:x})", device.port_guid)?;
    }
    writeln!(out)?;

    write!(
        out,
        "{}\t{}\t\"{}\"\t\t# \"{}\"",
        device.kind.keyword(),
        device.port_count,
        device.node_key,
        device.description
    )?;
    if device.kind == NodeKind::Switch {
        write!(
            out,
            " {} port {} lid {} lmc {}",
            device.base_port_type, device.base_port, device.lid, device.lmc
        )?;
    }
    writeln!(out)?;

    for c in &device.connections {
        match c.kind {
            NodeKind::Switch => {
                write!(out, "[{}]\t\"{}\"[{}]", c.local_port, c.remote_key, c.remote_port)?;
                if !c.port_guid.is_empty() {
                    write!(out, "({})", c.port_guid)?;
                }
                writeln!(
                    out,
                    " \t\t# \"{}\" lid {} {}",
                    c.description, c.local_lid, c.width_speed
                )?;
            }
            NodeKind::Adapter => writeln!(
                out,
                "[{}]({}) \t\"{}\"[{}]\t\t# lid {} lmc {} \"{}\" lid {} {}",
                c.local_port,
                c.port_guid,
                c.remote_key,
                c.remote_port,
                c.local_lid,
                c.lmc,
                c.description,
                c.remote_lid,
                c.width_speed
            )?,
        }
    }
    Ok(())
}

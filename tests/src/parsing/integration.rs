#![cfg(test)]
use ibtopo_common::topology::{NodeKind, Topology};
use ibtopo_core::driver::{self, parse_str};
use ibtopo_core::{render, snapshot};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use super::FABRIC;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/fabric.topo")
}

/// Smallest fabric: one switch pointing at a host declared after it.
#[test]
fn two_device_file_resolves_switch_connection() {
    let dump = "\
vendid=0x2c9
devid=0x5a09
sysimgguid=0x2c9000100d051
switchguid=0x2c9000100d050(2c9000100d052)
Switch 36 \"S-0002c9000100d050\" # \"switch1\" base port 0 lid 1 lmc 0
[1] \"H-0002c9000100d060\"[1] # \"host1\" lid 2 4x
vendid=0x2c9
caguid=0x2c9000100d060
Ca 2 \"H-0002c9000100d060\" # \"host1\"
";
    let report = render::render_report(&parse_str(dump));

    assert!(
        report.contains("\tConnected to host: caguid=0x2c9000100d060, port=1\n"),
        "unexpected report:\n{report}"
    );
    assert!(report.starts_with(
        "Switch:\nsysimgguid: 0x2c9000100d051\nswitch_id: 0x2c9000100d050(2c9000100d052)\n"
    ));
}

/// Same lines without a second `vendid`: the adapter lines land in the open record.
#[test]
fn host_lines_without_record_start_still_resolve() {
    let dump = "\
vendid=0x2c9
devid=0x5a09
sysimgguid=0x2c9000100d051
switchguid=0x2c9000100d050(2c9000100d052)
Switch 36 \"S-0002c9000100d050\" # \"switch1\" base port 0 lid 1 lmc 0
[1] \"H-0002c9000100d060\"[1] # \"host1\" lid 2 4x
caguid=0x2c9000100d060
Ca 2 \"H-0002c9000100d060\" # \"host1\"
";
    let topology = parse_str(dump);
    assert_eq!(topology.devices.len(), 1);

    let report = render::render_report(&topology);
    assert!(report.contains("\tConnected to host: caguid=0x2c9000100d060, port=1\n"));
}

/// A descriptor key of the wrong length keeps its device but can't be referenced.
#[test]
fn short_node_key_device_committed_but_unresolvable() {
    let dump = "\
vendid=0x2c9
caguid=0x10
Ca 2 \"H-0002c9\" # \"stub\"
vendid=0x2c9
switchguid=0x2c9000100d050(2c9000100d052)
Switch 36 \"S-0002c9000100d050\" # \"switch1\" base port 0 lid 1 lmc 0
[1] \"H-0002c9\"[1] # \"stub\" lid 2 4x
";
    let topology = parse_str(dump);
    assert_eq!(topology.devices.len(), 2);
    assert_eq!(topology.identities.len(), 1);
    assert_eq!(topology.identities.lookup("H-0002c9"), None);

    let report = render::render_report(&topology);
    assert!(
        report.contains("\tConnected to host: caguid=, port=1\n"),
        "unexpected report:\n{report}"
    );
}

#[test]
fn fixture_devices_in_file_order() {
    let topology: Topology = parse_str(FABRIC);

    let keys: Vec<&str> = topology.devices.iter().map(|d| d.node_key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "H-0002c903000e0b70",
            "S-0002c903007b7870",
            "S-0002c903007b9990",
            "H-0002c903000e0c80",
        ]
    );
    assert_eq!(topology.identities.len(), 4);

    let leaf = &topology.devices.devices()[1];
    assert_eq!(leaf.kind, NodeKind::Switch);
    assert_eq!(leaf.description, "MF0;leaf01:SX6036/U1");
    let ports: Vec<u32> = leaf.connections.iter().map(|c| c.local_port).collect();
    assert_eq!(ports, vec![1, 2, 35, 36]);
}

#[test]
fn fixture_report_resolves_both_directions() {
    let report = render::render_report(&parse_str(FABRIC));
    let blocks: Vec<&str> = report.split("\n\n").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), 4);

    // node01 is declared before the leaf it points at.
    assert_eq!(
        blocks[0],
        "Host:\n\
         sysimgguid: 0x2c903000e0b73\n\
         port_id: 0x2c903000e0b70\n\
         \tConnected to switch: switchguid=0x2c903007b7870(2c903007b7870), port=1"
    );

    // node02 is declared after the leaf that points at it.
    assert!(blocks[1].contains("\tConnected to host: caguid=0x2c903000e0c80, port=1\n"));
    assert!(blocks[1].contains(
        "\tConnected to switch: switchguid=0x2c903007b9990(2c903007b9990), port=35\n"
    ));
}

#[test]
fn dangling_reference_renders_empty_and_keeps_going() {
    let report = render::render_report(&parse_str(FABRIC));
    let leaf = report.split("\n\n").nth(1).unwrap_or_default();

    let lines: Vec<&str> = leaf.lines().filter(|l| l.starts_with('\t')).collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "\tConnected to switch: switchguid=, port=36");
    assert!(report.contains("Host:\nsysimgguid: 0x2c903000e0c83\n"));
}

#[test]
fn parse_file_then_replay_snapshot() {
    let cancel = AtomicBool::new(false);
    let outcome = driver::parse_topology_file(&fixture_path(), &cancel, None).unwrap();
    assert!(!outcome.is_cancelled());

    let parsed = outcome.into_parsed();
    assert_eq!(parsed.stats.devices, 4);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("topology.last");
    let report = render::render_report(&parsed.topology);
    snapshot::save(&path, &report).unwrap();

    assert_eq!(snapshot::load(&path).unwrap(), report);
}

mod cancellation;
mod integration;

pub(crate) const FABRIC: &str = include_str!("../fixtures/fabric.topo");

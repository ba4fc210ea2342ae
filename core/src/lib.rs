//! # ibtopo core
//!
//! Turns a textual fabric discovery dump into a [`Topology`](ibtopo_common::topology::Topology)
//! and renders it.
//!
//! * **[`parser`]**: one scanner per line shape.
//! * **[`session`]**: the device accumulator driving the scanners.
//! * **[`driver`]**: reads files, reports progress, stops on cancellation.
//! * **[`render`]**: the resolved report and the dump re-emitter.
//! * **[`snapshot`]**: persistence of the last report.

pub mod driver;
pub mod parser;
pub mod render;
pub mod session;
pub mod snapshot;

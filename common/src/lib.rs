//! # ibtopo common types
//!
//! Shared building blocks for the topology parser:
//! * **[`topology`]**: devices, connections, the identity registry and the device graph.
//! * **[`config`]**: run configuration assembled by the CLI.
//! * **[`error`]**: the error taxonomy shared by the library crates.

pub mod config;
pub mod error;
pub mod topology;

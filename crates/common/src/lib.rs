//! Shared plumbing for the binaries in this workspace.

pub mod logging;

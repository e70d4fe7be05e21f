//! Subcommand implementations.

mod conversion_id;
mod extract;
mod pack_conversion;
mod pack_message;
mod validation_id;

use serde::Serialize;
use tracing::debug_span;

use crate::args::{CmdContext, Subcommand};

/// An identifier in both of its text forms.
#[derive(Debug, Serialize)]
struct IdOutput {
    hex: String,
    cb58: String,
}

/// Executes a subcommand.
pub(crate) fn exec_subc(cmd: Subcommand, ctx: &CmdContext) -> anyhow::Result<()> {
    let _span = debug_span!("subcommand", name = cmd.name()).entered();
    match cmd {
        Subcommand::ConversionId(subc) => conversion_id::exec(subc, ctx),
        Subcommand::ValidationId(subc) => validation_id::exec(subc, ctx),
        Subcommand::PackConversion(subc) => pack_conversion::exec(subc, ctx),
        Subcommand::PackMessage(subc) => pack_message::exec(subc, ctx),
        Subcommand::Extract(subc) => extract::exec(subc, ctx),
    }
}

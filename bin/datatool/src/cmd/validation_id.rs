//! `validation-id` subcommand: hashes a validation period.

use warp_msg_types::ValidationPeriod;

use super::IdOutput;
use crate::{
    args::{CmdContext, SubcValidationId},
    util::{print_json, read_json, to_hex},
};

/// Executes the `validation-id` subcommand.
pub(super) fn exec(cmd: SubcValidationId, _ctx: &CmdContext) -> anyhow::Result<()> {
    let period: ValidationPeriod = read_json(&cmd.input)?;
    let id = period.validation_id()?;
    print_json(&IdOutput {
        hex: to_hex(id.as_bytes()),
        cb58: id.to_cb58(),
    })
}

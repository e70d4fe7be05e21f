//! `conversion-id` subcommand: hashes conversion data.

use warp_msg_types::{ConversionData, calculate_conversion_id};

use super::IdOutput;
use crate::{
    args::{CmdContext, SubcConversionId},
    util::{print_json, read_json, to_hex},
};

/// Executes the `conversion-id` subcommand.
///
/// Validators may be listed in any order; they are sorted before hashing.
pub(super) fn exec(cmd: SubcConversionId, _ctx: &CmdContext) -> anyhow::Result<()> {
    let data: ConversionData = read_json(&cmd.input)?;
    let id = calculate_conversion_id(&data)?;
    print_json(&IdOutput {
        hex: to_hex(id.as_bytes()),
        cb58: id.to_cb58(),
    })
}

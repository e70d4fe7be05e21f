//! `pack-conversion` subcommand: builds the conversion warp message.

use tracing::info;
use warp_envelope::{UnsignedMessage, pack_l1_conversion_message};
use warp_msg_types::ConversionData;

use crate::{
    args::{CmdContext, SubcPackConversion},
    util::{read_json, to_hex},
};

/// Executes the `pack-conversion` subcommand.
///
/// Prints the packed unsigned message as hex.
pub(super) fn exec(cmd: SubcPackConversion, ctx: &CmdContext) -> anyhow::Result<()> {
    let data: ConversionData = read_json(&cmd.input)?;
    let network_id = ctx.network_id(cmd.network)?;
    let source_chain_id = ctx.source_chain_id(cmd.source_chain);

    let packed = pack_l1_conversion_message(network_id, &source_chain_id, &data)?;
    let msg_id = UnsignedMessage::unpack(&packed)?.id()?;
    info!(%network_id, %source_chain_id, %msg_id, len = packed.len(), "packed conversion message");

    println!("{}", to_hex(&packed));
    Ok(())
}

//! `pack-message` subcommand: wraps any payload kind in a warp message.

use tracing::info;
use warp_envelope::{UnsignedMessage, new_addressed_call, warp_access_tuple};
use warp_msg_types::Message;

use crate::{
    args::{CmdContext, SubcPackMessage},
    util::{parse_hex, print_json, read_json, to_hex},
};

/// Executes the `pack-message` subcommand.
pub(super) fn exec(cmd: SubcPackMessage, ctx: &CmdContext) -> anyhow::Result<()> {
    let msg: Message = read_json(&cmd.input)?;
    let network_id = ctx.network_id(cmd.network)?;
    let source_chain_id = ctx.source_chain_id(cmd.source_chain);
    let source_address = match &cmd.source_address {
        Some(s) => parse_hex(s)?,
        None => Vec::new(),
    };

    let payload = msg.pack()?;
    let call = new_addressed_call(&source_address, &payload)?;
    let unsigned = UnsignedMessage::new(network_id, source_chain_id, call);
    let packed = unsigned.pack()?;
    info!(
        kind = %msg.kind(),
        %network_id,
        msg_id = %unsigned.id()?,
        len = packed.len(),
        "packed warp message"
    );

    if cmd.access_list {
        print_json(&warp_access_tuple(&packed))
    } else {
        println!("{}", to_hex(&packed));
        Ok(())
    }
}

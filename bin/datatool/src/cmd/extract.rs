//! `extract` subcommand: decodes a packed warp message.

use anyhow::Context;
use tracing::debug;
use warp_envelope::{
    extract_message, extract_payload_from_addressed_call, extract_payload_from_warp_message,
};
use warp_msg_types::{Message, MessageKind};

use crate::{
    args::{CmdContext, SubcExtract},
    util::{parse_hex, print_json},
};

const MALFORMED: &str = "malformed warp message data";

/// Executes the `extract` subcommand.
///
/// Without a kind, every kind is tried in turn and the first that decodes
/// wins. Kinds sharing a type ID still differ in length, so this is only
/// ambiguous for truncated or padded input.
pub(super) fn exec(cmd: SubcExtract, _ctx: &CmdContext) -> anyhow::Result<()> {
    let bytes = parse_hex(&cmd.message)?;

    let msg = match cmd.kind {
        Some(kind) => extract_message(&bytes, kind).context(MALFORMED)?,
        None => {
            let call = extract_payload_from_warp_message(&bytes).context(MALFORMED)?;
            let payload = extract_payload_from_addressed_call(call).context(MALFORMED)?;
            Message::probe(payload, &MessageKind::ALL).context(MALFORMED)?
        }
    };
    debug!(kind = %msg.kind(), "extracted message");

    print_json(&msg)
}

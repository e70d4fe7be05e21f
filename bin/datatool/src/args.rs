use std::{env, path::PathBuf};

use argh::FromArgs;
use warp_common::logging::{self, FmtSpan, LoggerConfig};
use warp_config::{DatatoolConfig, NETWORK_ENVVAR};
use warp_envelope::{Network, NetworkId};
use warp_identifiers::ChainId;
use warp_msg_types::MessageKind;

/// Args.
#[derive(FromArgs)]
pub(crate) struct Args {
    #[argh(option, description = "path to a TOML config file", short = 'C')]
    pub(crate) config: Option<PathBuf>,

    #[argh(
        option,
        description = "network [mainnet, fuji, local or a numeric id] (default fuji)",
        short = 'n'
    )]
    pub(crate) network: Option<Network>,

    #[argh(switch, description = "log as JSON")]
    pub(crate) json_logs: bool,

    #[argh(switch, description = "log at debug level", short = 'v')]
    pub(crate) verbose: bool,

    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    ConversionId(SubcConversionId),
    ValidationId(SubcValidationId),
    PackConversion(SubcPackConversion),
    PackMessage(SubcPackMessage),
    Extract(SubcExtract),
}

impl Subcommand {
    /// Name the subcommand is invoked by.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::ConversionId(_) => "conversion-id",
            Self::ValidationId(_) => "validation-id",
            Self::PackConversion(_) => "pack-conversion",
            Self::PackMessage(_) => "pack-message",
            Self::Extract(_) => "extract",
        }
    }
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "conversion-id",
    description = "computes the conversion id of conversion data"
)]
pub(crate) struct SubcConversionId {
    #[argh(option, description = "conversion data .json", short = 'i')]
    pub(crate) input: PathBuf,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "validation-id",
    description = "computes the validation id of a validation period"
)]
pub(crate) struct SubcValidationId {
    #[argh(option, description = "validation period .json", short = 'i')]
    pub(crate) input: PathBuf,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "pack-conversion",
    description = "packs the subnet-to-L1 conversion warp message"
)]
pub(crate) struct SubcPackConversion {
    #[argh(option, description = "conversion data .json", short = 'i')]
    pub(crate) input: PathBuf,

    #[argh(option, description = "network, overrides the global option", short = 'n')]
    pub(crate) network: Option<Network>,

    #[argh(
        option,
        description = "source chain id, cb58 or hex (default P-Chain)",
        short = 'c'
    )]
    pub(crate) source_chain: Option<ChainId>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "pack-message",
    description = "packs a kind-tagged message into a warp message"
)]
pub(crate) struct SubcPackMessage {
    #[argh(option, description = "message .json, tagged by \"kind\"", short = 'i')]
    pub(crate) input: PathBuf,

    #[argh(option, description = "network, overrides the global option", short = 'n')]
    pub(crate) network: Option<Network>,

    #[argh(
        option,
        description = "source chain id, cb58 or hex (default P-Chain)",
        short = 'c'
    )]
    pub(crate) source_chain: Option<ChainId>,

    #[argh(
        option,
        description = "addressed call source address as hex (default empty)",
        short = 's'
    )]
    pub(crate) source_address: Option<String>,

    #[argh(switch, description = "print as warp precompile access list entry")]
    pub(crate) access_list: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "extract",
    description = "decodes a packed warp message down to its payload"
)]
pub(crate) struct SubcExtract {
    #[argh(positional, description = "packed warp message as hex")]
    pub(crate) message: String,

    #[argh(
        option,
        description = "payload kind (default: first kind that decodes)",
        short = 'k'
    )]
    pub(crate) kind: Option<MessageKind>,
}

pub(crate) struct CmdContext {
    /// Loaded config, defaults if no file was given.
    pub(crate) config: DatatoolConfig,

    /// Network from the global flag.
    pub(crate) network: Option<Network>,
}

impl CmdContext {
    /// Resolves the network ID, preferring a subcommand-level flag.
    pub(crate) fn network_id(&self, arg: Option<Network>) -> anyhow::Result<NetworkId> {
        let env_value = env::var(NETWORK_ENVVAR).ok();
        let network = self
            .config
            .resolve_network(arg.or(self.network), env_value.as_deref())?;
        Ok(network.network_id())
    }

    pub(crate) fn source_chain_id(&self, arg: Option<ChainId>) -> ChainId {
        arg.unwrap_or_else(|| self.config.source_chain_id())
    }
}

/// Resolves the command context and subcommand from the parsed command line arguments.
pub(crate) fn resolve_context_and_subcommand(
    args: Args,
) -> anyhow::Result<(CmdContext, Subcommand)> {
    let config = match &args.config {
        Some(path) => DatatoolConfig::load(path)?,
        None => DatatoolConfig::default(),
    };

    let mut lconfig = LoggerConfig::new("warp-datatool".to_string())
        .with_json_logging(args.json_logs || config.logging.json_format);
    if args.verbose {
        lconfig = lconfig
            .with_filter("debug")
            .with_fmt_span(FmtSpan::CLOSE);
    } else if let Some(filter) = &config.logging.filter {
        lconfig = lconfig.with_filter(filter.clone());
    }
    logging::init(lconfig);

    let ctx = CmdContext {
        config,
        network: args.network,
    };

    Ok((ctx, args.subc))
}

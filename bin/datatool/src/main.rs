//! Command line tool for packing and inspecting Warp validator messages.
//!
//! # Warning
//!
//! This tool is intended for use in testing and development only. Nothing it
//! prints is signed.

mod args;
mod cmd;
mod util;

use std::process;

use args::resolve_context_and_subcommand;
use cmd::exec_subc;

fn main() {
    let args: args::Args = argh::from_env();
    let inner = || -> anyhow::Result<()> {
        let (ctx, subc) = resolve_context_and_subcommand(args)?;
        exec_subc(subc, &ctx)?;
        Ok(())
    };
    if let Err(e) = inner() {
        eprintln!("ERROR\n{e:?}");
        process::exit(1);
    }
}

//! CLI command handler: build filter and options from flags, list each root.

use anyhow::Result;
use std::io::{self, BufWriter};

use crate::engine::arg_parser::Cli;
use crate::engine::modes::apply_type;
use crate::utils::setup_logging;
use crate::utils::signal::reset_sigpipe;
use crate::{ModeFilter, Opts, list_dirs};

fn setup_opts(cli: &Cli) -> Result<Opts> {
    setup_logging(cli.verbose);
    let mut filter = ModeFilter {
        must_set: cli.must_set.unwrap_or(0),
        must_unset: cli.must_unset.unwrap_or(0),
        any_set: cli.any_set.unwrap_or(0),
        any_unset: cli.any_unset.unwrap_or(0),
    };
    if let Some(token) = &cli.file_type {
        apply_type(&mut filter, token)?;
    }
    Ok(Opts {
        nul_output: cli.nul,
        escape: cli.escape,
        buffered: cli.buffered,
        parents: cli.parents,
        no_hidden: cli.no_hidden,
        source: cli.source,
        one: cli.one,
        debug: cli.debug,
        recurse: cli.recurse,
        indirect: cli.indirect,
        nul_input: cli.read0,
        filter,
    })
}

/// Run one invocation: every failure short of a bad -t token is logged and
/// skipped, so the exit status is non-zero only for that one error.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli)?;
    reset_sigpipe();
    let stdout = io::stdout().lock();
    list_dirs(&cli.roots(), &opts, BufWriter::new(stdout))?;
    Ok(())
}

//! CLI argument definitions for `mpdc`.
//!
//! Connection flags (`--host`, `--port`, and friends) are split off before
//! parsing and handed to the configuration loader, so only output selection
//! and the command tokens are declared here.

use clap::Parser;

use crate::output::OutputFormat;

/// Command-line interface for the music daemon client.
#[derive(Parser, Debug)]
#[command(
    name = "mpdc",
    about = "Control a Music Player Daemon from the command line",
    after_help = "Connection flags (before COMMAND): --host, --port, --password, --timeout, \
                  --log-filter, --log-format, --config-path.\nRun 'mpdc help' to list commands.",
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub(crate) struct Cli {
    /// Controls how responses are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub(crate) output: OutputFormat,
    /// The command to run (for example `status`), or `help`.
    #[arg(value_name = "COMMAND")]
    pub(crate) command: Option<String>,
    /// Positional arguments for the command.
    #[arg(
        value_name = "ARG",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub(crate) arguments: Vec<String>,
}

impl Cli {
    /// Returns true when no command was supplied.
    pub(crate) fn is_bare_invocation(&self) -> bool {
        self.command
            .as_deref()
            .is_none_or(|command| command.trim().is_empty())
    }
}

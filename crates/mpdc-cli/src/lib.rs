//! Command-line runtime for the `mpdc` music daemon client.
//!
//! The module owns argument parsing, configuration bootstrapping, command
//! validation, and dispatch to the daemon. The runtime is driven both from
//! the binary entrypoint and from tests, where configuration loading and the
//! output streams are substituted.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod dispatch;
mod errors;
mod help;
mod output;
mod registry;
mod telemetry;

use cli::Cli;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use config::{command_arguments, split_config_arguments};
pub(crate) use errors::AppError;
pub use output::OutputFormat;
use output::Printer;

const HELP_COMMAND: &str = "help";

/// Bundles the output streams handed to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

struct CliRunner<'a, W: Write, E: Write, L: ConfigLoader> {
    io: &'a mut IoStreams<'a, W, E>,
    loader: &'a L,
}

impl<'a, W, E, L> CliRunner<'a, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    fn new(io: &'a mut IoStreams<'a, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        match self.try_run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(AppError::BareInvocation) => ExitCode::FAILURE,
            Err(AppError::CliUsage(error)) if !error.use_stderr() => {
                let _ = write!(self.io.stdout, "{error}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                let _ = writeln!(self.io.stderr, "{error}");
                ExitCode::FAILURE
            }
        }
    }

    fn try_run<I>(&mut self, args: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let cli = Cli::try_parse_from(command_arguments(&args, &split))
            .map_err(AppError::CliUsage)?;

        if cli.is_bare_invocation() {
            help::write_bare_invocation_help(&mut *self.io.stderr)?;
            return Err(AppError::BareInvocation);
        }
        let name = cli.command.as_deref().unwrap_or_default();
        if name == HELP_COMMAND {
            let topic = cli.arguments.first().map(String::as_str);
            return help::write_help(&mut *self.io.stdout, topic);
        }

        let descriptor =
            registry::lookup(name).ok_or_else(|| AppError::UnknownCommand(name.to_owned()))?;
        let command = descriptor.spec.bind(cli.arguments.as_slice())?;

        let config = self.loader.load(&split.config_arguments)?;
        telemetry::initialise(&config)?;

        let mut printer = Printer::new(&mut *self.io.stdout, cli.output);
        dispatch::execute(descriptor, &command, &config, &mut printer)
    }
}

/// Runs the CLI using the provided arguments and output streams.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<'a, I, W, E, L>(
    args: I,
    io: &'a mut IoStreams<'a, W, E>,
    loader: &'a L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}

#[cfg(test)]
mod tests;

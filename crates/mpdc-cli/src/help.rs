//! `mpdc help [COMMAND]` rendering.

use std::io::Write;

use crate::AppError;
use crate::registry::{self, Category, CommandDescriptor};

const BARE_INVOCATION_HELP: &str = "Usage: mpdc [CONNECTION FLAGS] <COMMAND> [ARG]...\n\n\
Run 'mpdc help' to list commands or 'mpdc help <COMMAND>' for one command.\n";

/// Writes the command list, or one command's usage when `command` is given.
pub(crate) fn write_help<W: Write>(stdout: &mut W, command: Option<&str>) -> Result<(), AppError> {
    match command {
        Some(name) => {
            let descriptor =
                registry::lookup(name).ok_or_else(|| AppError::UnknownCommand(name.to_owned()))?;
            write_command_help(stdout, descriptor)
        }
        None => write_command_list(stdout),
    }
    .map_err(AppError::WriteOutput)
}

/// Short guidance for an invocation without a command.
pub(crate) fn write_bare_invocation_help<W: Write>(stderr: &mut W) -> Result<(), AppError> {
    stderr
        .write_all(BARE_INVOCATION_HELP.as_bytes())
        .map_err(AppError::WriteOutput)
}

fn write_command_list<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Usage: mpdc [CONNECTION FLAGS] <COMMAND> [ARG]...")?;
    for category in Category::ALL {
        writeln!(out)?;
        writeln!(out, "{category} commands:")?;
        for descriptor in registry::commands()
            .iter()
            .filter(|descriptor| descriptor.category == category)
        {
            writeln!(
                out,
                "  {:<14} {}",
                descriptor.spec.name, descriptor.spec.description
            )?;
        }
    }
    Ok(())
}

fn write_command_help<W: Write>(out: &mut W, descriptor: &CommandDescriptor) -> std::io::Result<()> {
    let spec = &descriptor.spec;
    writeln!(out, "Usage: mpdc {}", spec.usage())?;
    writeln!(out)?;
    writeln!(out, "{}", spec.description)?;
    if !spec.params.is_empty() {
        writeln!(out)?;
        writeln!(out, "Arguments:")?;
        for param in spec.params {
            writeln!(
                out,
                "  {:<12} {} ({})",
                param.usage(),
                param.description,
                param.pattern.describe()
            )?;
        }
    }
    Ok(())
}

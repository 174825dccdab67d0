//! CLI entrypoint for the `mpdc` music daemon client.
//!
//! The binary delegates to [`mpdc_cli::run`], which loads configuration,
//! validates the requested command, and runs it against the daemon.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    mpdc_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}

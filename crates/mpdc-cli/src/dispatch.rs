//! Runs one bound command over a fresh session.

use mpdc_config::Config;
use mpdc_core::command::Command;
use mpdc_core::{Session, SessionOptions};
use tracing::debug;

use crate::AppError;
use crate::output::Printer;
use crate::registry::CommandDescriptor;

/// Opens a session, authenticates when a password is configured, runs the
/// behaviour, and closes the session.
///
/// A behaviour failure wins over a failure to close.
pub(crate) fn execute(
    descriptor: &CommandDescriptor,
    command: &Command<'_>,
    config: &Config,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let options = SessionOptions::default().with_read_timeout(config.read_timeout());
    let endpoint = config.endpoint();
    debug!(%endpoint, command = descriptor.spec.name, "dispatching command");
    let mut session = Session::open(&endpoint, &options)?;

    let outcome = authenticate(&mut session, config)
        .and_then(|()| (descriptor.behavior)(command, &mut session, printer))
        .and_then(|()| printer.flush());
    let closed = if session.is_open() {
        session.close().map_err(AppError::from)
    } else {
        Ok(())
    };
    outcome.and(closed)
}

fn authenticate(session: &mut Session, config: &Config) -> Result<(), AppError> {
    if let Some(password) = config.password() {
        session.authenticate(password)?;
    }
    Ok(())
}

use mpdc_core::{ClientError, Session, TransportError};
use mpdc_core::command::Command;
use mpdc_core::command::line::Request;

use super::{print_record, with_optional};
use crate::AppError;
use crate::output::Printer;

pub(crate) fn disableoutput(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("disableoutput").arg(command.int("id", 0));
    print_record(session, printer, &request)
}

pub(crate) fn enableoutput(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("enableoutput").arg(command.int("id", 0));
    print_record(session, printer, &request)
}

pub(crate) fn kill(
    _command: &Command<'_>,
    session: &mut Session,
    _printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    session.send("kill")?;
    // The daemon hangs up instead of answering.
    match session.receive() {
        Ok(_) | Err(ClientError::Transport(TransportError::ConnectionClosed)) => Ok(()),
        Err(error) => Err(error.into()),
    }
}

/// Prints the `updating_db` job id.
pub(crate) fn update(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = with_optional(Request::new("update"), command.value("path"));
    print_record(session, printer, &request)
}

use mpdc_core::Session;
use mpdc_core::command::Command;
use mpdc_core::command::line::Request;

use super::{print_list, print_record};
use crate::AppError;
use crate::output::{Printer, on_off};

pub(crate) fn status(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_record(session, printer, &Request::new("status"))
}

/// `[state] vol: N%, repeat on|off, single .., random .., consume ..`
pub(crate) fn simplestatus(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let status = session.send_single_record_request("status")?;
    printer.summary(&status, |status| {
        let flag = |key: &str| on_off(status.get(key).unwrap_or_default());
        format!(
            "[{}] vol: {}%, repeat {}, single {}, random {}, consume {}",
            status.get("state").unwrap_or_default(),
            status.get("volume").unwrap_or_default(),
            flag("repeat"),
            flag("single"),
            flag("random"),
            flag("consume"),
        )
    })
}

pub(crate) fn stats(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_record(session, printer, &Request::new("stats"))
}

pub(crate) fn outputs(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_list(session, printer, &Request::new("outputs"))
}

pub(crate) fn commands(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_list(session, printer, &Request::new("commands"))
}

pub(crate) fn notcommands(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_list(session, printer, &Request::new("notcommands"))
}

pub(crate) fn tagtypes(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_list(session, printer, &Request::new("tagtypes"))
}

pub(crate) fn urlhandlers(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_list(session, printer, &Request::new("urlhandlers"))
}

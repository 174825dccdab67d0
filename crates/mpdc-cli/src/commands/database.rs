use mpdc_core::Session;
use mpdc_core::command::Command;
use mpdc_core::command::line::Request;

use super::{print_list, print_values, with_optional};
use crate::AppError;
use crate::output::Printer;

fn tag_query(name: &str, command: &Command<'_>) -> Request {
    Request::new(name)
        .quoted(command.string("tag", "any"))
        .quoted(command.string("term", ""))
}

pub(crate) fn find(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_list(session, printer, &tag_query("find", command))
}

pub(crate) fn search(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_list(session, printer, &tag_query("search", command))
}

pub(crate) fn count(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_list(session, printer, &tag_query("count", command))
}

/// Prints the unique values of `tag1`, one per line.
///
/// Filtering by `tag2` needs a `term`; that is checked before anything is
/// sent.
pub(crate) fn list(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let mut request = Request::new("list").quoted(command.string("tag1", "any"));
    if let Some(tag2) = command.value("tag2") {
        let term = command.value("term").ok_or(AppError::MissingListTerm)?;
        request = request.quoted(tag2).quoted(term);
    }
    print_values(session, printer, &request, |_| true)
}

pub(crate) fn listall(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = with_optional(Request::new("listall"), command.value("path"));
    print_values(session, printer, &request, |_| true)
}

pub(crate) fn listallinfo(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = with_optional(Request::new("listallinfo"), command.value("path"));
    print_list(session, printer, &request)
}

/// Prints directory and file names only.
pub(crate) fn lsinfo(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = with_optional(Request::new("lsinfo"), command.value("path"));
    print_values(session, printer, &request, |key| {
        matches!(key, "directory" | "file")
    })
}

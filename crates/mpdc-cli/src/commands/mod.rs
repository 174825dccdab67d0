//! Behaviours behind each registry entry.
//!
//! A behaviour turns a bound command into one or more request lines, sends
//! them over the session, and prints what comes back. Most commands print
//! the decoded response as is; a few render a one-line summary instead.

pub(crate) mod admin;
pub(crate) mod database;
pub(crate) mod info;
pub(crate) mod playback;
pub(crate) mod playlist;

use mpdc_core::command::line::Request;
use mpdc_core::{Record, Session};

use crate::AppError;
use crate::output::Printer;

/// Sends `request` and prints the fields of the single record it yields.
fn print_record(
    session: &mut Session,
    printer: &mut Printer<'_>,
    request: &Request,
) -> Result<(), AppError> {
    let record = session.send_single_record_request(request.as_str())?;
    printer.record(&record)
}

/// Sends `request` and prints every record of the list it yields.
fn print_list(
    session: &mut Session,
    printer: &mut Printer<'_>,
    request: &Request,
) -> Result<(), AppError> {
    let records = session.send_list_request(request.as_str())?;
    printer.records(&records)
}

/// Sends `request` and prints only the values whose key passes `keep`.
fn print_values(
    session: &mut Session,
    printer: &mut Printer<'_>,
    request: &Request,
    keep: impl Fn(&str) -> bool,
) -> Result<(), AppError> {
    let records = session.send_list_request(request.as_str())?;
    printer.values(&records, keep)
}

/// Appends `value` quoted when it is present.
fn with_optional(request: Request, value: Option<&str>) -> Request {
    match value {
        Some(value) => request.quoted(value),
        None => request,
    }
}

/// `Artist - Album - Title (mm:ss)`, the song line shared by summaries.
fn song_line(song: &Record) -> String {
    format!(
        "{} - {} - {} ({})",
        song.string("Artist", ""),
        song.string("Album", ""),
        song.string("Title", ""),
        crate::output::format_duration(song.int64("Time", 0)),
    )
}

//! Decoding of daemon responses.
//!
//! A response is zero or more `key: value` lines ended by `OK`, or an error
//! line starting with `ACK `. Lines are trimmed and blank lines skipped. A
//! field named `error` is an older way of reporting failure and is treated
//! like `ACK`.
//!
//! List responses carry no entry delimiter. A new entry begins whenever a key
//! repeats within the entry being built. This only holds while every entity
//! emits each field at most once and shares its first field with the next;
//! an entity with a duplicated field, or one missing the leading field, is
//! split in the wrong place. The behaviour matches what the daemon's other
//! clients expect and is kept as is.

use std::io::BufRead;
use std::mem;

use tracing::debug;

use crate::error::{ACK_PREFIX, ClientError, ProtocolError, TransportError};
use crate::record::{Record, RecordList};

/// Line that ends a successful response.
pub const OK_TERMINATOR: &str = "OK";

const LEGACY_ERROR_KEY: &str = "error";

/// Reads one response into a single record.
///
/// Repeated keys overwrite earlier values.
///
/// # Errors
///
/// Returns [`ClientError::Protocol`] for daemon error lines,
/// [`ClientError::MalformedResponse`] for lines without a `:`, and
/// [`ClientError::Transport`] when the stream fails or ends before `OK`.
pub fn read_record<R: BufRead>(reader: &mut R) -> Result<Record, ClientError> {
    let mut record = Record::new();
    read_fields(reader, |key, value| {
        record.insert(key, value);
    })?;
    debug!(fields = record.len(), "decoded record");
    Ok(record)
}

/// Reads one response into a list of records split on key repetition.
///
/// A response holding only `OK` yields an empty list.
///
/// # Errors
///
/// Fails like [`read_record`]; no partial list is returned.
pub fn read_record_list<R: BufRead>(reader: &mut R) -> Result<RecordList, ClientError> {
    let mut records = RecordList::new();
    let mut current = Record::new();
    read_fields(reader, |key, value| {
        if current.contains_key(key) {
            records.push(mem::take(&mut current));
        }
        current.insert(key, value);
    })?;
    if !current.is_empty() {
        records.push(current);
    }
    debug!(records = records.len(), "decoded record list");
    Ok(records)
}

enum Line<'a> {
    Blank,
    Terminator,
    Field(&'a str, &'a str),
}

fn classify(raw: &str) -> Result<Line<'_>, ClientError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(Line::Blank);
    }
    if line == OK_TERMINATOR {
        return Ok(Line::Terminator);
    }
    if line.starts_with(ACK_PREFIX) {
        return Err(ProtocolError::from_line(line).into());
    }
    let Some((key, value)) = line.split_once(':') else {
        return Err(ClientError::MalformedResponse {
            line: line.to_owned(),
        });
    };
    if key == LEGACY_ERROR_KEY {
        return Err(ProtocolError::from_line(line).into());
    }
    Ok(Line::Field(key, value.trim()))
}

/// Feeds each field to `on_field` until the terminator.
///
/// A malformed line stops field delivery but the rest of the response is
/// still consumed, so the stream stays aligned on the next response.
fn read_fields<R, F>(reader: &mut R, mut on_field: F) -> Result<(), ClientError>
where
    R: BufRead,
    F: FnMut(&str, &str),
{
    let mut buffer = String::new();
    let mut malformed: Option<String> = None;
    loop {
        buffer.clear();
        let read = reader
            .read_line(&mut buffer)
            .map_err(TransportError::Read)?;
        if read == 0 {
            return Err(TransportError::ConnectionClosed.into());
        }
        match classify(&buffer) {
            Ok(Line::Blank) => {}
            Ok(Line::Terminator) => {
                return malformed.map_or(Ok(()), |line| {
                    Err(ClientError::MalformedResponse { line })
                });
            }
            Ok(Line::Field(key, value)) => {
                if malformed.is_none() {
                    on_field(key, value);
                }
            }
            Err(ClientError::MalformedResponse { line }) => {
                debug!(%line, "skipping rest of malformed response");
                malformed.get_or_insert(line);
            }
            Err(error) => return Err(error),
        }
    }
}

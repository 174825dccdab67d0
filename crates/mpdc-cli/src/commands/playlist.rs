use mpdc_core::Session;
use mpdc_core::command::Command;
use mpdc_core::command::line::Request;

use super::{print_list, print_record, print_values, song_line};
use crate::AppError;
use crate::output::Printer;

pub(crate) fn add(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("add").quoted(command.string("path", ""));
    print_record(session, printer, &request)
}

/// Prints the `Id` the daemon assigns.
pub(crate) fn addid(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let mut request = Request::new("addid").quoted(command.string("path", ""));
    if command.has("pos") {
        request = request.arg(command.int("pos", 0));
    }
    print_record(session, printer, &request)
}

pub(crate) fn clear(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_record(session, printer, &Request::new("clear"))
}

/// `[pos/songs] Artist - Album - Title (mm:ss)`
pub(crate) fn current(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let song = session.send_single_record_request("currentsong")?;
    let stats = session.send_single_record_request("stats")?;
    printer.summary(&song, |song| {
        format!(
            "[{}/{}] {}",
            song.string("Pos", ""),
            stats.string("songs", ""),
            song_line(song),
        )
    })
}

pub(crate) fn delete(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("delete").arg(command.int("pos", 0));
    print_record(session, printer, &request)
}

pub(crate) fn deleteid(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("deleteid").arg(command.int("id", 0));
    print_record(session, printer, &request)
}

pub(crate) fn load(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("load").quoted(command.string("name", ""));
    print_record(session, printer, &request)
}

pub(crate) fn rename(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("rename")
        .quoted(command.string("oldname", ""))
        .quoted(command.string("newname", ""));
    print_record(session, printer, &request)
}

pub(crate) fn move_song(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("move")
        .arg(command.int("src", 0))
        .arg(command.int("dest", 0));
    print_record(session, printer, &request)
}

pub(crate) fn moveid(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("moveid")
        .arg(command.int("src", 0))
        .arg(command.int("dest", 0));
    print_record(session, printer, &request)
}

pub(crate) fn plinfo(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let mut request = Request::new("playlistinfo");
    if command.has("pos") {
        request = request.arg(command.int("pos", 0));
    }
    print_list(session, printer, &request)
}

pub(crate) fn plchanges(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("plchanges").arg(command.int64("version", 0));
    print_list(session, printer, &request)
}

/// `id: N, cpos: N` per changed song.
pub(crate) fn plchangesid(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("plchangesposid").arg(command.int64("version", 0));
    let changes = session.send_list_request(request.as_str())?;
    changes.iter().try_for_each(|change| {
        printer.summary(change, |change| {
            format!(
                "id: {}, cpos: {}",
                change.string("Id", ""),
                change.string("cpos", ""),
            )
        })
    })
}

pub(crate) fn rm(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("rm").quoted(command.string("name", ""));
    print_record(session, printer, &request)
}

pub(crate) fn save(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("save").quoted(command.string("name", ""));
    print_record(session, printer, &request)
}

pub(crate) fn shuffle(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_record(session, printer, &Request::new("shuffle"))
}

pub(crate) fn swap(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("swap")
        .arg(command.int("pos1", 0))
        .arg(command.int("pos2", 0));
    print_record(session, printer, &request)
}

pub(crate) fn swapid(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("swapid")
        .arg(command.int("id1", 0))
        .arg(command.int("id2", 0));
    print_record(session, printer, &request)
}

/// Prints file names only.
pub(crate) fn listpl(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("listplaylist").quoted(command.string("name", ""));
    print_values(session, printer, &request, |_| true)
}

pub(crate) fn listplinfo(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("listplaylistinfo").quoted(command.string("name", ""));
    print_list(session, printer, &request)
}

pub(crate) fn pladd(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("playlistadd")
        .quoted(command.string("name", ""))
        .quoted(command.string("path", ""));
    print_record(session, printer, &request)
}

pub(crate) fn plclear(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("playlistclear").quoted(command.string("name", ""));
    print_record(session, printer, &request)
}

pub(crate) fn pldelete(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("playlistdelete")
        .quoted(command.string("name", ""))
        .arg(command.int("id", 0));
    print_record(session, printer, &request)
}

pub(crate) fn plmove(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("playlistmove")
        .quoted(command.string("name", ""))
        .arg(command.int("id", 0))
        .arg(command.int("pos", 0));
    print_record(session, printer, &request)
}

/// `[pos:id] Artist - Album - Title (mm:ss)` per match, with position and
/// id right-aligned to six columns.
pub(crate) fn plsearch(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("playlistsearch")
        .quoted(command.string("tag", ""))
        .quoted(command.string("term", ""));
    let matches = session.send_list_request(request.as_str())?;
    matches.iter().try_for_each(|song| {
        printer.summary(song, |song| {
            format!(
                "[{:>6}:{:>6}] {}",
                song.string("Pos", ""),
                song.string("Id", ""),
                song_line(song),
            )
        })
    })
}

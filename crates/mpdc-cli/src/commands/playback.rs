use mpdc_core::Session;
use mpdc_core::command::Command;
use mpdc_core::command::line::Request;

use super::print_record;
use crate::AppError;
use crate::output::Printer;

const MAX_VOLUME: i32 = 100;

fn switch(command: &Command<'_>) -> u8 {
    u8::from(command.bool("toggle", false))
}

pub(crate) fn crossfade(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("crossfade").arg(command.int("time", 0));
    print_record(session, printer, &request)
}

pub(crate) fn next(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_record(session, printer, &Request::new("next"))
}

pub(crate) fn pause(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("pause").arg(switch(command));
    print_record(session, printer, &request)
}

pub(crate) fn play(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("play").arg(command.int("pos", 0));
    print_record(session, printer, &request)
}

pub(crate) fn playid(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("playid").arg(command.int("id", 0));
    print_record(session, printer, &request)
}

pub(crate) fn previous(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_record(session, printer, &Request::new("previous"))
}

pub(crate) fn random(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("random").arg(switch(command));
    print_record(session, printer, &request)
}

pub(crate) fn repeat(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("repeat").arg(switch(command));
    print_record(session, printer, &request)
}

pub(crate) fn seek(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("seek")
        .arg(command.int("pos", 0))
        .arg(command.int("time", 0));
    print_record(session, printer, &request)
}

pub(crate) fn seekid(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let request = Request::new("seekid")
        .arg(command.int("id", 0))
        .arg(command.int("time", 0));
    print_record(session, printer, &request)
}

/// Sets the volume, or moves it by `value` when a sign is given.
///
/// Relative changes read the current volume first and clamp the result to
/// `0..=100`.
pub(crate) fn volume(
    command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let value = command.int("value", -1);
    if !(0..=MAX_VOLUME).contains(&value) {
        return Err(AppError::VolumeOutOfRange);
    }
    let target = match command.value("sign") {
        None => value,
        Some(sign) => {
            let step = match sign {
                "+" => value,
                "-" => -value,
                other => return Err(AppError::InvalidSign(other.to_owned())),
            };
            let status = session.send_single_record_request("status")?;
            adjust_volume(status.int("volume", 0), step)
        }
    };
    print_record(session, printer, &Request::new("setvol").arg(target))
}

fn adjust_volume(current: i32, step: i32) -> i32 {
    current.saturating_add(step).clamp(0, MAX_VOLUME)
}

pub(crate) fn stop(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    print_record(session, printer, &Request::new("stop"))
}

/// Pauses when playing and plays otherwise.
pub(crate) fn toggle(
    _command: &Command<'_>,
    session: &mut Session,
    printer: &mut Printer<'_>,
) -> Result<(), AppError> {
    let status = session.send_single_record_request("status")?;
    let request = if status.string("state", "") == "play" {
        Request::new("pause").arg(1)
    } else {
        Request::new("play")
    };
    print_record(session, printer, &request)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(40, 10, 50)]
    #[case(95, 10, 100)]
    #[case(5, -10, 0)]
    #[case(50, -20, 30)]
    #[case(-1, 0, 0)]
    fn relative_volume_is_clamped(#[case] current: i32, #[case] step: i32, #[case] expected: i32) {
        assert_eq!(adjust_volume(current, step), expected);
    }
}

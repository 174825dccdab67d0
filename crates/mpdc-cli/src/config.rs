//! Configuration loading helpers for the CLI.
//!
//! Connection flags given before the command are routed to `ortho_config`;
//! everything from the first other token onwards belongs to the command.

use std::ffi::{OsStr, OsString};

use mpdc_config::Config;
use ortho_config::OrthoConfig;

use crate::AppError;

/// Flags recognised by the configuration loader. Keep in sync with
/// `mpdc_config::Config`.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--host",
    "--port",
    "--password",
    "--timeout",
    "--log-filter",
    "--log-format",
];

pub(crate) trait ConfigLoader {
    /// Loads configuration from the split-off connection flags.
    ///
    /// Connection flags after the command name are passed to the command as
    /// ordinary arguments.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

#[derive(Debug, Clone, Copy)]
enum FlagAction {
    Include { needs_value: bool },
    Skip,
}

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

fn process_config_flag(argument: &OsStr) -> FlagAction {
    let argument_text = argument.to_string_lossy();
    if !argument_text.starts_with("--") {
        return FlagAction::Skip;
    }

    let (flag, has_inline_value) = match argument_text.split_once('=') {
        Some((flag, _)) => (flag, true),
        None => (argument_text.as_ref(), false),
    };

    if CONFIG_CLI_FLAGS.contains(&flag) {
        return FlagAction::Include {
            needs_value: !has_inline_value,
        };
    }

    FlagAction::Skip
}

pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_start: usize,
}

pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let Some((program, rest)) = args.split_first() else {
        return ConfigArgumentSplit {
            config_arguments: Vec::new(),
            command_start: 0,
        };
    };

    let mut filtered = vec![program.clone()];
    let mut command_start = 1usize;
    let mut awaiting_value = false;

    for argument in rest {
        if awaiting_value {
            filtered.push(argument.clone());
            awaiting_value = false;
            command_start += 1;
            continue;
        }

        match process_config_flag(argument) {
            FlagAction::Include { needs_value } => {
                filtered.push(argument.clone());
                command_start += 1;
                awaiting_value = needs_value;
            }
            FlagAction::Skip => break,
        }
    }

    ConfigArgumentSplit {
        config_arguments: filtered,
        command_start,
    }
}

/// Program name followed by the tokens clap should parse.
pub(crate) fn command_arguments(args: &[OsString], split: &ConfigArgumentSplit) -> Vec<OsString> {
    args.first()
        .into_iter()
        .chain(args.iter().skip(split.command_start))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[rstest]
    #[case("--log-filter=debug", Some(false))]
    #[case("--host", Some(true))]
    #[case("--port", Some(true))]
    #[case("status", None)]
    #[case("--unknown", None)]
    #[case("--output", None)]
    fn classifies_flags(#[case] argument: &str, #[case] needs_value: Option<bool>) {
        let action = process_config_flag(OsStr::new(argument));
        match (action, needs_value) {
            (FlagAction::Include { needs_value: actual }, Some(expected)) => {
                assert_eq!(actual, expected);
            }
            (FlagAction::Skip, None) => {}
            (other, expected) => panic!("{argument}: got {other:?}, expected {expected:?}"),
        }
    }

    #[test]
    fn splits_connection_flags_from_command() {
        let args = os_args(&[
            "mpdc",
            "--host",
            "/run/mpd/socket",
            "--port=6601",
            "--output",
            "json",
            "volume",
            "5",
            "-",
        ]);
        let split = split_config_arguments(&args);
        assert_eq!(
            split.config_arguments,
            os_args(&["mpdc", "--host", "/run/mpd/socket", "--port=6601"])
        );
        assert_eq!(
            command_arguments(&args, &split),
            os_args(&["mpdc", "--output", "json", "volume", "5", "-"])
        );
    }

    #[test]
    fn flags_after_command_stay_with_command() {
        let args = os_args(&["mpdc", "find", "title", "--host"]);
        let split = split_config_arguments(&args);
        assert_eq!(split.config_arguments, os_args(&["mpdc"]));
        assert_eq!(split.command_start, 1);
    }

    #[test]
    fn empty_arguments_split_cleanly() {
        let split = split_config_arguments(&[]);
        assert!(split.config_arguments.is_empty());
        assert_eq!(split.command_start, 0);
    }
}

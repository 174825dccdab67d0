//! Declarative command shapes and argument binding.
//!
//! A [`CommandSpec`] names a command and its ordered parameters. Binding
//! positional arguments against it yields a [`Command`] whose values are
//! known to match their patterns, so behaviours can read them through the
//! lenient typed accessors without re-validating.

pub mod line;
mod param;
mod pattern;

use tracing::debug;

pub use self::param::ParamSpec;
pub use self::pattern::{Pattern, TAG_NAMES};
use crate::error::ClientError;
use self::line::Request;

/// The static shape of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Name typed on the command line.
    pub name: &'static str,
    /// One-line description for help output.
    pub description: &'static str,
    /// Parameters in positional order, required before optional.
    pub params: &'static [ParamSpec],
}

impl CommandSpec {
    /// Declares a command.
    #[must_use]
    pub const fn new(
        name: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            params,
        }
    }

    /// Number of parameters that must be supplied.
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|param| !param.optional).count()
    }

    /// Usage line such as `update [<path>]`.
    #[must_use]
    pub fn usage(&self) -> String {
        self.params
            .iter()
            .fold(self.name.to_owned(), |mut usage, param| {
                usage.push(' ');
                usage.push_str(&param.usage());
                usage
            })
    }

    /// Validates positional `args` and binds them to parameters.
    ///
    /// Arguments beyond the declared parameters are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingParameter`] when fewer arguments than
    /// required parameters are given and [`ClientError::InvalidParameter`]
    /// for the first argument that does not match its pattern.
    pub fn bind<S: AsRef<str>>(&self, args: &[S]) -> Result<Command<'_>, ClientError> {
        if args.len() < self.required_count() {
            return Err(ClientError::MissingParameter {
                command: self.name.to_owned(),
            });
        }
        let values = self
            .params
            .iter()
            .zip(args)
            .map(|(param, arg)| {
                let value = arg.as_ref();
                if param.accepts(value) {
                    Ok(value.to_owned())
                } else {
                    Err(ClientError::InvalidParameter {
                        value: value.to_owned(),
                        parameter: param.name.to_owned(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if args.len() > self.params.len() {
            debug!(
                command = self.name,
                ignored = args.len() - self.params.len(),
                "ignoring surplus arguments"
            );
        }
        Ok(Command { spec: self, values })
    }
}

/// A command with validated argument values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    spec: &'a CommandSpec,
    values: Vec<String>,
}

impl<'a> Command<'a> {
    /// The shape this command was bound against.
    #[must_use]
    pub const fn spec(&self) -> &'a CommandSpec {
        self.spec
    }

    /// Bound values in declaration order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Raw value of parameter `name`, if it was supplied.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        let position = self.spec.params.iter().position(|param| param.name == name)?;
        self.values.get(position).map(String::as_str)
    }

    /// Whether parameter `name` was supplied.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Value of `name`, or `default` when it was not supplied.
    #[must_use]
    pub fn string<'s>(&'s self, name: &str, default: &'s str) -> &'s str {
        self.value(name).unwrap_or(default)
    }

    /// Value parsed as `i32`.
    #[must_use]
    pub fn int(&self, name: &str, default: i32) -> i32 {
        self.parsed(name).unwrap_or(default)
    }

    /// Value parsed as `i64`.
    #[must_use]
    pub fn int64(&self, name: &str, default: i64) -> i64 {
        self.parsed(name).unwrap_or(default)
    }

    /// Value parsed as `u8`.
    #[must_use]
    pub fn byte(&self, name: &str, default: u8) -> u8 {
        self.parsed(name).unwrap_or(default)
    }

    /// Value read as a switch: `on`, `1`, or `true` set it and `off`, `0`,
    /// or `false` clear it.
    #[must_use]
    pub fn bool(&self, name: &str, default: bool) -> bool {
        match self.value(name) {
            Some("on" | "1" | "true") => true,
            Some("off" | "0" | "false") => false,
            _ => default,
        }
    }

    /// Wire line: the command name followed by each value quoted.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.values
            .iter()
            .fold(Request::new(self.spec.name), |request, value| {
                request.quoted(value)
            })
            .to_string()
    }

    fn parsed<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.value(name).and_then(|value| value.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::line::split_arguments;
    use super::*;

    const LIST_PARAMS: &[ParamSpec] = &[
        ParamSpec::required("tag1", "tag to list", Pattern::Tag),
        ParamSpec::optional("tag2", "tag to filter on", Pattern::Tag),
        ParamSpec::optional("term", "value of tag2", Pattern::Any),
    ];

    #[fixture]
    fn list() -> CommandSpec {
        CommandSpec::new("list", "list unique tag values", LIST_PARAMS)
    }

    #[fixture]
    fn seek() -> CommandSpec {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required("pos", "song position", Pattern::Integer),
            ParamSpec::required("time", "seconds into the song", Pattern::Integer),
        ];
        CommandSpec::new("seek", "seek within a queued song", PARAMS)
    }

    #[rstest]
    fn missing_required_argument_names_the_command(seek: CommandSpec) {
        let error = seek.bind(&["3"]).expect_err("one argument is too few");
        assert!(matches!(
            error,
            ClientError::MissingParameter { ref command } if command == "seek"
        ));
    }

    #[rstest]
    fn invalid_argument_names_value_and_parameter(seek: CommandSpec) {
        let error = seek.bind(&["3", "soon"]).expect_err("time must be numeric");
        assert!(matches!(
            error,
            ClientError::InvalidParameter { ref value, ref parameter }
                if value == "soon" && parameter == "time"
        ));
    }

    #[rstest]
    #[case("\u{0663}")]
    #[case("\u{ff13}")]
    fn non_ascii_digits_are_not_integers(seek: CommandSpec, #[case] digit: &str) {
        let error = seek.bind(&[digit, "10"]).expect_err("only ASCII digits bind");
        assert!(matches!(
            error,
            ClientError::InvalidParameter { ref parameter, .. } if parameter == "pos"
        ));
    }

    #[fixture]
    fn find() -> CommandSpec {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required("tag", "tag to match", Pattern::Tag),
            ParamSpec::required("term", "value to match", Pattern::Any),
        ];
        CommandSpec::new("find", "exact search", PARAMS)
    }

    #[rstest]
    fn find_without_term_is_missing_a_parameter(find: CommandSpec) {
        let error = find.bind(&["artist"]).expect_err("term is required");
        assert!(matches!(
            error,
            ClientError::MissingParameter { ref command } if command == "find"
        ));
    }

    #[rstest]
    fn find_renders_quoted_arguments(find: CommandSpec) {
        let command = find.bind(&["artist", "Miles"]).expect("binds");
        assert_eq!(command.to_line(), r#"find "artist" "Miles""#);
    }

    #[rstest]
    fn surplus_arguments_are_ignored(seek: CommandSpec) {
        let command = seek.bind(&["3", "120", "extra"]).expect("binds");
        assert_eq!(command.values(), ["3", "120"]);
        assert_eq!(command.int("pos", -1), 3);
        assert_eq!(command.int64("time", 0), 120);
    }

    #[rstest]
    fn optional_parameters_default_when_absent(list: CommandSpec) {
        let command = list.bind(&["album"]).expect("binds");
        assert!(!command.has("tag2"));
        assert_eq!(command.string("term", "none"), "none");
        assert_eq!(command.to_line(), r#"list "album""#);
    }

    #[rstest]
    fn rendered_line_rebinds_to_the_same_values(list: CommandSpec) {
        let command = list
            .bind(&["album", "artist", "Charles \"Bird\" Parker"])
            .expect("binds");
        let tokens = split_arguments(&command.to_line()).expect("line tokenises");
        let (name, args) = tokens.split_first().expect("name present");
        assert_eq!(name, "list");
        let rebound = list.bind(args).expect("rebinds");
        assert_eq!(rebound.values(), command.values());
    }

    #[rstest]
    #[case("on", true)]
    #[case("off", false)]
    #[case("1", true)]
    #[case("0", false)]
    fn switch_values_read_as_bool(#[case] raw: &str, #[case] expected: bool) {
        const PARAMS: &[ParamSpec] = &[ParamSpec::required("state", "on or off", Pattern::Any)];
        let spec = CommandSpec::new("repeat", "toggle repeat", PARAMS);
        let command = spec.bind(&[raw]).expect("binds");
        assert_eq!(command.bool("state", !expected), expected);
    }

    #[rstest]
    fn usage_lists_parameters(list: CommandSpec) {
        assert_eq!(list.usage(), "list <tag1> [<tag2>] [<term>]");
        assert_eq!(list.required_count(), 1);
    }
}

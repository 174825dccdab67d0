//! Request line assembly and tokenisation.
//!
//! Arguments are separated by spaces. An argument holding spaces or quotes
//! is wrapped in double quotes with `"` and `\` escaped by a backslash.

use std::fmt;

use crate::error::ClientError;

/// Wraps `value` in double quotes, escaping `"` and `\`.
#[must_use]
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for character in value.chars() {
        if matches!(character, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(character);
    }
    quoted.push('"');
    quoted
}

/// Checks that `value` can travel inside one request line.
///
/// # Errors
///
/// Returns [`ClientError::ControlCharacter`] naming `parameter` when
/// `value` holds a control character such as a newline.
pub fn ensure_printable(parameter: &str, value: &str) -> Result<(), ClientError> {
    if value.chars().any(char::is_control) {
        return Err(ClientError::ControlCharacter {
            parameter: parameter.to_owned(),
        });
    }
    Ok(())
}

/// Splits a request line into its command and arguments.
///
/// Bare and quoted segments that touch form one token, so `a"b c"` is the
/// single token `ab c`. Backslash escapes apply inside quotes only.
///
/// # Errors
///
/// Returns [`ClientError::MalformedRequest`] when a quote is left open.
pub fn split_arguments(line: &str) -> Result<Vec<String>, ClientError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut chars = line.chars();
    while let Some(character) = chars.next() {
        match character {
            '"' => {
                started = true;
                read_quoted(&mut chars, &mut current).ok_or_else(|| {
                    ClientError::MalformedRequest {
                        line: line.to_owned(),
                    }
                })?;
            }
            blank if blank.is_whitespace() => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            other => {
                started = true;
                current.push(other);
            }
        }
    }
    if started {
        tokens.push(current);
    }
    Ok(tokens)
}

fn read_quoted(chars: &mut std::str::Chars<'_>, into: &mut String) -> Option<()> {
    loop {
        match chars.next()? {
            '"' => return Some(()),
            '\\' => into.push(chars.next()?),
            other => into.push(other),
        }
    }
}

/// Builder for a single request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    line: String,
}

impl Request {
    /// Starts a request for `command`.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            line: command.to_owned(),
        }
    }

    /// Appends a quoted argument.
    #[must_use]
    pub fn quoted(mut self, value: &str) -> Self {
        self.line.push(' ');
        self.line.push_str(&quote(value));
        self
    }

    /// Appends a bare argument, typically a number.
    #[must_use]
    pub fn arg(mut self, value: impl fmt::Display) -> Self {
        self.line.push(' ');
        self.line.push_str(&value.to_string());
        self
    }

    /// The assembled line without its newline.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for Request {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.line)
    }
}

impl AsRef<str> for Request {
    fn as_ref(&self) -> &str {
        &self.line
    }
}

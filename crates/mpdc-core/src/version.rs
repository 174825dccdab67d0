use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A `major.minor.patch` protocol version announced in the daemon greeting.
///
/// Ordering compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl ProtocolVersion {
    /// Oldest protocol version this client is written against.
    pub const MINIMUM_SUPPORTED: Self = Self::new(0, 15, 0);

    /// Builds a version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Major component.
    #[must_use]
    pub const fn major(self) -> u32 {
        self.major
    }

    /// Minor component.
    #[must_use]
    pub const fn minor(self) -> u32 {
        self.minor
    }

    /// Patch component.
    #[must_use]
    pub const fn patch(self) -> u32 {
        self.patch
    }

    /// Whether this version meets `minimum`.
    #[must_use]
    pub fn satisfies(self, minimum: Self) -> bool {
        self >= minimum
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::MINIMUM_SUPPORTED
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Raised when version text is not three dot-separated non-negative integers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed protocol version '{0}'")]
pub struct VersionParseError(String);

impl FromStr for ProtocolVersion {
    type Err = VersionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionParseError(input.to_owned());
        let mut components = input.split('.').map(parse_component);
        let (Some(Some(major)), Some(Some(minor)), Some(Some(patch)), None) = (
            components.next(),
            components.next(),
            components.next(),
            components.next(),
        ) else {
            return Err(malformed());
        };
        Ok(Self::new(major, minor, patch))
    }
}

fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

//! Validation patterns for positional command arguments.

use once_cell::sync::Lazy;
use regex::Regex;

/// Metadata field names accepted where a command expects a tag.
pub const TAG_NAMES: &[&str] = &[
    "any",
    "artist",
    "album",
    "title",
    "track",
    "name",
    "genre",
    "date",
    "composer",
    "performer",
    "comment",
    "disc",
    "filename",
];

#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static ANY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\p{Cc}]+$").expect("valid text pattern"));

#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid integer pattern"));

#[expect(clippy::expect_used, reason = "the pattern is built from constant tag names")]
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", TAG_NAMES.join("|"))).expect("valid tag pattern")
});

#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static ON_OFF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:on|off)$").expect("valid switch pattern"));

#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static SIGN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]$").expect("valid sign pattern"));

/// The shape an argument must have before it is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Any non-empty text without control characters.
    Any,
    /// A non-negative integer written in ASCII digits.
    Integer,
    /// One of [`TAG_NAMES`].
    Tag,
    /// `on` or `off`.
    OnOff,
    /// `+` or `-`.
    Sign,
}

impl Pattern {
    /// Whether `value` has this shape in full.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    /// Short human description used in help output.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Any => "text",
            Self::Integer => "non-negative integer",
            Self::Tag => "tag name",
            Self::OnOff => "on|off",
            Self::Sign => "+|-",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Any => &ANY,
            Self::Integer => &INTEGER,
            Self::Tag => &TAG,
            Self::OnOff => &ON_OFF,
            Self::Sign => &SIGN,
        }
    }
}

use super::pattern::Pattern;

/// One declared positional argument of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Name used in usage text and error messages.
    pub name: &'static str,
    /// One-line description for help output.
    pub description: &'static str,
    /// Shape the argument must have.
    pub pattern: Pattern,
    /// Whether the argument may be omitted.
    pub optional: bool,
}

impl ParamSpec {
    /// Declares a required parameter.
    #[must_use]
    pub const fn required(name: &'static str, description: &'static str, pattern: Pattern) -> Self {
        Self {
            name,
            description,
            pattern,
            optional: false,
        }
    }

    /// Declares an optional parameter.
    #[must_use]
    pub const fn optional(name: &'static str, description: &'static str, pattern: Pattern) -> Self {
        Self {
            name,
            description,
            pattern,
            optional: true,
        }
    }

    /// Whether `value` satisfies the parameter's pattern.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.pattern.matches(value)
    }

    /// Usage fragment: `<name>` or `[<name>]`.
    #[must_use]
    pub fn usage(&self) -> String {
        if self.optional {
            format!("[<{}>]", self.name)
        } else {
            format!("<{}>", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_brackets_optional_parameters() {
        let path = ParamSpec::optional("path", "directory to update", Pattern::Any);
        let id = ParamSpec::required("id", "output id", Pattern::Integer);
        assert_eq!(path.usage(), "[<path>]");
        assert_eq!(id.usage(), "<id>");
        assert!(id.accepts("3"));
        assert!(!id.accepts("three"));
    }
}

//! Option specifications parsed from flag strings.

/// How firmly an option expects a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueArity {
    /// Boolean flag; no value is consumed.
    Flag,
    /// A value may follow; the placeholder names it in help text.
    Optional(String),
    /// A value must follow.
    Required(String),
}

/// A value recorded for a matched option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Presence without a value (boolean flags, bare optional values).
    Bool(bool),
    /// A textual value.
    Text(String),
}

/// A single option a [`Command`] knows how to match.
///
/// Built from a flags string in the conventional shape: an optional short
/// flag, an optional long flag, and at most one value placeholder —
/// `<name>` mandatory, `[name]` optional, absent for a boolean flag.
/// Separators are spaces and commas.
///
/// ```
/// use argot::{CliOption, ValueArity};
///
/// let option = CliOption::new("-c, --cheese [type]", "cheese type");
/// assert_eq!(option.name(), "cheese");
/// assert_eq!(option.arity(), &ValueArity::Optional("type".to_owned()));
/// ```
///
/// [`Command`]: crate::Command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOption {
    flags: String,
    short: Option<String>,
    long: Option<String>,
    arity: ValueArity,
    description: String,
    default: Option<OptionValue>,
    choices: Vec<String>,
}

impl CliOption {
    /// Parses `flags` into a matcher, keeping `description` for help text.
    #[must_use]
    pub fn new(flags: &str, description: &str) -> Self {
        let mut short = None;
        let mut long = None;
        let mut arity = ValueArity::Flag;
        for token in flags.split([' ', ',']).filter(|token| !token.is_empty()) {
            if let Some(placeholder) = token
                .strip_prefix('<')
                .and_then(|rest| rest.strip_suffix('>'))
            {
                arity = ValueArity::Required(placeholder.to_owned());
            } else if let Some(placeholder) = token
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                arity = ValueArity::Optional(placeholder.to_owned());
            } else if token.starts_with("--") {
                long = Some(token.to_owned());
            } else if token.starts_with('-') {
                short = Some(token.to_owned());
            }
        }
        Self {
            flags: flags.to_owned(),
            short,
            long,
            arity,
            description: description.to_owned(),
            default: None,
            choices: Vec::new(),
        }
    }

    /// Marks the value as optional, the explicit equivalent of `[name]`
    /// in the flags string.
    #[must_use]
    pub fn arg_optional(mut self, placeholder: &str) -> Self {
        self.arity = ValueArity::Optional(placeholder.to_owned());
        self
    }

    /// Marks the value as mandatory, the explicit equivalent of `<name>`
    /// in the flags string.
    #[must_use]
    pub fn arg_required(mut self, placeholder: &str) -> Self {
        self.arity = ValueArity::Required(placeholder.to_owned());
        self
    }

    /// Sets the value recorded when the option is not supplied (or an
    /// optional value is supplied bare).
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(OptionValue::Text(value.into()));
        self
    }

    /// Restricts accepted values to `values`.
    #[must_use]
    pub fn choices<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = values.into_iter().map(Into::into).collect();
        self
    }

    /// The attribute name values are recorded under: the long flag
    /// without its `--` prefix, falling back to the short flag.
    #[must_use]
    pub fn name(&self) -> &str {
        self.long
            .as_deref()
            .and_then(|long| long.strip_prefix("--"))
            .or_else(|| {
                self.short
                    .as_deref()
                    .and_then(|short| short.strip_prefix('-'))
            })
            .unwrap_or_default()
    }

    /// The flags string the option was registered with, used verbatim in
    /// usage messages.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// The option's help description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// How firmly the option expects a value.
    #[must_use]
    pub const fn arity(&self) -> &ValueArity {
        &self.arity
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.short.as_deref() == Some(token) || self.long.as_deref() == Some(token)
    }

    pub(crate) const fn registered_default(&self) -> Option<&OptionValue> {
        self.default.as_ref()
    }

    pub(crate) fn allowed_values(&self) -> &[String] {
        &self.choices
    }
}

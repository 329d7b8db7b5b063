//! The data-driven option matcher.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use argot_i18n::{LocaleError, Translator};

use crate::error::{UsageError, UsageErrorKind};
use crate::messages;
use crate::option::{CliOption, OptionValue, ValueArity};

/// A named set of options and the translator their messages render
/// through.
///
/// Options are registered up front; [`parse`](Self::parse) then walks the
/// arguments once, recording matched values and collecting everything
/// else as operands. All failure text is localized at the moment a
/// failure is detected.
///
/// # Example
///
/// ```
/// use argot::{Command, OptionValue};
///
/// let mut program = Command::new("brew")
///     .option("-c, --cheese [type]", "cheese type")
///     .option("-v, --verbose", "chatty output");
///
/// let parsed = program.parse(["--cheese", "brie", "pot"])?;
/// assert_eq!(parsed.get("cheese"), Some(&OptionValue::Text("brie".into())));
/// assert_eq!(parsed.operands(), ["pot"]);
/// # Ok::<(), argot::UsageError>(())
/// ```
#[derive(Debug)]
pub struct Command {
    name: String,
    options: Vec<CliOption>,
    translator: Translator,
}

impl Command {
    /// Creates an empty command.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            translator: Translator::new(),
        }
    }

    /// Registers an option from its flags string and description.
    #[must_use]
    pub fn option(self, flags: &str, description: &str) -> Self {
        self.add_option(CliOption::new(flags, description))
    }

    /// Registers a pre-built option.
    #[must_use]
    pub fn add_option(mut self, option: CliOption) -> Self {
        self.options.push(option);
        self
    }

    /// The command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the command's translator, for example with one resolving
    /// dictionaries from a custom locales directory.
    #[must_use]
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    /// The translator user-facing messages render through.
    ///
    /// Exposed mutably so callers can load locales or merge strings
    /// before parsing.
    pub fn translator_mut(&mut self) -> &mut Translator {
        &mut self.translator
    }

    /// Loads a locale into the command's translator.
    ///
    /// # Errors
    ///
    /// Propagates [`LocaleError`] from the translator; parsing behaviour
    /// is unchanged on failure.
    pub fn load_locale(&mut self, locale: &str) -> Result<(), LocaleError> {
        self.translator.load_locale(locale)
    }

    /// Matches `args` against the registered options.
    ///
    /// `args` are the user arguments only (callers pass
    /// `std::env::args().skip(1)` or a literal list). Matching rules:
    ///
    /// - `--long` and `-s` match registered options; `--long=value`
    ///   splits at the first `=`. An inline value on a boolean flag is
    ///   ignored.
    /// - A mandatory value comes from the inline value or the next
    ///   argument, whatever it looks like; running out of arguments is a
    ///   usage error.
    /// - An optional value refuses arguments starting with `-`; supplied
    ///   bare, the option records its default when one is registered and
    ///   boolean `true` otherwise.
    /// - `--` ends option matching; everything after it is an operand.
    ///   A lone `-` and anything not starting with `-` are operands.
    /// - Unmatched flag-like arguments are usage errors.
    ///
    /// After matching, registered defaults fill in options that were
    /// never seen, and options with choices reject values outside the
    /// set.
    ///
    /// # Errors
    ///
    /// [`UsageError`] with a localized message; see
    /// [`UsageErrorKind`](crate::UsageErrorKind) for the categories.
    pub fn parse<I, S>(&mut self, args: I) -> Result<ParsedOptions, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue: VecDeque<String> = args.into_iter().map(Into::into).collect();
        let mut values: HashMap<String, OptionValue> = HashMap::new();
        let mut operands = Vec::new();

        while let Some(token) = queue.pop_front() {
            if token == "--" {
                operands.extend(queue.drain(..));
                break;
            }
            if !looks_like_flag(&token) {
                operands.push(token);
                continue;
            }
            let (flag, inline) = split_inline_value(&token);
            let Some(option) = self.options.iter().find(|option| option.matches(flag)) else {
                let message = messages::unknown_option(&self.translator, flag);
                return Err(UsageError::new(UsageErrorKind::UnknownOption, message));
            };
            Self::apply_matched(
                &mut self.translator,
                option,
                inline,
                &mut queue,
                &mut values,
            )?;
        }

        for option in &self.options {
            if let Some(default) = option.registered_default() {
                values
                    .entry(option.name().to_owned())
                    .or_insert_with(|| default.clone());
            }
        }

        debug!(
            command = %self.name,
            options = values.len(),
            operands = operands.len(),
            "parsed arguments"
        );
        Ok(ParsedOptions { values, operands })
    }

    /// Consumes the matched option's value (if any) and records it.
    fn apply_matched(
        translator: &mut Translator,
        option: &CliOption,
        inline: Option<&str>,
        queue: &mut VecDeque<String>,
        values: &mut HashMap<String, OptionValue>,
    ) -> Result<(), UsageError> {
        match option.arity() {
            ValueArity::Flag => {
                values.insert(option.name().to_owned(), OptionValue::Bool(true));
                Ok(())
            }
            ValueArity::Required(_) => {
                match inline.map(str::to_owned).or_else(|| queue.pop_front()) {
                    Some(text) => Self::record(translator, option, text, values),
                    None => {
                        let message = messages::missing_argument(translator, option.flags());
                        Err(UsageError::new(UsageErrorKind::MissingArgument, message))
                    }
                }
            }
            ValueArity::Optional(_) => {
                match inline.map(str::to_owned).or_else(|| take_if_value(queue)) {
                    Some(text) => Self::record(translator, option, text, values),
                    None => {
                        let fallback = match option.registered_default() {
                            Some(default) => default.clone(),
                            None => OptionValue::Bool(true),
                        };
                        values.insert(option.name().to_owned(), fallback);
                        Ok(())
                    }
                }
            }
        }
    }

    /// Records a textual value after checking it against the option's
    /// choices.
    fn record(
        translator: &mut Translator,
        option: &CliOption,
        text: String,
        values: &mut HashMap<String, OptionValue>,
    ) -> Result<(), UsageError> {
        let allowed = option.allowed_values();
        if !allowed.is_empty() && !allowed.iter().any(|choice| choice == &text) {
            let message = messages::invalid_choice(translator, option.flags(), &text, allowed);
            return Err(UsageError::new(UsageErrorKind::InvalidChoice, message));
        }
        values.insert(option.name().to_owned(), OptionValue::Text(text));
        Ok(())
    }
}

/// Matched option values and leftover operands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    values: HashMap<String, OptionValue>,
    operands: Vec<String>,
}

impl ParsedOptions {
    /// The value recorded for the option named `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Whether any value was recorded for `name`.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Positional arguments in the order they appeared.
    #[must_use]
    pub fn operands(&self) -> &[String] {
        &self.operands
    }
}

/// Anything dashed except a bare `-` is treated as a flag candidate.
fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-') && token != "-"
}

/// Splits `--flag=value`; short flags take no inline values.
fn split_inline_value(token: &str) -> (&str, Option<&str>) {
    if token.starts_with("--") {
        if let Some((flag, value)) = token.split_once('=') {
            return (flag, Some(value));
        }
    }
    (token, None)
}

/// Pops the next argument when it can serve as an optional value.
/// Optional values never consume dashed arguments.
fn take_if_value(queue: &mut VecDeque<String>) -> Option<String> {
    match queue.front() {
        Some(next) if !next.starts_with('-') => queue.pop_front(),
        _ => None,
    }
}

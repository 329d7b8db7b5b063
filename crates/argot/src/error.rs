//! Usage errors produced while matching arguments.

use thiserror::Error;

/// Category of usage failure, for programmatic matching.
///
/// The display text lives on [`UsageError`] and is localized; the kind is
/// stable across locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageErrorKind {
    /// An argument looked like a flag but matched no registered option.
    UnknownOption,
    /// An option with a mandatory value reached the end of the arguments.
    MissingArgument,
    /// A value fell outside an option's registered choices.
    InvalidChoice,
}

/// A usage failure with its already-localized message.
///
/// Messages are rendered through the command's translator at the moment
/// the failure is detected, so displaying the error needs no further
/// locale state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UsageError {
    kind: UsageErrorKind,
    message: String,
}

impl UsageError {
    pub(crate) fn new(kind: UsageErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    /// The category of failure.
    #[must_use]
    pub const fn kind(&self) -> UsageErrorKind {
        self.kind
    }

    /// The localized message, identical to the display form.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

//! Error types for locale loading.

use thiserror::Error;

/// Errors returned while loading a locale dictionary.
///
/// Loading is the only fallible operation in this crate. Rendering paths
/// (`translate`, `format_list`) degrade to documented literal behaviour
/// instead of failing, so a missing translation can never interrupt a CLI
/// mid-output.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The requested locale tag could not be canonicalized.
    #[error("unrecognised locale '{tag}'")]
    UnrecognisedLocale {
        /// Tag exactly as supplied by the caller.
        tag: String,
    },

    /// No readable, well-formed dictionary resource exists for the tag.
    #[error("translations not found for locale '{locale}'")]
    TranslationsNotFound {
        /// Canonical tag the resource was looked up under.
        locale: String,
        /// Error raised while reading or parsing the resource.
        #[source]
        source: serde_json::Error,
    },
}

impl LocaleError {
    /// Creates a new `UnrecognisedLocale` error.
    #[must_use]
    pub fn unrecognised(tag: impl Into<String>) -> Self {
        Self::UnrecognisedLocale { tag: tag.into() }
    }

    /// Creates a new `TranslationsNotFound` error.
    #[must_use]
    pub fn not_found(locale: impl Into<String>, source: serde_json::Error) -> Self {
        Self::TranslationsNotFound {
            locale: locale.into(),
            source,
        }
    }
}

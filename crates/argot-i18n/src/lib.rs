//! Locale-aware translation and list formatting for command-line tools.
//!
//! This crate is the translation core of the `argot` workspace. It owns
//! three concerns:
//!
//! - **Dictionaries**: flat key→template mappings loaded from per-locale
//!   JSON resources ([`Translator::load_locale`]) or merged directly
//!   ([`Translator::update_strings`]).
//! - **Tagged-template translation**: a call site's literal fragments
//!   derive a deterministic lookup key; the translated template — or the
//!   key itself when untranslated — is rendered with the call's
//!   arguments ([`Translator::translate`], usually via [`tr!`]).
//! - **List formatting**: locale-aware conjunction/disjunction/unit
//!   rendering with per-style formatter caching
//!   ([`Translator::format_list`]).
//!
//! Loading a locale is the only fallible operation. Every rendering path
//! degrades gracefully — untranslated keys render literally, unsupported
//! locales join lists with `", "` — because user-facing output must never
//! fail halfway through being displayed.
//!
//! # Example
//!
//! ```
//! use argot_i18n::{ListStyle, Translator, tr};
//!
//! let mut translator = Translator::new();
//!
//! // No locale loaded: translation is literal interpolation.
//! let flag = "--cheese";
//! assert_eq!(
//!     tr!(translator => "error: unknown option '" {flag} "'"),
//!     "error: unknown option '--cheese'",
//! );
//!
//! // And list formatting is a plain join.
//! assert_eq!(
//!     translator.format_list(&["blue", "brie"], ListStyle::Disjunction),
//!     "blue, brie",
//! );
//! ```

mod error;
mod list;
mod template;
mod translator;

pub use error::LocaleError;
pub use list::{ListStyle, ListStyleParseError};
pub use template::{interpolate, interpolation_key};
pub use translator::Translator;

/// Translates a tagged-template call through a [`Translator`].
///
/// The call mirrors the shape the interpolation key is derived from:
/// string-literal fragments with each embedded argument in braces between
/// two of them. The macro expands to a [`Translator::translate`] call and
/// enforces the fragments/arguments cardinality invariant syntactically —
/// a mismatched call does not parse.
///
/// ```
/// use argot_i18n::{Translator, tr};
///
/// let translator = Translator::new();
/// let name = "World";
/// assert_eq!(tr!(translator => "Hello " {name} "!"), "Hello World!");
/// assert_eq!(tr!(translator => "no arguments"), "no arguments");
/// ```
#[macro_export]
macro_rules! tr {
    ($translator:expr => $first:literal $( { $arg:expr } $fragment:literal )*) => {
        $translator.translate(
            &[$first $(, $fragment)*],
            &[$( &$arg as &dyn ::std::fmt::Display ),*],
        )
    };
}

#[cfg(test)]
mod tests;

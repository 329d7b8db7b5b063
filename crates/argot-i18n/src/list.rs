//! List styles and the locale-aware list formatter facility.

use icu_list::{ListFormatter, ListLength};
use icu_locid::Locale;
use strum::{Display, EnumString};
use tracing::trace;

/// Semantic list styles for [`Translator::format_list`].
///
/// Styles follow the CLDR list-pattern types: a conjunction reads
/// "A, B, and C", a disjunction "A, B, or C", and a unit list joins
/// measurement-like items with no connective word.
///
/// [`Translator::format_list`]: crate::Translator::format_list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ListStyle {
    /// "and"-style enumeration.
    #[default]
    Conjunction,
    /// "or"-style enumeration.
    Disjunction,
    /// Connective-free enumeration.
    Unit,
}

/// Errors encountered while parsing a [`ListStyle`] from text.
pub type ListStyleParseError = strum::ParseError;

/// Builds a narrow-length formatter for `locale`, or `None` when the tag
/// does not parse as an ICU locale or no list data can be resolved.
///
/// Formatter construction is the expensive step; callers cache the result
/// (including the `None` outcome) per style.
pub(crate) fn build_formatter(locale: &str, style: ListStyle) -> Option<ListFormatter> {
    let parsed: Locale = locale.parse().ok()?;
    trace!(locale, %style, "building list formatter");
    let data_locale = parsed.into();
    let formatter = match style {
        ListStyle::Conjunction => {
            ListFormatter::try_new_and_with_length(&data_locale, ListLength::Narrow)
        }
        ListStyle::Disjunction => {
            ListFormatter::try_new_or_with_length(&data_locale, ListLength::Narrow)
        }
        ListStyle::Unit => {
            ListFormatter::try_new_unit_with_length(&data_locale, ListLength::Narrow)
        }
    };
    formatter.ok()
}

//! User-facing message text for usage errors.
//!
//! Every message renders through the command's translator. The English
//! template text doubles as the interpolation key, so output is correct
//! with no catalogue loaded and translated as soon as one is; a shipped
//! example catalogue lives in `locales/fr.json`.

use argot_i18n::{ListStyle, Translator, tr};

pub(crate) fn unknown_option(translator: &Translator, flag: &str) -> String {
    tr!(translator => "error: unknown option '" {flag} "'")
}

pub(crate) fn missing_argument(translator: &Translator, flags: &str) -> String {
    tr!(translator => "error: option '" {flags} "' argument missing")
}

/// Renders the choice list as a locale-aware disjunction before
/// interpolating it into the message.
pub(crate) fn invalid_choice(
    translator: &mut Translator,
    flags: &str,
    value: &str,
    choices: &[String],
) -> String {
    let items: Vec<&str> = choices.iter().map(String::as_str).collect();
    let allowed = translator.format_list(&items, ListStyle::Disjunction);
    tr!(translator =>
        "error: option '" {flags} "' argument '" {value} "' is invalid. Allowed choices are " {allowed} ".")
}

//! The locale-aware translator: dictionary state, tagged-template
//! translation, and cached list formatting.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::str::FromStr;

use camino::Utf8PathBuf;
use icu_list::ListFormatter;
use serde::de::Error as _;
use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::error::LocaleError;
use crate::list::{self, ListStyle};
use crate::template;

/// Directory the dictionary resources are looked up in by default.
const DEFAULT_LOCALES_DIR: &str = "locales";

/// Translates tagged-template calls and formats lists for one locale.
///
/// A `Translator` starts with no locale and no dictionary; in that state
/// [`translate`](Self::translate) is plain interpolation and
/// [`format_list`](Self::format_list) joins with `", "`. Loading a locale
/// (or merging strings directly) switches both to dictionary-backed,
/// locale-aware behaviour. Rendering never fails: missing translations
/// fall back to the literal call, and a locale without list data falls
/// back to joining.
///
/// State is owned exclusively by one value; all mutation goes through
/// `&mut self`, so interleaved loads from concurrent contexts are ruled
/// out by the borrow checker rather than by caller discipline.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use argot_i18n::{Translator, tr};
///
/// let mut translator = Translator::new();
/// translator.update_strings(HashMap::from([(
///     "Hello {0}!".to_owned(),
///     "Bonjour {0} !".to_owned(),
/// )]));
///
/// let name = "Ada";
/// assert_eq!(tr!(translator => "Hello " {name} "!"), "Bonjour Ada !");
/// ```
pub struct Translator {
    locales_dir: Utf8PathBuf,
    locale: Option<String>,
    dictionary: Option<HashMap<String, String>>,
    list_formats: HashMap<ListStyle, Option<ListFormatter>>,
}

impl Translator {
    /// Creates a translator that resolves dictionaries under `locales`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_locales_dir(DEFAULT_LOCALES_DIR)
    }

    /// Creates a translator that resolves dictionaries under `locales_dir`.
    #[must_use]
    pub fn with_locales_dir(locales_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            locales_dir: locales_dir.into(),
            locale: None,
            dictionary: None,
            list_formats: HashMap::new(),
        }
    }

    /// Loads the dictionary for `locale` and makes it the active locale.
    ///
    /// The tag is canonicalized first (`en-us` becomes `en-US`), then the
    /// flat JSON resource `<locales_dir>/<canonical>.json` is read to
    /// completion and merged into the current dictionary, with new keys
    /// overwriting existing ones. Success also sets the locale name,
    /// which invalidates the list-formatter cache.
    ///
    /// # Errors
    ///
    /// [`LocaleError::UnrecognisedLocale`] when the tag does not parse,
    /// [`LocaleError::TranslationsNotFound`] when the resource is missing
    /// or malformed. On either failure the previous dictionary and locale
    /// are untouched.
    pub fn load_locale(&mut self, locale: &str) -> Result<(), LocaleError> {
        let canonical = LanguageIdentifier::from_str(locale)
            .map_err(|_| LocaleError::unrecognised(locale))?
            .to_string();
        let path = self.locales_dir.join(format!("{canonical}.json"));
        let text = fs::read_to_string(path.as_std_path())
            .map_err(|source| LocaleError::not_found(&canonical, serde_json::Error::custom(source)))?;
        let dictionary: HashMap<String, String> =
            serde_json::from_str(&text).map_err(|source| LocaleError::not_found(&canonical, source))?;
        debug!(locale = %canonical, entries = dictionary.len(), %path, "loaded locale dictionary");
        self.update_strings(dictionary);
        self.set_locale_name(canonical);
        Ok(())
    }

    /// Merges `dictionary` into the current dictionary.
    ///
    /// Additive with overwrite on key collision; never fails and performs
    /// no content validation. This is how plugin-contributed strings are
    /// registered without loading a resource from storage.
    pub fn update_strings(&mut self, dictionary: HashMap<String, String>) {
        self.dictionary
            .get_or_insert_with(HashMap::new)
            .extend(dictionary);
    }

    /// Returns the active canonical locale tag, if one has been set.
    #[must_use]
    pub fn locale_name(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Sets the active locale name.
    ///
    /// Always clears the list-formatter cache, even when `name` matches
    /// the current locale; correctness over micro-optimisation. The name
    /// is not validated here — formatter construction treats an
    /// unparseable tag as "no locale-aware formatter available".
    pub fn set_locale_name(&mut self, name: impl Into<String>) {
        self.locale = Some(name.into());
        self.list_formats.clear();
    }

    /// Translates a tagged-template call.
    ///
    /// With no dictionary ever populated this is exactly
    /// [`interpolate`](crate::interpolate). Otherwise the fragments derive
    /// an interpolation key; the dictionary template for that key — or the
    /// key itself when untranslated — is rendered with each `{i}`
    /// placeholder replaced by the display form of `args[i]`. An index
    /// with no matching argument renders as the literal text `undefined`,
    /// which flags a caller/template mismatch without interrupting
    /// output.
    ///
    /// Most call sites use the [`tr!`](macro@crate::tr) macro rather
    /// than building the fragment and argument slices by hand.
    #[must_use]
    pub fn translate(&self, fragments: &[&str], args: &[&dyn fmt::Display]) -> String {
        let Some(dictionary) = &self.dictionary else {
            return template::interpolate(fragments, args);
        };
        let key = template::interpolation_key(fragments);
        let chosen = dictionary.get(&key).map_or(key.as_str(), String::as_str);
        template::render(chosen, args)
    }

    /// Formats `items` as a list in the requested style.
    ///
    /// The first call per style builds a narrow-length locale-aware
    /// formatter for the active locale and caches it; a locale that
    /// yields no formatter caches that outcome instead of retrying on
    /// every call. Without a usable formatter (no locale set, or an
    /// unsupported tag) items are joined with `", "`. An empty `items`
    /// yields an empty string from either path.
    pub fn format_list(&mut self, items: &[&str], style: ListStyle) -> String {
        let locale = self.locale.as_deref();
        let cached = self
            .list_formats
            .entry(style)
            .or_insert_with(|| locale.and_then(|tag| list::build_formatter(tag, style)));
        match cached {
            Some(formatter) => formatter.format_to_string(items.iter().copied()),
            None => items.join(", "),
        }
    }

    /// Number of styles with a cached construction outcome.
    #[cfg(test)]
    pub(crate) fn cached_style_count(&self) -> usize {
        self.list_formats.len()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

// Hand-written because `ListFormatter` handles are opaque.
impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locales_dir", &self.locales_dir)
            .field("locale", &self.locale)
            .field("dictionary_entries", &self.dictionary.as_ref().map(HashMap::len))
            .field("cached_list_styles", &self.list_formats.len())
            .finish()
    }
}

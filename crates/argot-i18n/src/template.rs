//! Interpolation-key derivation and placeholder rendering.
//!
//! A translation call is an ordered sequence of literal fragments
//! interleaved with display-formatted arguments (N+1 fragments for N
//! arguments). Joining the fragments with positional `{0}`, `{1}`, …
//! placeholders yields the *interpolation key*: the string a dictionary is
//! consulted with. Because the key depends only on the literal structure
//! of the call, two call sites with the same fragments share a key no
//! matter which argument values they pass.

use std::fmt;

/// Text substituted for an argument that the call did not supply.
///
/// A template placeholder whose index is out of range, or a fragment gap
/// with no matching argument, renders as this literal. It deliberately
/// stands out in displayed text so a caller/template mismatch is caught
/// during development; rendering never fails because of one.
const MISSING_ARGUMENT: &str = "undefined";

/// Derives the dictionary lookup key for a fragment sequence.
///
/// Fragments are joined in order with `{i}` between fragment `i` and
/// fragment `i + 1`:
///
/// ```
/// use argot_i18n::interpolation_key;
///
/// assert_eq!(interpolation_key(&["Reading ", " files"]), "Reading {0} files");
/// assert_eq!(interpolation_key(&["done"]), "done");
/// ```
#[must_use]
pub fn interpolation_key(fragments: &[&str]) -> String {
    let mut key = String::new();
    for (index, fragment) in fragments.iter().enumerate() {
        if index > 0 {
            key.push('{');
            key.push_str(&(index - 1).to_string());
            key.push('}');
        }
        key.push_str(fragment);
    }
    key
}

/// Interpolates fragments and arguments positionally, with no dictionary
/// lookup and no locale state.
///
/// This is the identity behaviour used when no translation layer is
/// active: `fragment[0] + arg[0] + fragment[1] + … + fragment[N]`.
///
/// Callers are expected to supply `fragments.len() - 1` arguments. The
/// function is best-effort for hand-built slices: a gap with no argument
/// renders as `undefined`, surplus arguments are ignored. The [`tr!`]
/// macro enforces the expected shape at compile time.
///
/// [`tr!`]: macro@crate::tr
///
/// ```
/// use argot_i18n::interpolate;
///
/// let count = 3;
/// assert_eq!(
///     interpolate(&["Reading ", " files"], &[&count]),
///     "Reading 3 files",
/// );
/// ```
#[must_use]
pub fn interpolate(fragments: &[&str], args: &[&dyn fmt::Display]) -> String {
    let gaps = fragments.len().saturating_sub(1);
    let mut rendered = String::new();
    for (index, fragment) in fragments.iter().enumerate() {
        rendered.push_str(fragment);
        if index < gaps {
            match args.get(index) {
                Some(arg) => rendered.push_str(&arg.to_string()),
                None => rendered.push_str(MISSING_ARGUMENT),
            }
        }
    }
    rendered
}

/// Replaces every `{i}` placeholder in `template` with the display form of
/// `args[i]`.
///
/// Only all-digit placeholders are substituted. Braces around anything
/// else, and unclosed braces, pass through verbatim. An index with no
/// matching argument (including a digit run too large for `usize`)
/// renders as `undefined`.
pub(crate) fn render(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            rendered.push(ch);
            continue;
        }
        let mut digits = String::new();
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            digits.push(next);
            chars.next();
        }
        if digits.is_empty() || chars.peek() != Some(&'}') {
            // Not a positional placeholder; re-emit what was consumed and
            // let the main loop carry on from the unconsumed character.
            rendered.push('{');
            rendered.push_str(&digits);
            continue;
        }
        chars.next();
        match digits.parse::<usize>().ok().and_then(|index| args.get(index)) {
            Some(arg) => rendered.push_str(&arg.to_string()),
            None => rendered.push_str(MISSING_ARGUMENT),
        }
    }
    rendered
}

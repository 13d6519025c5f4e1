use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// One or more characters that are not letters, digits or `_`.
static NON_WORD_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\W+").unwrap_or_else(|e| panic!("invalid non-word pattern: {}", e))
});

/// Remove every run of non-word characters.
pub fn strip_special_characters(s: &str) -> String {
    replace_non_word_runs(s, "").into_owned()
}

/// Replace every run of non-word characters with `replacement`.
///
/// Each run is replaced once, however long it is. `replacement` is inserted
/// literally; `$` has no special meaning.
pub fn strip_special_characters_with(s: &str, replacement: &str) -> String {
    replace_non_word_runs(s, replacement).into_owned()
}

fn replace_non_word_runs<'a>(s: &'a str, replacement: &str) -> Cow<'a, str> {
    #[cfg(feature = "trace")]
    log::trace!("stripping non-word runs from {} bytes", s.len());

    NON_WORD_RUN.replace_all(s, NoExpand(replacement))
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrextError};

/// Separator used when the caller gives none (or an empty one).
pub const DEFAULT_DELIMITER: &str = ", ";

/// Options for building a delimited string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimitedSettings {
    /// Separator placed between items. `None` or `""` means [`DEFAULT_DELIMITER`].
    #[serde(default)]
    pub delimiter: Option<String>,
}

impl DelimitedSettings {
    /// Create new settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// The delimiter actually used when joining.
    pub fn effective_delimiter(&self) -> &str {
        resolve_delimiter(self.delimiter.as_deref())
    }
}

/// Join items using their `Display` form and [`DEFAULT_DELIMITER`].
pub fn to_delimited_string<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join_items(items, |item| item.to_string(), DEFAULT_DELIMITER)
}

/// Join items using their `Display` form and the given delimiter.
pub fn to_delimited_string_with_delimiter<I>(items: I, delimiter: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join_items(items, |item| item.to_string(), resolve_delimiter(Some(delimiter)))
}

/// Join the strings produced by `selector` using [`DEFAULT_DELIMITER`].
pub fn to_delimited_string_by<I, F, S>(items: I, selector: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: AsRef<str>,
{
    join_items(items, selector, DEFAULT_DELIMITER)
}

/// General form of the delimited-string builder.
///
/// * `items` of `None`, or an empty sequence, yields `""`.
/// * `selector` of `None` is rejected with [`StrextError::InvalidArgument`],
///   unless there is nothing to join.
/// * `delimiter` of `None` or `""` falls back to [`DEFAULT_DELIMITER`].
pub fn to_delimited_string_by_with_delimiter<I, F, S>(
    items: Option<I>,
    selector: Option<F>,
    delimiter: Option<&str>,
) -> Result<String>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: AsRef<str>,
{
    let mut items = match items {
        Some(items) => items.into_iter().peekable(),
        None => return Ok(String::new()),
    };

    if items.peek().is_none() {
        return Ok(String::new());
    }

    let selector = selector.ok_or_else(|| {
        StrextError::invalid_argument("selector", "Must provide a valid property selector")
    })?;

    Ok(join_items(items, selector, resolve_delimiter(delimiter)))
}

/// Same as [`to_delimited_string_by_with_delimiter`], reading the delimiter from settings.
pub fn join_with_settings<I, F, S>(
    items: Option<I>,
    selector: Option<F>,
    settings: &DelimitedSettings,
) -> Result<String>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: AsRef<str>,
{
    to_delimited_string_by_with_delimiter(items, selector, settings.delimiter.as_deref())
}

fn resolve_delimiter(delimiter: Option<&str>) -> &str {
    match delimiter {
        Some(d) if !d.is_empty() => d,
        _ => DEFAULT_DELIMITER,
    }
}

fn join_items<I, F, S>(items: I, mut selector: F, delimiter: &str) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: AsRef<str>,
{
    let mut result = String::new();
    let mut count = 0usize;

    for item in items {
        result.push_str(selector(item).as_ref());
        result.push_str(delimiter);
        count += 1;
    }

    #[cfg(feature = "trace")]
    log::trace!("joined {} items with delimiter {:?}", count, delimiter);

    // Only the final delimiter goes; matches inside item text stay.
    if count > 0 {
        result.truncate(result.len() - delimiter.len());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_default_delimiter() {
        assert_eq!(to_delimited_string(vec![1, 2, 3]), "1, 2, 3");
    }

    #[test]
    fn joins_single_item_without_delimiter() {
        assert_eq!(to_delimited_string(["only"]), "only");
    }

    #[test]
    fn empty_sequence_is_empty_string() {
        let items: Vec<i32> = vec![];
        assert_eq!(to_delimited_string(items), "");
    }

    #[test]
    fn custom_delimiter() {
        assert_eq!(to_delimited_string_with_delimiter(["a", "b"], "|"), "a|b");
    }

    #[test]
    fn empty_delimiter_falls_back_to_default() {
        assert_eq!(to_delimited_string_with_delimiter(["a", "b"], ""), "a, b");
    }

    #[test]
    fn selector_maps_items() {
        let people = [("Ann", 31), ("Bob", 42)];
        let result = to_delimited_string_by(people.iter(), |(name, _)| *name);
        assert_eq!(result, "Ann, Bob");
    }

    #[test]
    fn delimiter_inside_item_text_is_preserved() {
        let result = to_delimited_string(["a, b", "c, "]);
        assert_eq!(result, "a, b, c, ");
    }

    #[test]
    fn unset_selector_is_rejected() {
        let err = to_delimited_string_by_with_delimiter(
            Some(vec!["x"]),
            None::<fn(&str) -> String>,
            None,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            StrextError::InvalidArgument { ref param, .. } if param == "selector"
        ));
    }

    #[test]
    fn unset_selector_on_empty_input_is_not_an_error() {
        let result = to_delimited_string_by_with_delimiter(
            Some(Vec::<&str>::new()),
            None::<fn(&str) -> String>,
            Some(";"),
        );
        assert_eq!(result, Ok(String::new()));
    }

    #[test]
    fn absent_input_is_empty_string() {
        let result = to_delimited_string_by_with_delimiter(
            None::<Vec<u8>>,
            Some(|b: u8| b.to_string()),
            None,
        );
        assert_eq!(result, Ok(String::new()));
    }

    #[test]
    fn settings_supply_delimiter() {
        let settings = DelimitedSettings::new().with_delimiter(" / ");
        assert_eq!(settings.effective_delimiter(), " / ");

        let result = join_with_settings(Some(["x", "y"]), Some(|s: &'static str| s), &settings);
        assert_eq!(result, Ok("x / y".to_string()));
    }

    #[test]
    fn default_settings_use_default_delimiter() {
        assert_eq!(DelimitedSettings::default().effective_delimiter(), DEFAULT_DELIMITER);
        assert_eq!(
            DelimitedSettings::new().with_delimiter("").effective_delimiter(),
            DEFAULT_DELIMITER
        );
    }
}

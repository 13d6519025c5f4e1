//! Method-style access to the string helpers.
//!
//! ```
//! use strext_core::{DelimitedExt, StrExt};
//!
//! assert_eq!("a,,b".split_csv(), vec!["a", "b"]);
//! assert_eq!(vec![1, 2].to_delimited_string(), "1, 2");
//! ```

use std::fmt::Display;

use crate::csv::split_csv;
use crate::delimited::{
    to_delimited_string, to_delimited_string_by, to_delimited_string_with_delimiter,
};
use crate::error::Result;
use crate::html::{html_encode, html_encode_with, HtmlEncodeMode};
use crate::page_name::normalize_page_name;
use crate::secure::{to_secure_string, SecureString};
use crate::strip::{strip_special_characters, strip_special_characters_with};

pub trait StrExt {
    fn split_csv(&self) -> Vec<&str>;
    fn strip_special_characters(&self) -> String;
    fn strip_special_characters_with(&self, replacement: &str) -> String;
    fn normalize_page_name(&self) -> String;
    fn html_encode(&self) -> String;
    fn html_encode_with(&self, mode: HtmlEncodeMode) -> String;
    fn to_secure_string(&self) -> Result<SecureString>;
}

impl StrExt for str {
    fn split_csv(&self) -> Vec<&str> {
        split_csv(self)
    }

    fn strip_special_characters(&self) -> String {
        strip_special_characters(self)
    }

    fn strip_special_characters_with(&self, replacement: &str) -> String {
        strip_special_characters_with(self, replacement)
    }

    fn normalize_page_name(&self) -> String {
        normalize_page_name(self)
    }

    fn html_encode(&self) -> String {
        html_encode(self)
    }

    fn html_encode_with(&self, mode: HtmlEncodeMode) -> String {
        html_encode_with(self, mode)
    }

    fn to_secure_string(&self) -> Result<SecureString> {
        to_secure_string(self)
    }
}

/// Delimited joins on anything iterable.
pub trait DelimitedExt: IntoIterator + Sized {
    fn to_delimited_string(self) -> String
    where
        Self::Item: Display,
    {
        to_delimited_string(self)
    }

    fn to_delimited_string_with_delimiter(self, delimiter: &str) -> String
    where
        Self::Item: Display,
    {
        to_delimited_string_with_delimiter(self, delimiter)
    }

    fn to_delimited_string_by<F, S>(self, selector: F) -> String
    where
        F: FnMut(Self::Item) -> S,
        S: AsRef<str>,
    {
        to_delimited_string_by(self, selector)
    }
}

impl<I: IntoIterator> DelimitedExt for I {}

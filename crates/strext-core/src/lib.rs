pub mod error;
pub mod csv;
pub mod delimited;
pub mod ext;
pub mod html;
pub mod page_name;
pub mod secure;
pub mod strip;

pub use error::{StrextError, Result};

pub use csv::split_csv;
pub use delimited::{
    DelimitedSettings, DEFAULT_DELIMITER, join_with_settings, to_delimited_string,
    to_delimited_string_by, to_delimited_string_by_with_delimiter,
    to_delimited_string_with_delimiter,
};
pub use ext::{DelimitedExt, StrExt};
pub use html::{HtmlEncodeMode, html_encode, html_encode_with};
pub use page_name::{PAGE_NAME_SPECIAL_CHARS, normalize_page_name};
pub use secure::{SecureString, SECURE_STRING_MAX_LENGTH, to_secure_string};
pub use strip::{strip_special_characters, strip_special_characters_with};

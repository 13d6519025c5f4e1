//! Secure in-memory strings.
//!
//! [`SecureString`] keeps its characters out of `Debug` output and scrubs
//! them with `zeroize` on drop, on [`SecureString::clear`] and whenever the
//! backing buffer has to move. This is obfuscation, not encryption: the
//! characters sit in ordinary process memory while the value is alive.
//!
//! [`to_secure_string`] cannot scrub the `&str` it reads from. Callers that
//! care should zeroize their own plaintext once the conversion is done.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Result, StrextError};

/// Most characters a [`SecureString`] will hold.
pub const SECURE_STRING_MAX_LENGTH: usize = 65_536;

const INITIAL_CAPACITY: usize = 8;

#[derive(ZeroizeOnDrop)]
pub struct SecureString {
    chars: Vec<char>,
    read_only: bool,
}

impl SecureString {
    /// Create an empty, writable secure string.
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            read_only: false,
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity.min(SECURE_STRING_MAX_LENGTH)),
            read_only: false,
        }
    }

    /// Append one character to the end.
    pub fn append_char(&mut self, c: char) -> Result<()> {
        self.ensure_writable()?;

        if self.chars.len() >= SECURE_STRING_MAX_LENGTH {
            return Err(StrextError::CapacityExceeded {
                max: SECURE_STRING_MAX_LENGTH,
            });
        }

        if self.chars.len() == self.chars.capacity() {
            self.grow();
        }
        self.chars.push(c);
        Ok(())
    }

    /// Scrub and remove every character.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_writable()?;
        self.chars.zeroize();
        Ok(())
    }

    /// Number of characters held.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Refuse all further modification.
    pub fn make_read_only(&mut self) {
        self.read_only = true;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Run `f` on the plaintext.
    ///
    /// The temporary copy passed to `f` is zeroized before this returns.
    pub fn expose<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let byte_len = self.chars.iter().map(|c| c.len_utf8()).sum();
        let mut plain = Zeroizing::new(String::with_capacity(byte_len));
        for &c in &self.chars {
            plain.push(c);
        }
        f(plain.as_str())
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(StrextError::ReadOnly);
        }
        Ok(())
    }

    /// Move into a bigger buffer, scrubbing the old one. A plain `Vec::push`
    /// would free the old allocation with the characters still in it.
    fn grow(&mut self) {
        let new_capacity = (self.chars.capacity() * 2).clamp(INITIAL_CAPACITY, SECURE_STRING_MAX_LENGTH);
        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend_from_slice(&self.chars);

        let mut old = std::mem::replace(&mut self.chars, grown);
        old.zeroize();
    }
}

impl Default for SecureString {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.chars.len())
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}

/// Copy `input` into a new [`SecureString`].
///
/// Fails with [`StrextError::InvalidArgument`] for an empty input and with
/// [`StrextError::CapacityExceeded`] when `input` has more than
/// [`SECURE_STRING_MAX_LENGTH`] characters. `input` itself is left untouched.
pub fn to_secure_string(input: &str) -> Result<SecureString> {
    if input.is_empty() {
        return Err(StrextError::invalid_argument(
            "input",
            "Input string is empty and cannot be converted",
        ));
    }

    let count = input.chars().count();
    if count > SECURE_STRING_MAX_LENGTH {
        return Err(StrextError::CapacityExceeded {
            max: SECURE_STRING_MAX_LENGTH,
        });
    }

    #[cfg(feature = "trace")]
    log::trace!("converting {} characters to a secure string", count);

    let mut secure = SecureString::with_capacity(count);
    for c in input.chars() {
        secure.append_char(c)?;
    }
    Ok(secure)
}

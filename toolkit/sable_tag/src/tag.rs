//! The packed tag value type and its codecs.
//!
//! A tag has four byte slots `B0..B3`, addressed in reading order: `B0` is
//! the most-significant byte of the packed value, `B3` the least. Data files
//! store the same four bytes little-endian, so [`Tag::from_bytes`] performs
//! the endianness flip between on-disk order and slot order.
//!
//! The text form walks the slots in reading order. ASCII letters and digits
//! are emitted literally; every other byte becomes a `|0xHH|` escape with
//! uppercase, zero-padded hex. Parsing accepts the same grammar plus 1-3
//! digit decimal escapes (`|0|` through `|255|`), with hex digits accepted
//! in either case.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error produced when decoding a tag from a byte buffer or text.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TagError {
    /// The byte buffer was not exactly 4 bytes.
    #[error("Input is not 4 bytes long.")]
    InvalidLength,
    /// The text did not decode to exactly 4 bytes under the escape grammar.
    ///
    /// Carries the offending input.
    #[error("\"{0}\" is not a valid Tag.")]
    InvalidText(String),
}

/// A 4-byte resource tag packed into 32 bits.
///
/// Invariant: `raw == (B0 << 24) | (B1 << 16) | (B2 << 8) | B3`. There is no
/// other state, and no operation mutates a tag in place.
///
/// Each byte slot also has a character view `C0..C3`, the byte reinterpreted
/// as a Latin-1 code unit.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Tag(u32);

impl Tag {
    /// Tag with all four bytes zero.
    pub const ZERO: Tag = Tag(0);

    /// Create from the packed 32-bit value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Tag(raw)
    }

    /// Get the packed 32-bit value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Decode from a 4-byte little-endian buffer.
    ///
    /// `bytes[0]` is the least-significant byte of the packed value, so it
    /// lands in slot `B3` and `bytes[3]` in `B0`. Any length other than 4
    /// is an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TagError> {
        let bytes: [u8; 4] = bytes.try_into().map_err(|_| TagError::InvalidLength)?;
        Ok(Tag(u32::from_le_bytes(bytes)))
    }

    /// Byte slot 0 (most significant).
    #[inline]
    pub const fn b0(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Byte slot 1.
    #[inline]
    pub const fn b1(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Byte slot 2.
    #[inline]
    pub const fn b2(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Byte slot 3 (least significant).
    #[inline]
    pub const fn b3(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Character view of slot 0.
    #[inline]
    pub const fn c0(self) -> char {
        self.b0() as char
    }

    /// Character view of slot 1.
    #[inline]
    pub const fn c1(self) -> char {
        self.b1() as char
    }

    /// Character view of slot 2.
    #[inline]
    pub const fn c2(self) -> char {
        self.b2() as char
    }

    /// Character view of slot 3.
    #[inline]
    pub const fn c3(self) -> char {
        self.b3() as char
    }

    /// Copy with slot 0 replaced.
    #[inline]
    #[must_use]
    pub const fn with_b0(self, value: u8) -> Self {
        let mut bytes = self.0.to_be_bytes();
        bytes[0] = value;
        Tag(u32::from_be_bytes(bytes))
    }

    /// Copy with slot 1 replaced.
    #[inline]
    #[must_use]
    pub const fn with_b1(self, value: u8) -> Self {
        let mut bytes = self.0.to_be_bytes();
        bytes[1] = value;
        Tag(u32::from_be_bytes(bytes))
    }

    /// Copy with slot 2 replaced.
    #[inline]
    #[must_use]
    pub const fn with_b2(self, value: u8) -> Self {
        let mut bytes = self.0.to_be_bytes();
        bytes[2] = value;
        Tag(u32::from_be_bytes(bytes))
    }

    /// Copy with slot 3 replaced.
    #[inline]
    #[must_use]
    pub const fn with_b3(self, value: u8) -> Self {
        let mut bytes = self.0.to_be_bytes();
        bytes[3] = value;
        Tag(u32::from_be_bytes(bytes))
    }

    /// Copy with slot 0 replaced by a Latin-1 character.
    #[inline]
    #[must_use]
    pub fn with_c0(self, value: char) -> Self {
        self.with_b0(latin1_byte(value))
    }

    /// Copy with slot 1 replaced by a Latin-1 character.
    #[inline]
    #[must_use]
    pub fn with_c1(self, value: char) -> Self {
        self.with_b1(latin1_byte(value))
    }

    /// Copy with slot 2 replaced by a Latin-1 character.
    #[inline]
    #[must_use]
    pub fn with_c2(self, value: char) -> Self {
        self.with_b2(latin1_byte(value))
    }

    /// Copy with slot 3 replaced by a Latin-1 character.
    #[inline]
    #[must_use]
    pub fn with_c3(self, value: char) -> Self {
        self.with_b3(latin1_byte(value))
    }
}

/// Byte value of a Latin-1 character.
///
/// Slot characters must stay within the Latin-1 range to keep the
/// char-to-byte mapping lossless.
fn latin1_byte(value: char) -> u8 {
    let code = value as u32;
    debug_assert!(code <= 0xFF, "slot character {value:?} outside Latin-1");
    (code & 0xFF) as u8
}

impl From<u32> for Tag {
    #[inline]
    fn from(raw: u32) -> Self {
        Tag(raw)
    }
}

impl From<i32> for Tag {
    #[inline]
    fn from(raw: i32) -> Self {
        Tag(raw as u32)
    }
}

impl From<Tag> for u32 {
    #[inline]
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl From<Tag> for i32 {
    #[inline]
    fn from(tag: Tag) -> Self {
        tag.0 as i32
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match decode_text(text) {
            Some(raw) => Ok(Tag(raw)),
            None => Err(TagError::InvalidText(text.to_owned())),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.to_be_bytes() {
            if byte.is_ascii_alphanumeric() {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "|0x{byte:02X}|")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

/// Decode the escaped text form into a packed value.
///
/// Returns `None` on any grammar violation; the caller owns the error.
fn decode_text(text: &str) -> Option<u32> {
    let mut raw: u32 = 0;
    let mut count = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        let byte = if ch == '|' {
            decode_escape(&mut chars)?
        } else {
            // Plain characters map directly to their Latin-1 code.
            u8::try_from(ch as u32).ok()?
        };
        if count == 4 {
            return None;
        }
        raw = (raw << 8) | u32::from(byte);
        count += 1;
    }
    (count == 4).then_some(raw)
}

/// Decode one `|...|` escape, the leading `|` already consumed.
///
/// Accepts `0xHH` (exactly two hex digits, either case) or 1-3 decimal
/// digits in 0-255. Anything else, including a missing closing `|`, is a
/// grammar violation.
fn decode_escape(chars: &mut std::str::Chars<'_>) -> Option<u8> {
    // Longest valid body is four chars ("0xHH").
    let mut body = [0u8; 4];
    let mut len = 0;
    loop {
        let ch = chars.next()?;
        if ch == '|' {
            break;
        }
        if len == body.len() || !ch.is_ascii() {
            return None;
        }
        body[len] = ch as u8;
        len += 1;
    }
    let body = &body[..len];
    if let Some(hex) = body.strip_prefix(b"0x") {
        if hex.len() != 2 {
            return None;
        }
        let hi = char::from(hex[0]).to_digit(16)?;
        let lo = char::from(hex[1]).to_digit(16)?;
        u8::try_from(hi * 16 + lo).ok()
    } else {
        if body.is_empty() || body.len() > 3 {
            return None;
        }
        let mut value: u32 = 0;
        for &digit in body {
            value = value * 10 + char::from(digit).to_digit(10)?;
        }
        u8::try_from(value).ok()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Tag;

    impl Serialize for Tag {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Tag {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        }
    }
}

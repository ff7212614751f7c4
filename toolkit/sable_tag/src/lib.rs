//! Sable asset tags.
//!
//! Every resource in a Sable data file is named by a 4-byte tag packed into
//! a 32-bit value. This crate provides the [`Tag`] value type and its three
//! interchangeable representations:
//!
//! - the packed integer (bit-preserving `u32`/`i32` conversions)
//! - the on-disk 4-byte little-endian buffer ([`Tag::from_bytes`])
//! - the escaped text form (`FromStr`/`Display`) used by listings and
//!   metadata files
//!
//! Tags are immutable. "Modification" always yields a new value through the
//! `with_*` builders; nothing mutates in place, so tags can be shared freely
//! across threads.
//!
//! With the `serde` feature enabled, tags serialize as their text form;
//! that grammar is the wire contract for any persisted tag.

mod tag;

pub use tag::{Tag, TagError};

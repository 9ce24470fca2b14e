//! The interned-string handle type
use std::{cmp::Ordering, hash::Hash, sync::LazyLock};

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{Error, Result},
    interner::{StringId, TABLE},
};

/// The canonical empty-string handle.
///
/// Its table entry is created when the table is initialized, so it exists
/// before any other handle.
pub static EMPTY: LazyLock<HashStr> = LazyLock::new(HashStr::empty);

/// A lightweight, copyable handle to an interned string.
///
/// Constructing a `HashStr` from a string interns it in the process-wide
/// [`TABLE`]; the handle keeps the entry's identifier plus a direct reference
/// to the stored string, so [`as_str`](Self::as_str) is a field read and
/// comparisons between handles are a single integer comparison.
///
/// Equality, ordering and hashing all use the identifier only, which makes
/// `HashStr` cheap to use as an ordered-container key. Comparing a handle
/// against a raw `&str` falls back to character-by-character comparison and is
/// the slow path to avoid in dispatch code (see the crate docs).
#[derive(Debug, Clone, Copy, Display)]
#[display("{value}")]
pub struct HashStr {
    id: StringId,
    /// Stable reference into the intern table entry, valid for the life of
    /// the process.
    value: &'static str,
}

impl HashStr {
    /// Intern a string and return a handle to it.
    ///
    /// Re-interning an already-interned string returns a handle to the
    /// existing entry. This never fails.
    #[must_use]
    pub fn new(string: &str) -> Self {
        let id = TABLE.intern(string);
        Self {
            id,
            // just interned under this exact id
            value: TABLE.resolve(id),
        }
    }

    /// Build a handle from an identifier that was interned earlier.
    ///
    /// Asking for an identifier with no table entry is a caller bug, surfaced
    /// as [`Error::UnknownId`] rather than an invalid handle.
    pub fn from_id(id: StringId) -> Result<Self> {
        match TABLE.get(id) {
            Some(value) => Ok(Self { id, value }),
            None => Err(Error::UnknownId(id)),
        }
    }

    /// The canonical empty-string handle.
    ///
    /// The empty string is interned when the table is initialized, before any
    /// other handle can exist.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("")
    }

    /// The interned string value. O(1), no hashing or table lookup.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.value
    }

    /// The identifier this handle's string is interned under.
    #[must_use]
    pub fn id(&self) -> StringId {
        self.id
    }
}

/// The canonical empty handle.
impl Default for HashStr {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for HashStr {
    fn from(string: &str) -> Self {
        Self::new(string)
    }
}

impl From<String> for HashStr {
    fn from(string: String) -> Self {
        Self::new(&string)
    }
}

impl PartialEq for HashStr {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HashStr {}

impl PartialOrd for HashStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HashStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for HashStr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Slow path: compares the string values, O(length).
impl PartialEq<str> for HashStr {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

/// Slow path: compares the string values, O(length).
impl PartialEq<&str> for HashStr {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

/// Slow path: compares the string values, O(length).
impl PartialEq<String> for HashStr {
    fn eq(&self, other: &String) -> bool {
        self.value == other
    }
}

impl PartialEq<StringId> for HashStr {
    fn eq(&self, other: &StringId) -> bool {
        self.id == *other
    }
}

impl PartialOrd<StringId> for HashStr {
    fn partial_cmp(&self, other: &StringId) -> Option<Ordering> {
        Some(self.id.cmp(other))
    }
}

impl Serialize for HashStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value)
    }
}

impl<'de> Deserialize<'de> for HashStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        Ok(Self::new(&string))
    }
}

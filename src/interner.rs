//! The process-wide intern table
//!
//! The [`TABLE`] static maps a 32-bit hash identifier to the owned string that
//! produced it. Entries are inserted at most once and never removed, so the
//! `&'static str` handed out for an entry stays valid for the rest of the
//! process. All [`HashStr`](crate::HashStr) handles share this table.
use std::{
    collections::BTreeMap,
    hash::{BuildHasher, Hasher, RandomState},
    sync::{LazyLock, RwLock},
};

/// The identifier bound to an interned string, the truncated hash of its bytes.
///
/// Deterministic within a single process run, but not across runs or builds.
pub type StringId = u32;

/// The global intern table shared by all [`HashStr`](crate::HashStr) handles.
///
/// Lazily initialized on first touch and alive until the process exits, which
/// guarantees it outlives every handle that references it. The empty string is
/// interned during initialization so the canonical empty handle is always
/// constructible.
pub static TABLE: LazyLock<InternTable> = LazyLock::new(InternTable::new);

/// A registry of interned strings keyed by their hash identifier.
///
/// Insertions are first-write-wins: once an identifier is bound to a string,
/// that binding never changes. Two distinct strings hashing to the same
/// identifier therefore collide silently, with the second string discarded.
/// This is an accepted limitation of the identifier space, not a detected
/// error.
pub struct InternTable {
    /// Hash state, fixed at table construction so identifiers are stable for
    /// the lifetime of the table.
    hasher: RandomState,
    /// Entry strings are leaked on first insertion, which is what makes the
    /// `&'static str` references stable across later insertions.
    entries: RwLock<BTreeMap<StringId, &'static str>>,
}

impl InternTable {
    /// Create a table with the empty string pre-interned.
    #[must_use]
    pub fn new() -> Self {
        let table = Self {
            hasher: RandomState::new(),
            entries: RwLock::new(BTreeMap::new()),
        };
        table.intern("");
        table
    }

    /// Compute the identifier a string would intern under.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn hash_of(&self, string: &str) -> StringId {
        let mut hasher = self.hasher.build_hasher();
        hasher.write(string.as_bytes());
        // truncate to the 32-bit identifier space
        hasher.finish() as StringId
    }

    /// Whether a string is already interned. Does not insert.
    #[must_use]
    pub fn is_interned(&self, string: &str) -> bool {
        self.is_interned_id(self.hash_of(string))
    }

    /// Whether an entry exists for this identifier. Does not insert.
    #[must_use]
    pub fn is_interned_id(&self, id: StringId) -> bool {
        self.entries
            .read()
            .expect("intern table lock should not be poisoned")
            .contains_key(&id)
    }

    /// Intern a string if needed and return its identifier.
    ///
    /// Interning an already-interned string has no effect beyond returning the
    /// existing identifier. If a different string is already bound to the same
    /// identifier, the existing binding wins and `string` is discarded.
    pub fn intern(&self, string: &str) -> StringId {
        let id = self.hash_of(string);
        let mut entries = self
            .entries
            .write()
            .expect("intern table lock should not be poisoned");
        entries
            .entry(id)
            .or_insert_with(|| Box::leak(string.to_string().into_boxed_str()));
        id
    }

    /// The interned string for this identifier, if any.
    #[must_use]
    pub fn get(&self, id: StringId) -> Option<&'static str> {
        self.entries
            .read()
            .expect("intern table lock should not be poisoned")
            .get(&id)
            .copied()
    }

    /// The interned string for this identifier, or `""` if the identifier is
    /// unknown.
    ///
    /// The empty-string fallback is deliberate: this query never fails.
    /// Callers that need to distinguish "absent" from "interned as empty"
    /// should check [`is_interned_id`](Self::is_interned_id) first.
    #[must_use]
    pub fn resolve(&self, id: StringId) -> &'static str {
        self.get(id).unwrap_or("")
    }

    /// A copy of the full identifier-to-string mapping, ascending by
    /// identifier.
    ///
    /// Intended for diagnostics and iteration, not hot paths.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<StringId, &'static str> {
        self.entries
            .read()
            .expect("intern table lock should not be poisoned")
            .clone()
    }
}

impl Default for InternTable {
    fn default() -> Self {
        Self::new()
    }
}

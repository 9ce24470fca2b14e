use hashstr::{StringId, TABLE};

/// An identifier with no intern table entry, for unknown-id scenarios.
pub fn unregistered_id(seed: StringId) -> StringId {
    let mut id = seed;
    while TABLE.is_interned_id(id) {
        id = id.wrapping_add(1);
    }
    id
}

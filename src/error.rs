//! The error and result types for hashstr
use crate::interner::StringId;

/// The result of a fallible hashstr operation
pub type Result<T> = std::result::Result<T, Error>;

/// A hashstr error
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A handle was requested for an identifier that was never interned
    #[error("no interned string for identifier `{0:#010x}`")]
    UnknownId(StringId),
}

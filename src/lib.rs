//! Interned strings with O(1) comparison.
//!
//! A [`HashStr`] associates a string with a 32-bit identifier (the hash of its
//! bytes) and registers the value in a process-wide intern table. Comparisons
//! between handles use the identifier instead of the characters, turning
//! O(length) string comparison in hot paths (event dispatch, tag matching)
//! into a single integer comparison.
//!
//! Handles constructed from an identifier require that identifier to already
//! be interned (see [`HashStr::from_id`]); handles constructed from a string
//! always succeed. The table never removes or relocates entries, so a handle's
//! string reference stays valid for the life of the process.
//!
//! # Usage
//!
//! Constructing a `HashStr` at every comparison site hashes the string each
//! time and defeats the purpose:
//!
//! ```
//! use hashstr::HashStr;
//!
//! # fn handle_move() {}
//! let event_type = HashStr::new("PlayerMove");
//! // Bad: hashes "PlayerMove" on every dispatch
//! if event_type == HashStr::new("PlayerMove") {
//!     handle_move();
//! }
//! ```
//!
//! Intern once up front and compare against the stored handles:
//!
//! ```
//! use hashstr::HashStr;
//!
//! # fn handle_move() {}
//! # fn handle_die() {}
//! let player_move = HashStr::new("PlayerMove");
//! let player_die = HashStr::new("PlayerDie");
//!
//! let event_type = player_move;
//! if event_type == player_move {
//!     // O(1)
//!     handle_move();
//! } else if event_type == player_die {
//!     handle_die();
//! }
//! ```
//!
//! Comparing a handle against a raw `&str` or `String` falls back to plain
//! string comparison and is the slow path.
//!
//! # Collisions
//!
//! The identifier space is 32 bits wide and no collision resolution is
//! attempted: if two distinct strings hash to the same identifier, the first
//! one interned wins and the second is silently discarded. Every handle and
//! lookup under that identifier yields the first string.
pub mod error;
pub mod hashstr;
pub mod interner;

pub use error::{Error, Result};
pub use hashstr::{EMPTY, HashStr};
pub use interner::{InternTable, StringId, TABLE};

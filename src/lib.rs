//! A pedagogical dynamic array: a growable, contiguous, zero-indexed
//! sequence with explicit length and capacity bookkeeping.
//!
//! The crate exists to make the mechanics of an `ArrayList`-style container
//! visible: appends that occasionally reallocate, inserts that shift the
//! tail right, removals that shift it left, overwrites that move nothing,
//! and linear search from the front. Out-of-range indices surface as
//! [`ArrayError::IndexOutOfRange`] rather than a panic, so callers decide
//! what to do about them.
//!
//! Run the narrated demo with: cargo run --bin arraylist_walkthrough

mod array;
mod error;

pub use array::DynamicArray;
pub use error::{ArrayError, Result};

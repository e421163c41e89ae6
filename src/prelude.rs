//! Prelude module for mil_dias crate.
//!
//! Re-exports the derive_more macros used by the record types.

#[allow(unused_imports)]
pub use derive_more::{Display, Into};

//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;

pub use layout::*;

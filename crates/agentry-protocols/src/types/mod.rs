//! Shared primitive types.

mod common;

pub use common::*;

//! # Agentry Core
//!
//! Runtime building blocks for the Agentry framework: thread-safe
//! registries and dispatch of tool invocations by name.

pub mod registry;

pub use registry::ToolRegistry;

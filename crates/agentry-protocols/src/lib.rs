//! # Agentry Protocols
//!
//! Protocol definitions (traits and plain data types) for the Agentry
//! framework. Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Base trait for all extensions
//! - [`Tool`] - Trait for tool implementations

pub mod error;
pub mod extension;
pub mod tool;
pub mod types;

// Re-export core traits
pub use error::{ExtensionError, ToolError};
pub use extension::{Extension, ExtensionContext, ExtensionManifest};
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use types::*;

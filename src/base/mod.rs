//! Foundation types for documentation-link resolution.
//!
//! This module provides the primitives shared by every other layer:
//! - [`FileId`] - Identifier of a source file known to the declaration tree
//! - [`Name`], [`Interner`] - Interned identifiers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other crate modules.

mod file_id;
mod intern;

pub use file_id::FileId;
pub use intern::{Interner, Name};

pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;

//! IDE features: consumers of documentation-link resolution results.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a tree and results in, return data out
//! 2. **No editor types**: Uses our own types, converted at the host boundary
//!
//! Navigation and rendering use only the first symbol of a result; find
//! usages and import optimization use the whole sequence.

mod document_links;
mod goto;
mod imports;
mod references;

pub use document_links::{RenderedLink, link_text, render_link};
pub use goto::{GotoTarget, goto_declaration};
pub use imports::{unused_imports, used_imports};
pub use references::{DocLink, LinkIndex};

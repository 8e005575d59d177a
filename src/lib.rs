//! # kdoc-resolve
//!
//! Name resolution for documentation links (KDoc): given a short or dotted
//! name written inside a documentation comment, compute the ordered set of
//! declarations it refers to, the way the compiler would bind the same
//! name at that position.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Result consumers (goto, find usages, import usage, link text)
//!   ↓
//! resolve   → Anchor context, self-links, short/qualified names, packages
//!   ↓
//! hir       → Declaration tree, scope arena, package table, imports
//!   ↓
//! base      → Primitives (FileId, Name interning, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → hir → resolve → ide)
// ============================================================================

/// Foundation types: FileId, Name interning, TextRange
pub mod base;

/// High-level IR: the declaration tree and its scopes
pub mod hir;

/// Documentation-link resolution pipeline
pub mod resolve;

/// IDE features: goto-declaration, find-usages, import usage, link text
pub mod ide;

// Re-export foundation types
pub use base::{FileId, Interner, Name, TextRange, TextSize};

// Re-export the resolution entry points
pub use hir::{DeclarationKind, DeclarationTree, SymbolId, TreeBuilder, TreeError};
pub use resolve::{
    Anchor, KDocResolver, Reference, ReferenceError, ResolutionOrigin, ResolutionResult,
    ResolverConfig, TagSection,
};

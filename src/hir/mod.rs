//! High-level IR (HIR): the declaration tree documentation links resolve against.
//!
//! The tree is built once by the host front end through [`TreeBuilder`]
//! and is immutable afterwards. Every scope the resolver can walk is
//! precomputed into a flat arena at [`TreeBuilder::finish`].
//!
//! ## Key Types
//!
//! - [`DeclarationTree`]: Symbol arena, scope arena, package table, imports
//! - [`Symbol`] / [`SymbolData`]: A declaration and its kind-specific payload
//! - [`DeclarationKind`]: Closed set of declaration categories with priorities
//! - [`Scope`] / [`ScopeChain`]: Names visible at one level, and an ordered list of levels
//! - [`PackageTable`]: Exact and longest-prefix package lookup
//!
//! ## Build Pipeline
//!
//! ```text
//! add_file / add_import           ← files, packages, import directives
//!     │
//!     ▼
//! add_class / add_function / ...  ← nested declarations
//!     │
//!     ▼
//! finish()                        ← order, scopes, import binding
//!     │
//!     ▼
//! DeclarationTree                 ← read-only, shared across threads
//! ```

mod builder;
mod ids;
mod imports;
mod packages;
mod scope;
mod symbols;
mod tree;

pub use builder::{Container, TreeBuilder, TreeError, TreeResult};
pub use ids::{ImportId, ScopeId, SymbolId};
pub use imports::{ImportDirective, ImportOrigin};
pub use packages::PackageTable;
pub use scope::{Scope, ScopeChain, ScopeKind};
pub use symbols::{ClassKind, DeclarationKind, Symbol, SymbolData};
pub use tree::{DeclScopes, DeclarationTree, FileData};

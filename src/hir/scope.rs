//! Scope records and scope chains.
//!
//! Every scope lives in the declaration tree's flat arena and is referenced
//! by [`ScopeId`]. A [`ScopeChain`] is just an ordered list of ids, so
//! descending into a classifier's member scope never needs an owning
//! pointer back to its enclosing scope.

use indexmap::IndexMap;

use super::ids::{ScopeId, SymbolId};
use crate::base::Name;

/// Category of a scope, listed from most local to most global.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeKind {
    TypeParameter,
    Local,
    Type,
    StaticMember,
    ExplicitImport,
    Package,
    ExplicitStarImport,
    DefaultImport,
    DefaultStarImport,
}

impl ScopeKind {
    /// Scopes that belong to the file rather than to a declaration.
    pub const fn is_file_level(self) -> bool {
        matches!(
            self,
            ScopeKind::ExplicitImport
                | ScopeKind::Package
                | ScopeKind::ExplicitStarImport
                | ScopeKind::DefaultImport
                | ScopeKind::DefaultStarImport
        )
    }
}

/// Names visible at one nesting level.
///
/// Entries keep insertion order, and every builder inserts in declaration
/// order, so iteration never depends on hashing. An entry's key may differ
/// from the symbol's own name (import aliases).
#[derive(Clone, Debug)]
pub struct Scope {
    kind: ScopeKind,
    /// Declaration whose members this scope holds, if any.
    owner: Option<SymbolId>,
    entries: IndexMap<Name, Vec<SymbolId>>,
}

impl Scope {
    pub fn new(kind: ScopeKind, owner: Option<SymbolId>) -> Self {
        Self {
            kind,
            owner,
            entries: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn owner(&self) -> Option<SymbolId> {
        self.owner
    }

    /// Bind `symbol` under `name`; rebinding the same symbol is a no-op.
    pub fn insert(&mut self, name: Name, symbol: SymbolId) {
        let bound = self.entries.entry(name).or_default();
        if !bound.contains(&symbol) {
            bound.push(symbol);
        }
    }

    /// All symbols bound to `name`, in the order they were bound.
    pub fn get(&self, name: Name) -> &[SymbolId] {
        self.entries.get(&name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: Name) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Name, &[SymbolId])> {
        self.entries.iter().map(|(name, ids)| (*name, ids.as_slice()))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered list of scopes visible from one anchor, most local first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScopeChain {
    scopes: Vec<ScopeId>,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scope: ScopeId) {
        self.scopes.push(scope);
    }

    /// Push an optional scope, skipping `None`.
    pub fn push_opt(&mut self, scope: Option<ScopeId>) {
        if let Some(scope) = scope {
            self.scopes.push(scope);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ScopeId> + '_ {
        self.scopes.iter().copied()
    }

    pub fn as_slice(&self) -> &[ScopeId] {
        &self.scopes
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl FromIterator<ScopeId> for ScopeChain {
    fn from_iter<I: IntoIterator<Item = ScopeId>>(iter: I) -> Self {
        Self {
            scopes: iter.into_iter().collect(),
        }
    }
}

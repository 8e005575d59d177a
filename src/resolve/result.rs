//! Resolution results.

use crate::hir::SymbolId;

/// Which pipeline step produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionOrigin {
    /// A declaration belonging to the anchor itself.
    SelfLink,
    /// `this` bound to the anchor's receiver.
    Receiver,
    /// Short-name scope traversal.
    Scope,
    /// Qualified path relative to a scope of the chain.
    Relative,
    /// Qualified path below a package prefix.
    Global,
    /// The whole reference named a package.
    Package,
    Unresolved,
    /// A local non-callable binding of the first segment stopped the path.
    Blocked { by: SymbolId },
}

/// Ordered declarations a documentation link refers to.
///
/// The first element is the answer for single-target consumers; the whole
/// sequence lists every plausible binding, most local first. An empty
/// result means the link is unresolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionResult {
    symbols: Vec<SymbolId>,
    origin: ResolutionOrigin,
}

impl ResolutionResult {
    /// A result from `origin`; an empty symbol list collapses to unresolved.
    pub fn new(symbols: Vec<SymbolId>, origin: ResolutionOrigin) -> Self {
        if symbols.is_empty() {
            return Self::unresolved();
        }
        Self { symbols, origin }
    }

    pub fn unresolved() -> Self {
        Self {
            symbols: Vec::new(),
            origin: ResolutionOrigin::Unresolved,
        }
    }

    pub fn blocked(by: SymbolId) -> Self {
        Self {
            symbols: Vec::new(),
            origin: ResolutionOrigin::Blocked { by },
        }
    }

    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<SymbolId> {
        self.symbols
    }

    /// The prioritized answer.
    pub fn first(&self) -> Option<SymbolId> {
        self.symbols.first().copied()
    }

    pub fn origin(&self) -> ResolutionOrigin {
        self.origin
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_resolved(&self) -> bool {
        !self.symbols.is_empty()
    }

    /// More than one declaration is a valid target.
    pub fn is_ambiguous(&self) -> bool {
        self.symbols.len() > 1
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self.origin, ResolutionOrigin::Blocked { .. })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.iter().copied()
    }

    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl<'a> IntoIterator for &'a ResolutionResult {
    type Item = &'a SymbolId;
    type IntoIter = std::slice::Iter<'a, SymbolId>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

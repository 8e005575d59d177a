//! Find usages: which documentation links reference a declaration.

use indexmap::IndexMap;

use crate::base::{FileId, TextRange};
use crate::hir::SymbolId;
use crate::resolve::{Anchor, Reference, ResolutionResult};

/// A resolved documentation link, as recorded for find-usages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocLink {
    pub anchor: Anchor,
    pub reference: Reference,
    /// Where the link text sits, if the host tracks it.
    pub file: Option<FileId>,
    pub range: Option<TextRange>,
}

impl DocLink {
    pub fn new(anchor: Anchor, reference: Reference) -> Self {
        Self {
            anchor,
            reference,
            file: None,
            range: None,
        }
    }

    pub fn at(mut self, file: FileId, range: TextRange) -> Self {
        self.file = Some(file);
        self.range = Some(range);
        self
    }
}

/// Index from declarations to the documentation links that reference them.
///
/// Every symbol of a result counts as referenced, not just the first, so
/// all overloads of an ambiguous link are highlighted.
#[derive(Clone, Debug, Default)]
pub struct LinkIndex {
    links: Vec<DocLink>,
    by_symbol: IndexMap<SymbolId, Vec<usize>>,
}

impl LinkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a link and the result it resolved to.
    pub fn record(&mut self, link: DocLink, result: &ResolutionResult) {
        let index = self.links.len();
        self.links.push(link);
        for symbol in result.iter() {
            let entries = self.by_symbol.entry(symbol).or_default();
            if entries.last() != Some(&index) {
                entries.push(index);
            }
        }
    }

    /// Links referencing `symbol`, in recording order.
    pub fn usages(&self, symbol: SymbolId) -> Vec<&DocLink> {
        self.by_symbol
            .get(&symbol)
            .map(|entries| entries.iter().map(|&i| &self.links[i]).collect())
            .unwrap_or_default()
    }

    pub fn is_referenced(&self, symbol: SymbolId) -> bool {
        self.by_symbol.contains_key(&symbol)
    }

    /// Referenced symbols in first-reference order.
    pub fn referenced_symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.by_symbol.keys().copied()
    }

    pub fn links(&self) -> &[DocLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

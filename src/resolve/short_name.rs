//! Short-name resolution by scope traversal.

use tracing::trace;

use super::result::{ResolutionOrigin, ResolutionResult};
use crate::base::Name;
use crate::hir::{DeclarationKind, DeclarationTree, ScopeChain, ScopeId, SymbolId};

/// Resolve a single-segment name against a scope chain.
///
/// The first scope binding `name` wins; its symbols are ordered by kind
/// priority, then declaration order. Later scopes are never consulted.
pub fn resolve_short_name(tree: &DeclarationTree, name: &str, chain: &ScopeChain) -> ResolutionResult {
    let Some(name) = tree.find_name(name) else {
        return ResolutionResult::unresolved();
    };
    match first_binding(tree, name, chain.iter()) {
        Some((scope, symbols)) => {
            trace!(
                "[KDOC] short name '{}' bound in {:?} ({:?}) -> {:?}",
                tree.name_text(name),
                scope,
                tree.scope(scope).kind(),
                symbols
            );
            ResolutionResult::new(symbols, ResolutionOrigin::Scope)
        }
        None => ResolutionResult::unresolved(),
    }
}

/// The first scope binding `name`, with its symbols in priority order.
///
/// Packages are never bound here.
pub(crate) fn first_binding(
    tree: &DeclarationTree,
    name: Name,
    scopes: impl IntoIterator<Item = ScopeId>,
) -> Option<(ScopeId, Vec<SymbolId>)> {
    scopes.into_iter().find_map(|scope| {
        let mut symbols: Vec<SymbolId> = tree
            .scope(scope)
            .get(name)
            .iter()
            .copied()
            .filter(|&symbol| tree.kind(symbol) != DeclarationKind::Package)
            .collect();
        if symbols.is_empty() {
            return None;
        }
        sort_by_priority(tree, &mut symbols);
        Some((scope, symbols))
    })
}

/// Order by declaration kind priority, then declaration order.
pub(crate) fn sort_by_priority(tree: &DeclarationTree, symbols: &mut [SymbolId]) {
    symbols.sort_by_key(|&symbol| {
        let symbol = tree.symbol(symbol);
        (symbol.kind().priority(), symbol.order)
    });
}

//! Memoized scope chains.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use super::anchor::{Anchor, TagSection};
use super::context::ScopeProvider;
use crate::hir::{ScopeChain, SymbolId};

/// Caches the chains of an inner provider keyed by `(declaration, tag section)`.
///
/// Chains are a pure function of the anchor over an immutable tree, so the
/// cache never needs invalidation while the tree lives.
#[derive(Debug)]
pub struct CachedScopeProvider<P> {
    inner: P,
    chains: RwLock<FxHashMap<(SymbolId, TagSection), ScopeChain>>,
}

impl<P: ScopeProvider> CachedScopeProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            chains: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached chains.
    pub fn len(&self) -> usize {
        self.chains.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.read().is_empty()
    }

    pub fn clear(&self) {
        self.chains.write().clear();
    }
}

impl<P: ScopeProvider> ScopeProvider for CachedScopeProvider<P> {
    fn scopes_visible_at(&self, anchor: &Anchor) -> ScopeChain {
        let key = (anchor.declaration, anchor.section);
        if let Some(chain) = self.chains.read().get(&key) {
            return chain.clone();
        }

        let chain = self.inner.scopes_visible_at(anchor);
        trace!("[KDOC] caching scope chain for {:?}", key);
        self.chains.write().entry(key).or_insert(chain).clone()
    }
}

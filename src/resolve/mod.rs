//! Documentation-link resolution.
//!
//! One reference is resolved by a fixed pipeline:
//!
//! ```text
//! resolve_self_link          ← the anchor and its tag-section declarations
//!     │ (none)
//!     ▼
//! scopes_visible_at(anchor)  ← scope chain, local to global
//!     │
//!     ├─ one segment   → resolve_short_name
//!     └─ more segments → resolve_multi_segment (relative, then global)
//!     │ (empty, not blocked)
//!     ▼
//! resolve_package            ← exact package name
//!     │
//!     ▼
//! aggregate                  ← first non-empty result wins
//! ```
//!
//! Resolution only reads the [`DeclarationTree`], so independent references
//! can be resolved in parallel with [`KDocResolver::resolve_batch`].

mod anchor;
mod cache;
mod config;
mod context;
mod error;
mod multi_segment;
mod package;
mod reference;
mod result;
mod self_link;
mod short_name;

pub use anchor::{Anchor, TagSection};
pub use cache::CachedScopeProvider;
pub use config::{ConstructorParameterScope, ResolverConfig};
pub use context::{ScopeProvider, TreeScopeProvider};
pub use error::ReferenceError;
pub use multi_segment::resolve_multi_segment;
pub use package::resolve_package;
pub use reference::Reference;
pub use result::{ResolutionOrigin, ResolutionResult};
pub use self_link::{receiver_of, resolve_self_link};
pub use short_name::resolve_short_name;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::hir::{DeclarationTree, ScopeChain};

/// Merge the outputs of the pipeline steps.
///
/// A self-link is returned verbatim. Otherwise the first non-empty result
/// among the scoped and package results wins. A blocked scoped result is
/// kept so callers can see why the link is unresolved.
pub fn aggregate(
    self_link: Option<ResolutionResult>,
    scoped: Option<ResolutionResult>,
    package: Option<ResolutionResult>,
) -> ResolutionResult {
    if let Some(result) = self_link {
        return result;
    }
    let blocked = scoped.as_ref().filter(|r| r.is_blocked()).cloned();
    [scoped, package]
        .into_iter()
        .flatten()
        .find(ResolutionResult::is_resolved)
        .or(blocked)
        .unwrap_or_else(ResolutionResult::unresolved)
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Resolves documentation references against a declaration tree.
///
/// ```
/// use kdoc::hir::TreeBuilder;
/// use kdoc::resolve::{Anchor, KDocResolver, Reference};
///
/// let mut builder = TreeBuilder::new();
/// let file = builder.add_file("Main.kt", "app").unwrap();
/// let helper = builder.add_function(file, "helper").unwrap();
/// let main = builder.add_function(file, "main").unwrap();
/// let tree = builder.finish().unwrap();
///
/// let resolver = KDocResolver::new(&tree);
/// let result = resolver.resolve(&Anchor::new(main), &Reference::short("helper"));
/// assert_eq!(result.first(), Some(helper));
/// ```
#[derive(Debug)]
pub struct KDocResolver<'a, P = TreeScopeProvider<'a>> {
    tree: &'a DeclarationTree,
    provider: P,
    config: ResolverConfig,
}

impl<'a> KDocResolver<'a> {
    /// Create a resolver that builds chains straight from the tree.
    pub fn new(tree: &'a DeclarationTree) -> Self {
        Self {
            tree,
            provider: TreeScopeProvider::new(tree),
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.provider = self.provider.with_config(config);
        self.config = config;
        self
    }

    /// Memoize scope chains per `(declaration, tag section)`.
    pub fn cached(self) -> KDocResolver<'a, CachedScopeProvider<TreeScopeProvider<'a>>> {
        KDocResolver {
            tree: self.tree,
            provider: CachedScopeProvider::new(self.provider),
            config: self.config,
        }
    }
}

impl<'a, P: ScopeProvider> KDocResolver<'a, P> {
    /// Create a resolver over a host-supplied scope provider.
    pub fn with_provider(tree: &'a DeclarationTree, provider: P, config: ResolverConfig) -> Self {
        Self {
            tree,
            provider,
            config,
        }
    }

    pub fn tree(&self) -> &'a DeclarationTree {
        self.tree
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn scope_chain(&self, anchor: &Anchor) -> ScopeChain {
        self.provider.scopes_visible_at(anchor)
    }

    /// Resolve one reference written in the documentation of `anchor`.
    ///
    /// # Panics
    /// Panics if the anchor does not belong to this resolver's tree.
    pub fn resolve(&self, anchor: &Anchor, reference: &Reference) -> ResolutionResult {
        assert!(
            self.tree.contains(anchor.declaration),
            "anchor {:?} does not belong to this declaration tree",
            anchor.declaration
        );
        trace!(
            "[KDOC] resolve '{}' at {:?} ({:?})",
            reference,
            anchor.declaration,
            anchor.section
        );

        let self_link = resolve_self_link(self.tree, reference, anchor);
        if self_link.is_some() {
            return aggregate(self_link, None, None);
        }

        let chain = self.provider.scopes_visible_at(anchor);
        let scoped = if reference.is_multi_segment() {
            resolve_multi_segment(
                self.tree,
                reference.segments(),
                &chain,
                self.tree.packages(),
                &self.config,
            )
        } else {
            resolve_short_name(self.tree, reference.last(), &chain)
        };

        let package = (scoped.is_empty() && !scoped.is_blocked())
            .then(|| resolve_package(&reference.full_name(), self.tree.packages()));
        let result = aggregate(None, Some(scoped), package);
        if result.is_empty() {
            debug!(
                "[KDOC] unresolved '{}' at {:?} ({:?})",
                reference,
                anchor.declaration,
                result.origin()
            );
        }
        result
    }

    /// Resolve independent references in parallel.
    ///
    /// Results are returned in request order.
    pub fn resolve_batch(&self, requests: &[(Anchor, Reference)]) -> Vec<ResolutionResult>
    where
        P: Sync,
    {
        requests
            .par_iter()
            .map(|(anchor, reference)| self.resolve(anchor, reference))
            .collect()
    }
}

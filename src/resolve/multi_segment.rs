//! Qualified-path resolution: relative to the scope chain, then below a package.
//!
//! Relative resolution binds the first segment like ordinary code would.
//! Once the first segment is bound by something that is not callable, the
//! path belongs to that binding; if it leads nowhere the reference is
//! unresolved and global lookup is not attempted.

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::config::ResolverConfig;
use super::result::{ResolutionOrigin, ResolutionResult};
use super::short_name::first_binding;
use crate::hir::{DeclarationKind, DeclarationTree, PackageTable, ScopeChain, ScopeId, SymbolId};

/// Resolve a dotted name of two or more segments.
///
/// # Panics
/// Panics if `segments` has fewer than two elements.
pub fn resolve_multi_segment(
    tree: &DeclarationTree,
    segments: &[SmolStr],
    chain: &ScopeChain,
    packages: &PackageTable,
    config: &ResolverConfig,
) -> ResolutionResult {
    assert!(
        segments.len() >= 2,
        "qualified reference needs at least two segments, got {}",
        segments.len()
    );
    let resolver = PathResolver { tree, config };

    match resolver.relative(segments, chain) {
        Relative::Found(symbols) => {
            return ResolutionResult::new(symbols, ResolutionOrigin::Relative);
        }
        Relative::Blocked(by) => {
            debug!(
                "[KDOC] '{}' blocked by local binding {:?} ({:?})",
                segments.join("."),
                by,
                tree.kind(by)
            );
            return ResolutionResult::blocked(by);
        }
        Relative::NotFound => {}
    }

    let global = resolver.global(segments, packages);
    if global.is_empty() {
        return ResolutionResult::unresolved();
    }
    ResolutionResult::new(global, ResolutionOrigin::Global)
}

enum Relative {
    Found(Vec<SymbolId>),
    Blocked(SymbolId),
    NotFound,
}

struct PathResolver<'a> {
    tree: &'a DeclarationTree,
    config: &'a ResolverConfig,
}

impl PathResolver<'_> {
    fn relative(&self, segments: &[SmolStr], chain: &ScopeChain) -> Relative {
        let Some(first) = self.tree.find_name(&segments[0]) else {
            return Relative::NotFound;
        };
        for scope in chain.iter() {
            let bound: Vec<SymbolId> = self
                .tree
                .scope(scope)
                .get(first)
                .iter()
                .copied()
                .filter(|&symbol| self.tree.kind(symbol) != DeclarationKind::Package)
                .collect();
            if bound.is_empty() {
                continue;
            }

            let classifiers: Vec<SymbolId> = bound
                .iter()
                .copied()
                .filter(|&symbol| self.tree.kind(symbol) == DeclarationKind::Classifier)
                .collect();
            if let Some(&blocker) = classifiers.first() {
                let found = self.descend_all(&classifiers, &segments[1..]);
                trace!(
                    "[KDOC] '{}' relative from {:?} -> {:?}",
                    segments.join("."),
                    scope,
                    found
                );
                return if found.is_empty() {
                    Relative::Blocked(blocker)
                } else {
                    Relative::Found(found)
                };
            }

            // Overload-resolvable bindings never claim the prefix.
            if let Some(&blocker) = bound.iter().find(|&&symbol| !self.tree.kind(symbol).is_callable()) {
                return Relative::Blocked(blocker);
            }
        }
        Relative::NotFound
    }

    fn global(&self, segments: &[SmolStr], packages: &PackageTable) -> Vec<SymbolId> {
        let Some((package, consumed)) = packages.longest_prefix(segments) else {
            return Vec::new();
        };
        let rest = &segments[consumed..];
        trace!(
            "[KDOC] '{}' global below package '{}'",
            segments.join("."),
            self.tree.qualified_name(package)
        );

        let Some((head, tail)) = rest.split_first() else {
            return Vec::new();
        };
        if tail.is_empty() {
            let members = self.tree.decl_scopes(package).members;
            return self.last_segment_in(head, members);
        }
        let Some(head) = self.tree.find_name(head) else {
            return Vec::new();
        };
        let classifiers = self.tree.top_level_classifiers(package, head);
        self.descend_all(&classifiers, tail)
    }

    /// Follow `path` from each classifier and concatenate the results.
    fn descend_all(&self, classifiers: &[SymbolId], path: &[SmolStr]) -> Vec<SymbolId> {
        classifiers
            .iter()
            .flat_map(|&classifier| self.descend(classifier, path))
            .collect()
    }

    /// Nested classifiers for all but the last segment, then the last
    /// segment by short-name rules over the final classifier's members.
    fn descend(&self, classifier: SymbolId, path: &[SmolStr]) -> Vec<SymbolId> {
        let Some((last, middle)) = path.split_last() else {
            return Vec::new();
        };
        let mut current = vec![classifier];
        for segment in middle {
            let Some(segment) = self.tree.find_name(segment) else {
                return Vec::new();
            };
            let mut next = Vec::new();
            for outer in current {
                let Some(statics) = self.tree.decl_scopes(outer).statics else {
                    continue;
                };
                next.extend(
                    self.tree
                        .scope(statics)
                        .get(segment)
                        .iter()
                        .copied()
                        .filter(|&symbol| self.tree.kind(symbol) == DeclarationKind::Classifier),
                );
            }
            current = next;
            if current.is_empty() {
                return Vec::new();
            }
        }

        current
            .into_iter()
            .flat_map(|container| {
                let scopes = self.tree.decl_scopes(container);
                let inherited = scopes.inherited.filter(|_| self.config.inherited_members);
                let member_scopes = [scopes.members, inherited, scopes.statics];
                self.last_segment_in(last, member_scopes.into_iter().flatten())
            })
            .collect()
    }

    fn last_segment_in(&self, name: &str, scopes: impl IntoIterator<Item = ScopeId>) -> Vec<SymbolId> {
        let Some(name) = self.tree.find_name(name) else {
            return Vec::new();
        };
        first_binding(self.tree, name, scopes)
            .map(|(_, symbols)| symbols)
            .unwrap_or_default()
    }
}

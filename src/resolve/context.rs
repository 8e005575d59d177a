//! Anchor context: the scope chain visible from a documentation comment.
//!
//! A class comment sees what the first statement of a synthetic method body
//! inside that class would see. A function comment sees the function's
//! parameters and local declarations, a property comment sees its type
//! parameters, and a constructor comment sees the constructor parameters.
//! Tag sections put one extra scope in front of the chain.
//!
//! Per nesting level, innermost first:
//!
//! ```text
//! TypeParameter → Local → Type (own) → Type (inherited) → StaticMember
//! ```
//!
//! followed by the file tail:
//!
//! ```text
//! ExplicitImport → Package → ExplicitStarImport → DefaultImport → DefaultStarImport
//! ```

use tracing::trace;

use super::anchor::{Anchor, TagSection};
use super::config::{ConstructorParameterScope, ResolverConfig};
use crate::hir::{DeclarationKind, DeclarationTree, ScopeChain, SymbolId};

/// Source of scope chains for anchors.
///
/// Host front ends with their own scope machinery implement this; the
/// resolver never looks at declarations to build chains itself.
pub trait ScopeProvider {
    fn scopes_visible_at(&self, anchor: &Anchor) -> ScopeChain;
}

impl<T: ScopeProvider + ?Sized> ScopeProvider for &T {
    fn scopes_visible_at(&self, anchor: &Anchor) -> ScopeChain {
        (**self).scopes_visible_at(anchor)
    }
}

/// Builds scope chains from the precomputed scopes of a [`DeclarationTree`].
#[derive(Clone, Copy, Debug)]
pub struct TreeScopeProvider<'a> {
    tree: &'a DeclarationTree,
    config: ResolverConfig,
}

impl<'a> TreeScopeProvider<'a> {
    pub fn new(tree: &'a DeclarationTree) -> Self {
        Self {
            tree,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tree(&self) -> &'a DeclarationTree {
        self.tree
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    // ============================================================
    // Anchor levels
    // ============================================================

    fn class_anchor(&self, chain: &mut ScopeChain, class: SymbolId, section: TagSection) {
        let scopes = self.tree.decl_scopes(class);
        match section {
            TagSection::Param => chain.push_opt(scopes.constructor_parameters),
            TagSection::Constructor => chain.push_opt(scopes.constructor),
            TagSection::Property => chain.push_opt(scopes.properties),
            TagSection::None => {}
        }

        chain.push_opt(scopes.type_parameters);
        // Under `@constructor` the parameters compete with members on kind,
        // so a same-named property still wins.
        let members = match section {
            TagSection::Constructor => scopes.members_with_parameters.or(scopes.members),
            _ => scopes.members,
        };
        chain.push_opt(members);
        if self.config.inherited_members {
            chain.push_opt(scopes.inherited);
        }
        chain.push_opt(scopes.statics);
    }

    fn function_anchor(&self, chain: &mut ScopeChain, function: SymbolId, section: TagSection) {
        let scopes = self.tree.decl_scopes(function);
        if section == TagSection::Param {
            chain.push_opt(scopes.parameters);
        }
        chain.push_opt(scopes.type_parameters);
        chain.push_opt(scopes.locals);
    }

    /// Levels of the enclosing declarations, from `start` outwards.
    fn push_levels(&self, chain: &mut ScopeChain, start: Option<SymbolId>) {
        let mut current = start;
        while let Some(id) = current {
            let scopes = self.tree.decl_scopes(id);
            match self.tree.kind(id) {
                DeclarationKind::Package => break,
                DeclarationKind::Classifier => {
                    chain.push_opt(scopes.type_parameters);
                    if self.config.constructor_parameters
                        == ConstructorParameterScope::NestedDeclarations
                    {
                        chain.push_opt(scopes.primary_parameters);
                    }
                    chain.push_opt(scopes.members);
                    if self.config.inherited_members {
                        chain.push_opt(scopes.inherited);
                    }
                    chain.push_opt(scopes.statics);
                }
                DeclarationKind::Function | DeclarationKind::Constructor => {
                    chain.push_opt(scopes.type_parameters);
                    chain.push_opt(scopes.locals);
                }
                DeclarationKind::Property => chain.push_opt(scopes.type_parameters),
                DeclarationKind::Parameter | DeclarationKind::TypeParameter => {}
            }
            current = self.tree.symbol(id).parent;
        }
    }

    fn push_file_tail(&self, chain: &mut ScopeChain, anchor: SymbolId) {
        let symbol = self.tree.symbol(anchor);
        let file = symbol.file.and_then(|file| self.tree.file(file));
        if let Some(file) = file {
            chain.push(file.explicit_imports);
        }
        let package = self.tree.package_of(anchor);
        chain.push_opt(self.tree.decl_scopes(package).members);
        if let Some(file) = file {
            chain.push(file.star_imports);
        }
        chain.push(self.tree.default_import_scope());
        chain.push(self.tree.default_star_import_scope());
    }
}

impl ScopeProvider for TreeScopeProvider<'_> {
    fn scopes_visible_at(&self, anchor: &Anchor) -> ScopeChain {
        let id = anchor.declaration;
        assert!(
            self.tree.contains(id),
            "anchor {id:?} does not belong to this declaration tree"
        );
        let symbol = self.tree.symbol(id);

        let mut chain = ScopeChain::new();
        match symbol.kind() {
            DeclarationKind::Classifier => self.class_anchor(&mut chain, id, anchor.section),
            DeclarationKind::Function => self.function_anchor(&mut chain, id, anchor.section),
            // Tag sections do not apply to constructors.
            DeclarationKind::Constructor => {
                self.function_anchor(&mut chain, id, TagSection::None)
            }
            DeclarationKind::Property => {
                chain.push_opt(self.tree.decl_scopes(id).type_parameters)
            }
            kind => panic!("{kind:?} {id:?} cannot own a documentation comment"),
        }
        self.push_levels(&mut chain, symbol.parent);
        self.push_file_tail(&mut chain, id);

        trace!(
            "[KDOC] scope chain for {:?} ({:?}): {} scopes",
            id,
            anchor.section,
            chain.len()
        );
        chain
    }
}

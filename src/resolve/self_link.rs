//! Self-links: names that denote the anchor itself or what its tag section documents.

use tracing::trace;

use super::anchor::{Anchor, TagSection};
use super::reference::Reference;
use super::result::{ResolutionOrigin, ResolutionResult};
use crate::base::Name;
use crate::hir::{DeclarationKind, DeclarationTree, SymbolId};

/// Resolve a reference against the anchor's own declarations.
///
/// Candidates are grouped in tiers; the first tier containing a declaration
/// with the reference's name wins. Multi-segment references never self-link.
/// `this` binds to the anchor's receiver when there is one.
pub fn resolve_self_link(
    tree: &DeclarationTree,
    reference: &Reference,
    anchor: &Anchor,
) -> Option<ResolutionResult> {
    if reference.is_multi_segment() {
        return None;
    }
    if reference.is_this() {
        let receiver = receiver_of(tree, anchor.declaration)?;
        trace!("[KDOC] 'this' at {:?} -> receiver {:?}", anchor.declaration, receiver);
        return Some(ResolutionResult::new(vec![receiver], ResolutionOrigin::Receiver));
    }

    let name = tree.find_name(reference.last())?;
    for tier in candidate_tiers(tree, anchor) {
        let matches: Vec<SymbolId> = tier
            .into_iter()
            .filter(|&candidate| named(tree, candidate, name))
            .collect();
        if !matches.is_empty() {
            trace!(
                "[KDOC] self-link '{}' at {:?} -> {:?}",
                reference,
                anchor.declaration,
                matches
            );
            return Some(ResolutionResult::new(matches, ResolutionOrigin::SelfLink));
        }
    }
    None
}

/// The declaration `this` denotes inside the anchor's documentation.
pub fn receiver_of(tree: &DeclarationTree, anchor: SymbolId) -> Option<SymbolId> {
    let symbol = tree.symbol(anchor);
    match symbol.kind() {
        DeclarationKind::Classifier => Some(anchor),
        _ => symbol
            .receiver()
            .or_else(|| tree.enclosing_classifier(anchor)),
    }
}

fn named(tree: &DeclarationTree, symbol: SymbolId, name: Name) -> bool {
    tree.symbol(symbol).name == name
}

fn children_of_kind(tree: &DeclarationTree, owner: SymbolId, kind: DeclarationKind) -> Vec<SymbolId> {
    tree.children(owner)
        .iter()
        .copied()
        .filter(|&child| tree.kind(child) == kind)
        .collect()
}

fn candidate_tiers(tree: &DeclarationTree, anchor: &Anchor) -> Vec<Vec<SymbolId>> {
    let id = anchor.declaration;
    let symbol = tree.symbol(id);
    let mut tiers = Vec::new();
    match (symbol.kind(), anchor.section) {
        (DeclarationKind::Classifier, section) => {
            let ctor = symbol.primary_constructor();
            match section {
                TagSection::Param => {
                    let mut tier = ctor
                        .map(|ctor| children_of_kind(tree, ctor, DeclarationKind::Parameter))
                        .unwrap_or_default();
                    tier.extend(children_of_kind(tree, id, DeclarationKind::TypeParameter));
                    tiers.push(tier);
                }
                TagSection::Property => {
                    tiers.push(children_of_kind(tree, id, DeclarationKind::Property));
                }
                // Parameters compete with properties in the member scope instead.
                TagSection::Constructor => tiers.push(ctor.into_iter().collect()),
                TagSection::None => {}
            }
        }
        (DeclarationKind::Function, TagSection::Param) => {
            let mut tier = children_of_kind(tree, id, DeclarationKind::Parameter);
            tier.extend(children_of_kind(tree, id, DeclarationKind::TypeParameter));
            tiers.push(tier);
        }
        (DeclarationKind::Property, TagSection::Param) => {
            tiers.push(children_of_kind(tree, id, DeclarationKind::TypeParameter));
        }
        _ => {}
    }
    tiers.push(vec![id]);
    tiers
}

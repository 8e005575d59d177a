//! Anchor context builder tests.

use kdoc::hir::{DeclarationTree, ScopeChain, ScopeKind, TreeBuilder};
use kdoc::resolve::{Anchor, CachedScopeProvider, ScopeProvider, TagSection, TreeScopeProvider};

use crate::helpers::tree_fixtures::*;

fn kinds(tree: &DeclarationTree, chain: &ScopeChain) -> Vec<ScopeKind> {
    chain.iter().map(|scope| tree.scope(scope).kind()).collect()
}

fn assert_local_to_global_tail(tree: &DeclarationTree, chain: &ScopeChain) {
    let tail: Vec<ScopeKind> = kinds(tree, chain)
        .into_iter()
        .filter(|kind| kind.is_file_level())
        .collect();
    let mut sorted = tail.clone();
    sorted.sort();
    assert_eq!(tail, sorted, "file-level scopes out of order");
}

#[test]
fn test_function_in_class_chain() {
    let fixture = shape_hierarchy();
    let tree = &fixture.tree;
    let chain = TreeScopeProvider::new(tree).scopes_visible_at(&Anchor::new(fixture.draw));

    assert_eq!(
        kinds(tree, &chain),
        vec![
            // Circle
            ScopeKind::TypeParameter,
            ScopeKind::Type,
            ScopeKind::Type,
            ScopeKind::StaticMember,
            // file
            ScopeKind::ExplicitImport,
            ScopeKind::Package,
            ScopeKind::ExplicitStarImport,
            ScopeKind::DefaultImport,
            ScopeKind::DefaultStarImport,
        ]
    );
}

#[test]
fn test_inner_levels_precede_outer_levels() {
    let mut builder = TreeBuilder::new();
    let file = builder.add_file("A.kt", "").unwrap();
    let outer = builder.add_class(file, "Outer").unwrap();
    builder.add_function(outer, "outerMember").unwrap();
    let inner = builder.add_class(outer, "Inner").unwrap();
    builder.add_function(inner, "innerMember").unwrap();
    let method = builder.add_function(inner, "method").unwrap();
    builder.add_property(method, "local").unwrap();
    let tree = builder.finish().unwrap();

    let chain = TreeScopeProvider::new(&tree).scopes_visible_at(&Anchor::new(method));
    let owners: Vec<_> = chain
        .iter()
        .filter_map(|scope| tree.scope(scope).owner())
        .collect();
    let method_at = owners.iter().position(|&o| o == method).unwrap();
    let inner_at = owners.iter().position(|&o| o == inner).unwrap();
    let outer_at = owners.iter().position(|&o| o == outer).unwrap();

    assert!(method_at < inner_at && inner_at < outer_at);
    assert_local_to_global_tail(&tree, &chain);
}

#[test]
fn test_tag_scopes_are_most_local() {
    let fixture = shape_hierarchy();
    let tree = &fixture.tree;
    let provider = TreeScopeProvider::new(tree);
    let scopes = tree.decl_scopes(fixture.circle);

    for (section, expected) in [
        (TagSection::Param, scopes.constructor_parameters),
        (TagSection::Property, scopes.properties),
        (TagSection::Constructor, scopes.constructor),
    ] {
        let chain = provider.scopes_visible_at(&Anchor::new(fixture.circle).with_section(section));
        assert_eq!(chain.as_slice().first().copied(), expected, "{:?}", section);
        assert_eq!(tree.scope(chain.as_slice()[0]).kind(), ScopeKind::Local);
    }
}

#[test]
fn test_class_chain_excludes_constructor_parameters() {
    let fixture = shape_hierarchy();
    let tree = &fixture.tree;
    let chain = TreeScopeProvider::new(tree).scopes_visible_at(&Anchor::new(fixture.circle));
    let radius = tree.find_name("radius").unwrap();

    let bound: Vec<_> = chain
        .iter()
        .flat_map(|scope| tree.scope(scope).get(radius).to_vec())
        .collect();
    assert_eq!(bound, vec![fixture.radius_property]);
}

#[test]
fn test_cached_provider_matches_tree_provider() {
    let fixture = shape_hierarchy();
    let tree = &fixture.tree;
    let direct = TreeScopeProvider::new(tree);
    let cached = CachedScopeProvider::new(direct);

    for anchor in [fixture.circle, fixture.draw, fixture.unit, fixture.label] {
        for section in [TagSection::None, TagSection::Param, TagSection::Property] {
            let anchor = Anchor::new(anchor).with_section(section);
            assert_eq!(cached.scopes_visible_at(&anchor), direct.scopes_visible_at(&anchor));
        }
    }
    assert_eq!(cached.len(), 12);
}

#[test]
#[should_panic(expected = "does not belong")]
fn test_foreign_anchor_panics() {
    let big = shape_hierarchy();
    let small = TreeBuilder::new().finish().unwrap();

    TreeScopeProvider::new(&small).scopes_visible_at(&Anchor::new(big.unit));
}

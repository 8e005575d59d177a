//! Package fallback tests.

use kdoc::hir::TreeBuilder;
use kdoc::resolve::{Anchor, ResolutionOrigin};

use crate::helpers::resolve_assertions::*;
use crate::helpers::tree_fixtures::*;

#[test]
fn test_single_segment_package() {
    let mut builder = TreeBuilder::new();
    let io = builder.ensure_package("io").unwrap();
    let file = builder.add_file("Main.kt", "app").unwrap();
    let anchor = builder.add_function(file, "main").unwrap();
    let tree = builder.finish().unwrap();

    let result = assert_resolves_to(&tree, Anchor::new(anchor), "io", &[io]);
    assert_eq!(result.origin(), ResolutionOrigin::Package);
}

#[test]
fn test_declaration_outranks_package() {
    let mut builder = TreeBuilder::new();
    builder.ensure_package("io").unwrap();
    let file = builder.add_file("Main.kt", "app").unwrap();
    let io = builder.add_property(file, "io").unwrap();
    let anchor = builder.add_function(file, "main").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "io", &[io]);
}

#[test]
fn test_intermediate_package_by_full_name() {
    let fixture = qualified_path(false);
    let package = fixture.tree.packages().exact("A").unwrap();

    assert_resolves_to(&fixture.tree, Anchor::new(fixture.main), "A", &[package]);
    assert_unresolved(&fixture.tree, Anchor::new(fixture.main), "B");
}

#[test]
fn test_own_package_resolves() {
    let fixture = nested_package();
    let app = fixture.tree.packages().exact("app").unwrap();

    assert_resolves_to(&fixture.tree, Anchor::new(fixture.main), "app", &[app]);
}

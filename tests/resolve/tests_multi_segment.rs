//! Qualified-path tests: relative descent, global prefixes and blocking.

use kdoc::hir::{ClassKind, TreeBuilder};
use kdoc::resolve::{Anchor, ResolutionOrigin};

use crate::helpers::resolve_assertions::*;
use crate::helpers::tree_fixtures::*;

// =============================================================================
// RELATIVE
// =============================================================================

#[test]
fn test_relative_through_nested_and_companion() {
    let fixture = shape_hierarchy();
    let anchor = Anchor::new(fixture.draw);

    assert_resolves_to(&fixture.tree, anchor, "Circle.Style", &[fixture.style]);
    assert_resolves_to(&fixture.tree, anchor, "Circle.unit", &[fixture.unit]);
    assert_resolves_to(&fixture.tree, anchor, "Circle.Companion.unit", &[fixture.unit]);
    let result = assert_resolves_to(&fixture.tree, anchor, "Circle.draw", &[fixture.draw]);
    assert_eq!(result.origin(), ResolutionOrigin::Relative);
}

#[test]
fn test_relative_includes_inherited_members() {
    let fixture = shape_hierarchy();
    assert_resolves_to(
        &fixture.tree,
        Anchor::new(fixture.circle),
        "Circle.area",
        &[fixture.area],
    );
}

#[test]
fn test_object_members_reachable_by_path() {
    let mut builder = TreeBuilder::new();
    let file = builder.add_file("A.kt", "p").unwrap();
    let registry = builder.add_classifier(file, "Registry", ClassKind::Object).unwrap();
    let lookup = builder.add_function(registry, "lookup").unwrap();
    let anchor = builder.add_function(file, "anchor").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "Registry.lookup", &[lookup]);
}

#[test]
fn test_same_named_classifiers_concatenate() {
    let mut builder = TreeBuilder::new();
    let first = builder.add_file("A.kt", "p").unwrap();
    let second = builder.add_file("B.kt", "p").unwrap();
    let a1 = builder.add_class(first, "Dup").unwrap();
    let f1 = builder.add_function(a1, "f").unwrap();
    let a2 = builder.add_class(second, "Dup").unwrap();
    let f2 = builder.add_function(a2, "f").unwrap();
    let anchor = builder.add_function(first, "anchor").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "Dup.f", &[f1, f2]);
}

// =============================================================================
// BLOCKING
// =============================================================================

#[test]
fn test_parameter_blocks_path() {
    let mut builder = TreeBuilder::new();
    let lib = builder.add_file("Lib.kt", "lib").unwrap();
    let config = builder.add_class(lib, "config").unwrap();
    builder.add_function(config, "load").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    builder.add_import(main, "lib.config", None).unwrap();
    let function = builder.add_function(main, "run").unwrap();
    let param = builder.add_parameter(function, "config").unwrap();
    let tree = builder.finish().unwrap();

    let result = assert_unresolved(&tree, Anchor::new(function), "config.load");
    assert_eq!(result.origin(), ResolutionOrigin::Blocked { by: param });
}

#[test]
fn test_local_classifier_without_member_blocks_global() {
    let mut builder = TreeBuilder::new();
    let lib = builder.add_file("C.kt", "A.B").unwrap();
    let c = builder.add_class(lib, "C").unwrap();
    builder.add_function(c, "foo").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    let local_a = builder.add_class(main, "A").unwrap();
    let anchor = builder.add_function(main, "main").unwrap();
    let tree = builder.finish().unwrap();

    let result = assert_unresolved(&tree, Anchor::new(anchor), "A.B.C.foo");
    assert_eq!(result.origin(), ResolutionOrigin::Blocked { by: local_a });
}

#[test]
fn test_local_function_does_not_block_global() {
    let mut builder = TreeBuilder::new();
    let lib = builder.add_file("C.kt", "A.B").unwrap();
    let c = builder.add_class(lib, "C").unwrap();
    let foo = builder.add_function(c, "foo").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    builder.add_function(main, "A").unwrap();
    let anchor = builder.add_function(main, "main").unwrap();
    let tree = builder.finish().unwrap();

    let result = assert_resolves_to(&tree, Anchor::new(anchor), "A.B.C.foo", &[foo]);
    assert_eq!(result.origin(), ResolutionOrigin::Global);
}

#[test]
fn test_blocked_reference_skips_package_fallback() {
    let mut builder = TreeBuilder::new();
    builder.ensure_package("net.http").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    let net = builder.add_property(main, "net").unwrap();
    let anchor = builder.add_function(main, "main").unwrap();
    let tree = builder.finish().unwrap();

    let result = assert_unresolved(&tree, Anchor::new(anchor), "net.http");
    assert_eq!(result.origin(), ResolutionOrigin::Blocked { by: net });
}

// =============================================================================
// GLOBAL
// =============================================================================

#[test]
fn test_longest_package_prefix_wins() {
    let mut builder = TreeBuilder::new();
    let outer = builder.add_file("Outer.kt", "a").unwrap();
    let decoy = builder.add_class(outer, "b").unwrap();
    builder.add_class(decoy, "C").unwrap();
    let inner = builder.add_file("Inner.kt", "a.b").unwrap();
    let target = builder.add_class(inner, "C").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    let anchor = builder.add_function(main, "main").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "a.b.C", &[target]);
}

#[test]
fn test_top_level_function_below_package() {
    let mut builder = TreeBuilder::new();
    let lib = builder.add_file("Util.kt", "text.util").unwrap();
    let trim = builder.add_function(lib, "trim").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    let anchor = builder.add_function(main, "main").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "text.util.trim", &[trim]);
    assert_unresolved(&tree, Anchor::new(anchor), "util.trim");
}

#[test]
fn test_partial_package_path_does_not_resolve() {
    let fixture = qualified_path(false);
    assert_unresolved(&fixture.tree, Anchor::new(fixture.main), "B.C.foo");
}

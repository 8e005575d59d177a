//! Short-name scope traversal tests.

use kdoc::hir::TreeBuilder;
use kdoc::resolve::{Anchor, KDocResolver, Reference, resolve_short_name};

use crate::helpers::resolve_assertions::*;

#[test]
fn test_classifier_before_function_before_property() {
    let mut builder = TreeBuilder::new();
    let file = builder.add_file("A.kt", "p").unwrap();
    let property = builder.add_property(file, "item").unwrap();
    let function = builder.add_function(file, "item").unwrap();
    let class = builder.add_class(file, "item").unwrap();
    let anchor = builder.add_function(file, "anchor").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "item", &[class, function, property]);
}

#[test]
fn test_overloads_follow_file_processing_order() {
    let mut builder = TreeBuilder::new();
    let first = builder.add_file("A.kt", "p").unwrap();
    let second = builder.add_file("B.kt", "p").unwrap();
    let from_second = builder.add_function(second, "x").unwrap();
    let anchor = builder.add_function(second, "anchor").unwrap();
    let from_first = builder.add_function(first, "x").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "x", &[from_first, from_second]);
}

#[test]
fn test_explicit_import_beats_same_package() {
    let mut builder = TreeBuilder::new();
    let lib = builder.add_file("Lib.kt", "lib").unwrap();
    let imported = builder.add_class(lib, "Node").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    builder.add_import(main, "lib.Node", None).unwrap();
    let sibling = builder.add_file("Sibling.kt", "app").unwrap();
    builder.add_class(sibling, "Node").unwrap();
    let anchor = builder.add_function(main, "anchor").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "Node", &[imported]);
}

#[test]
fn test_same_package_beats_star_import() {
    let mut builder = TreeBuilder::new();
    let lib = builder.add_file("Lib.kt", "lib").unwrap();
    builder.add_class(lib, "Node").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    builder.add_star_import(main, "lib").unwrap();
    let local = builder.add_class(main, "Node").unwrap();
    let anchor = builder.add_function(main, "anchor").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "Node", &[local]);
}

#[test]
fn test_default_imports_are_last() {
    let mut builder = TreeBuilder::new();
    let builtins = builder.add_file("Builtins.kt", "kotlin").unwrap();
    let builtin = builder.add_class(builtins, "Pair").unwrap();
    builder.add_default_star_import("kotlin").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    let anchor = builder.add_function(main, "anchor").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "Pair", &[builtin]);
}

#[test]
fn test_import_alias_hides_original_name() {
    let mut builder = TreeBuilder::new();
    let lib = builder.add_file("Lib.kt", "lib").unwrap();
    let target = builder.add_class(lib, "LongName").unwrap();
    let main = builder.add_file("Main.kt", "app").unwrap();
    builder.add_import(main, "lib.LongName", Some("Short")).unwrap();
    let anchor = builder.add_function(main, "anchor").unwrap();
    let tree = builder.finish().unwrap();

    assert_resolves_to(&tree, Anchor::new(anchor), "Short", &[target]);
    assert_unresolved(&tree, Anchor::new(anchor), "LongName");
}

#[test]
fn test_short_name_is_pure_in_chain() {
    let mut builder = TreeBuilder::new();
    let file = builder.add_file("A.kt", "p").unwrap();
    builder.add_function(file, "f").unwrap();
    let anchor = builder.add_class(file, "Anchor").unwrap();
    let tree = builder.finish().unwrap();

    let chain = KDocResolver::new(&tree).scope_chain(&Anchor::new(anchor));
    let first = resolve_short_name(&tree, "f", &chain);
    let second = resolve_short_name(&tree, "f", &chain);
    assert_eq!(first, second);

    let reference = Reference::short("f");
    assert_eq!(
        KDocResolver::new(&tree).resolve(&Anchor::new(anchor), &reference),
        first
    );
}

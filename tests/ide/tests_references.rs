//! Find usages over resolved links.

use kdoc::ide::{DocLink, LinkIndex};
use kdoc::resolve::{Anchor, KDocResolver, Reference};

use crate::helpers::tree_fixtures::*;

fn index_links(tree: &kdoc::DeclarationTree, links: &[(Anchor, &str)]) -> LinkIndex {
    let resolver = KDocResolver::new(tree);
    let mut index = LinkIndex::new();
    for (anchor, path) in links {
        let reference = Reference::from_dotted(path).unwrap();
        let result = resolver.resolve(anchor, &reference);
        index.record(DocLink::new(*anchor, reference), &result);
    }
    index
}

#[test]
fn test_ambiguous_link_references_every_overload() {
    let fixture = overloads();
    let index = index_links(&fixture.tree, &[(Anchor::new(fixture.anchor), "x")]);

    assert!(index.is_referenced(fixture.with_param));
    assert!(index.is_referenced(fixture.without_param));
    assert_eq!(
        index.referenced_symbols().collect::<Vec<_>>(),
        vec![fixture.with_param, fixture.without_param]
    );
}

#[test]
fn test_usages_in_recording_order() {
    let fixture = shape_hierarchy();
    let index = index_links(
        &fixture.tree,
        &[
            (Anchor::new(fixture.draw), "area"),
            (Anchor::new(fixture.label), "Circle.draw"),
            (Anchor::new(fixture.circle), "Shape.area"),
            (Anchor::new(fixture.unit), "nothing"),
        ],
    );

    let usages = index.usages(fixture.area);
    assert_eq!(usages.len(), 2);
    assert_eq!(usages[0].anchor, Anchor::new(fixture.draw));
    assert_eq!(usages[1].reference.full_name(), "Shape.area");

    assert_eq!(index.usages(fixture.draw).len(), 1);
    assert_eq!(index.len(), 4);
    assert!(index.usages(fixture.style).is_empty());
}

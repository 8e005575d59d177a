//! Tag-section matrix.
//!
//! `class Circle<T>(val radius: Int) : Shape()` documented with each tag
//! section, resolving names that the sections treat differently.

use rstest::rstest;

use kdoc::hir::SymbolId;
use kdoc::resolve::{Anchor, ResolutionOrigin, TagSection};

use crate::helpers::resolve_assertions::*;
use crate::helpers::tree_fixtures::*;

#[derive(Clone, Copy, Debug)]
enum Expect {
    Class,
    TypeParam,
    RadiusParam,
    RadiusProperty,
    Label,
    Constructor,
}

fn expected(fixture: &ShapeHierarchy, expect: Expect) -> SymbolId {
    match expect {
        Expect::Class => fixture.circle,
        Expect::TypeParam => fixture.type_param,
        Expect::RadiusParam => fixture.radius_param,
        Expect::RadiusProperty => fixture.radius_property,
        Expect::Label => fixture.label,
        Expect::Constructor => fixture
            .tree
            .symbol(fixture.circle)
            .primary_constructor()
            .unwrap(),
    }
}

#[rstest]
#[case(TagSection::None, "Circle", Expect::Class)]
#[case(TagSection::None, "T", Expect::TypeParam)]
#[case(TagSection::None, "radius", Expect::RadiusProperty)]
#[case(TagSection::None, "label", Expect::Label)]
#[case(TagSection::Param, "radius", Expect::RadiusParam)]
#[case(TagSection::Param, "T", Expect::TypeParam)]
#[case(TagSection::Param, "Circle", Expect::Class)]
#[case(TagSection::Property, "radius", Expect::RadiusProperty)]
#[case(TagSection::Property, "label", Expect::Label)]
#[case(TagSection::Constructor, "Circle", Expect::Constructor)]
#[case(TagSection::Constructor, "radius", Expect::RadiusProperty)]
fn test_class_tag_sections(
    #[case] section: TagSection,
    #[case] name: &str,
    #[case] expect: Expect,
) {
    let fixture = shape_hierarchy();
    let anchor = Anchor::new(fixture.circle).with_section(section);
    let target = expected(&fixture, expect);

    assert_first(&fixture.tree, anchor, name, target);
}

#[test]
fn test_constructor_section_plain_parameter() {
    let mut builder = kdoc::hir::TreeBuilder::new();
    let file = builder.add_file("Point.kt", "geo").unwrap();
    let class = builder.add_class(file, "Point").unwrap();
    let ctor = builder.add_primary_constructor(class).unwrap();
    let seed = builder.add_parameter(ctor, "seed").unwrap();
    let tree = builder.finish().unwrap();

    let anchor = Anchor::new(class).with_section(TagSection::Constructor);
    let result = assert_resolves_to(&tree, anchor, "seed", &[seed]);
    assert_eq!(result.origin(), ResolutionOrigin::Scope);
}

/// `class <class>(<leading params>, val <property>)` with an optional member
/// function: `@param` puts the parameter first, `@constructor` the property.
#[rstest]
#[case("Circle", "radius", 0, false)]
#[case("Box", "width", 2, false)]
#[case("Node", "next", 1, true)]
#[case("abc", "abc", 0, false)]
#[case("Pair", "first", 3, true)]
fn test_param_and_constructor_sections_differ_on_properties(
    #[case] class_name: &str,
    #[case] property_name: &str,
    #[case] leading_params: usize,
    #[case] with_member: bool,
) {
    let mut builder = kdoc::hir::TreeBuilder::new();
    let file = builder.add_file("Gen.kt", "gen").unwrap();
    let class = builder.add_class(file, class_name).unwrap();
    let ctor = builder.add_primary_constructor(class).unwrap();
    for index in 0..leading_params {
        builder.add_parameter(ctor, &format!("arg{index}")).unwrap();
    }
    let (param, property) = builder.add_constructor_property(class, property_name).unwrap();
    if with_member {
        builder.add_function(class, "describe").unwrap();
    }
    let tree = builder.finish().unwrap();

    let under_param = Anchor::new(class).with_section(TagSection::Param);
    let under_constructor = Anchor::new(class).with_section(TagSection::Constructor);
    assert_first(&tree, under_param, property_name, param);
    if property_name == class_name {
        // The constructor carries the class name and self-links first.
        assert_first(&tree, under_constructor, property_name, ctor);
    } else {
        assert_resolves_to(&tree, under_constructor, property_name, &[property, param]);
    }
}

#[rstest]
#[case(TagSection::None)]
#[case(TagSection::Param)]
#[case(TagSection::Property)]
#[case(TagSection::Constructor)]
fn test_members_visible_in_every_section(#[case] section: TagSection) {
    let fixture = shape_hierarchy();
    let anchor = Anchor::new(fixture.circle).with_section(section);

    assert_first(&fixture.tree, anchor, "draw", fixture.draw);
    assert_first(&fixture.tree, anchor, "area", fixture.area);
    assert_first(&fixture.tree, anchor, "Style", fixture.style);
    assert_first(&fixture.tree, anchor, "unit", fixture.unit);
    assert_first(&fixture.tree, anchor, "Shape", fixture.shape);
}

#[rstest]
#[case(TagSection::None, false)]
#[case(TagSection::Param, true)]
#[case(TagSection::Property, false)]
#[case(TagSection::Constructor, false)]
fn test_function_param_section(#[case] section: TagSection, #[case] param_first: bool) {
    let mut builder = kdoc::hir::TreeBuilder::new();
    let file = builder.add_file("F.kt", "").unwrap();
    let function = builder.add_function(file, "value").unwrap();
    let param = builder.add_parameter(function, "value").unwrap();
    let tree = builder.finish().unwrap();

    let result = resolve(&tree, Anchor::new(function).with_section(section), "value");
    let expected = if param_first { param } else { function };
    assert_eq!(result.first(), Some(expected));
}

//! Import directives and their resolution against the declaration tree.

use smol_str::SmolStr;

use super::ids::{ImportId, SymbolId};
use super::symbols::DeclarationKind;
use super::tree::DeclarationTree;
use crate::base::FileId;

/// Where an import directive comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImportOrigin {
    /// Written in a file's import list.
    Explicit(FileId),
    /// Implicitly imported into every file.
    Default,
}

/// `import a.b.C`, `import a.b.C as D` or `import a.b.*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDirective {
    pub id: ImportId,
    pub path: Vec<SmolStr>,
    pub alias: Option<SmolStr>,
    pub is_star: bool,
    pub origin: ImportOrigin,
    /// Symbols bound by this directive, filled when the tree is finished.
    pub resolved: Vec<SymbolId>,
}

impl ImportDirective {
    /// The dotted path as written, with `.*` for star imports.
    pub fn display_path(&self) -> String {
        let mut out = self.path.join(".");
        if self.is_star {
            out.push_str(".*");
        }
        out
    }

    pub fn is_default(&self) -> bool {
        self.origin == ImportOrigin::Default
    }

    /// Whether the directive binds `symbol`.
    pub fn binds(&self, symbol: SymbolId) -> bool {
        self.resolved.contains(&symbol)
    }
}

/// Resolve the symbols an import directive binds.
///
/// A named import binds every top-level declaration of its package with
/// the last path segment as name, or the nested classifiers and object
/// members of the named classifier. A star import binds all members of a
/// package or all static members of a classifier.
pub(crate) fn resolve_import(tree: &DeclarationTree, directive: &ImportDirective) -> Vec<SymbolId> {
    let path = &directive.path;
    if directive.is_star {
        if let Some(package) = tree.packages().exact_segments(path) {
            return tree.package_members(package);
        }
        return classifier_targets(tree, path)
            .into_iter()
            .flat_map(|classifier| tree.static_members(classifier))
            .collect();
    }

    let Some((last, qualifier)) = path.split_last() else {
        return Vec::new();
    };
    let Some(last) = tree.find_name(last) else {
        return Vec::new();
    };

    if let Some(package) = tree.packages().exact_segments(qualifier) {
        return tree
            .children(package)
            .iter()
            .copied()
            .filter(|&child| {
                let symbol = tree.symbol(child);
                symbol.name == last && symbol.kind() != DeclarationKind::Package
            })
            .collect();
    }

    classifier_targets(tree, qualifier)
        .into_iter()
        .flat_map(|classifier| {
            tree.static_members(classifier)
                .into_iter()
                .filter(|&member| tree.symbol(member).name == last)
        })
        .collect()
}

/// Classifiers denoted by a fully-qualified path such as `a.b.Outer.Inner`.
fn classifier_targets(tree: &DeclarationTree, path: &[SmolStr]) -> Vec<SymbolId> {
    let Some((package, consumed)) = tree.packages().longest_prefix(path) else {
        // Classifiers in the root package.
        return descend(tree, tree.root_package(), path);
    };
    descend(tree, package, &path[consumed..])
}

fn descend(tree: &DeclarationTree, package: SymbolId, path: &[SmolStr]) -> Vec<SymbolId> {
    let Some((first, rest)) = path.split_first() else {
        return Vec::new();
    };
    let Some(first) = tree.find_name(first) else {
        return Vec::new();
    };
    let mut current = tree.top_level_classifiers(package, first);
    for segment in rest {
        let Some(segment) = tree.find_name(segment) else {
            return Vec::new();
        };
        current = current
            .into_iter()
            .flat_map(|classifier| tree.nested_classifiers(classifier, segment))
            .collect();
    }
    current
}

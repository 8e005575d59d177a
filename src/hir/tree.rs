//! The declaration tree: symbol arena, scope arena and package table.
//!
//! This is the symbol table the resolver reads. It is produced once by a
//! [`TreeBuilder`](super::TreeBuilder) and never mutated afterwards, so it
//! can be shared across resolver threads.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::ids::{ImportId, ScopeId, SymbolId};
use super::imports::ImportDirective;
use super::packages::PackageTable;
use super::scope::Scope;
use super::symbols::{DeclarationKind, Symbol};
use crate::base::{FileId, Interner, Name};

/// Precomputed scopes of one declaration.
///
/// Which fields are set depends on the declaration kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeclScopes {
    /// Package members, or own functions and properties of a classifier.
    pub members: Option<ScopeId>,
    /// Members reachable through supertypes.
    pub inherited: Option<ScopeId>,
    /// Nested classifiers and companion members.
    pub statics: Option<ScopeId>,
    pub type_parameters: Option<ScopeId>,
    /// Value parameters and local declarations of a function or constructor.
    pub locals: Option<ScopeId>,
    /// Value and type parameters of a function or constructor.
    pub parameters: Option<ScopeId>,
    /// Primary-constructor parameters.
    pub primary_parameters: Option<ScopeId>,
    /// Primary-constructor parameters plus the primary constructor.
    pub constructor_parameters: Option<ScopeId>,
    /// The primary constructor alone.
    pub constructor: Option<ScopeId>,
    /// Own members merged with primary-constructor parameters.
    pub members_with_parameters: Option<ScopeId>,
    /// Member properties, used when a tag section promotes them.
    pub properties: Option<ScopeId>,
}

/// Per-file data: the package and the import scopes.
#[derive(Clone, Debug)]
pub struct FileData {
    pub path: SmolStr,
    pub package: SymbolId,
    pub imports: Vec<ImportId>,
    pub explicit_imports: ScopeId,
    pub star_imports: ScopeId,
}

/// Immutable symbol table for documentation-link resolution.
#[derive(Debug)]
pub struct DeclarationTree {
    pub(super) names: Interner,
    pub(super) symbols: Vec<Symbol>,
    pub(super) children: Vec<Vec<SymbolId>>,
    pub(super) decl_scopes: Vec<DeclScopes>,
    pub(super) scopes: Vec<Scope>,
    pub(super) files: IndexMap<FileId, FileData>,
    pub(super) packages: PackageTable,
    pub(super) imports: Vec<ImportDirective>,
    pub(super) root_package: SymbolId,
    pub(super) default_imports: ScopeId,
    pub(super) default_star_imports: ScopeId,
}

impl DeclarationTree {
    // ============================================================
    // Symbols
    // ============================================================

    /// Get a symbol by id.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different tree.
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        self.symbols
            .get(id.index())
            .unwrap_or_else(|| panic!("{id:?} does not belong to this declaration tree"))
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        id.index() < self.symbols.len()
    }

    pub fn kind(&self, id: SymbolId) -> DeclarationKind {
        self.symbol(id).kind()
    }

    /// Children of a declaration in declaration order.
    pub fn children(&self, id: SymbolId) -> &[SymbolId] {
        self.children.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (SymbolId::new(i), s))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    // ============================================================
    // Names
    // ============================================================

    pub fn names(&self) -> &Interner {
        &self.names
    }

    /// The interned name for `text`, if any declaration could carry it.
    pub fn find_name(&self, text: &str) -> Option<Name> {
        self.names.find(text)
    }

    pub fn name_text(&self, name: Name) -> SmolStr {
        self.names.lookup(name).unwrap_or_default()
    }

    /// Simple name of a symbol.
    pub fn symbol_name(&self, id: SymbolId) -> SmolStr {
        self.name_text(self.symbol(id).name)
    }

    /// Dotted fully-qualified name, e.g. `com.example.Outer.inner`.
    ///
    /// Packages yield their own fully-qualified name; other declarations
    /// append their container chain to the package name.
    pub fn qualified_name(&self, id: SymbolId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let symbol = self.symbol(cur);
            if let Some(fq) = symbol.package_fq_name() {
                if !fq.is_empty() {
                    parts.push(SmolStr::new(fq));
                }
                break;
            }
            parts.push(self.name_text(symbol.name));
            current = symbol.parent;
        }
        parts.reverse();
        parts.join(".")
    }

    // ============================================================
    // Structure
    // ============================================================

    pub fn root_package(&self) -> SymbolId {
        self.root_package
    }

    pub fn packages(&self) -> &PackageTable {
        &self.packages
    }

    /// Package containing a declaration (the declaration itself for packages).
    pub fn package_of(&self, id: SymbolId) -> SymbolId {
        let mut current = id;
        loop {
            let symbol = self.symbol(current);
            if symbol.kind() == DeclarationKind::Package {
                return current;
            }
            match symbol.parent {
                Some(parent) => current = parent,
                None => return self.root_package,
            }
        }
    }

    /// Nearest enclosing classifier, excluding `id` itself.
    pub fn enclosing_classifier(&self, id: SymbolId) -> Option<SymbolId> {
        self.ancestors(id)
            .find(|&ancestor| self.kind(ancestor) == DeclarationKind::Classifier)
    }

    /// Strict ancestors, innermost first.
    pub fn ancestors(&self, id: SymbolId) -> impl Iterator<Item = SymbolId> + '_ {
        std::iter::successors(self.symbol(id).parent, move |&p| self.symbol(p).parent)
    }

    /// Top-level classifiers named `name` in a package, across all files.
    pub fn top_level_classifiers(&self, package: SymbolId, name: Name) -> Vec<SymbolId> {
        self.children_named(package, name, DeclarationKind::Classifier)
    }

    /// Classifiers directly nested in `classifier` named `name`.
    pub fn nested_classifiers(&self, classifier: SymbolId, name: Name) -> Vec<SymbolId> {
        self.children_named(classifier, name, DeclarationKind::Classifier)
    }

    fn children_named(&self, parent: SymbolId, name: Name, kind: DeclarationKind) -> Vec<SymbolId> {
        self.children(parent)
            .iter()
            .copied()
            .filter(|&child| {
                let symbol = self.symbol(child);
                symbol.name == name && symbol.kind() == kind
            })
            .collect()
    }

    /// All non-package members of a package.
    pub fn package_members(&self, package: SymbolId) -> Vec<SymbolId> {
        self.children(package)
            .iter()
            .copied()
            .filter(|&child| self.kind(child) != DeclarationKind::Package)
            .collect()
    }

    /// The companion object of a classifier.
    pub fn companion(&self, classifier: SymbolId) -> Option<SymbolId> {
        self.children(classifier)
            .iter()
            .copied()
            .find(|&child| self.symbol(child).is_companion())
    }

    /// Declarations reachable through a classifier without an instance:
    /// nested classifiers, companion members and, for objects, the
    /// object's own callables.
    pub fn static_members(&self, classifier: SymbolId) -> Vec<SymbolId> {
        let symbol = self.symbol(classifier);
        let is_object = matches!(
            symbol.class_kind(),
            Some(super::ClassKind::Object | super::ClassKind::CompanionObject)
        );
        let mut out: Vec<SymbolId> = self
            .children(classifier)
            .iter()
            .copied()
            .filter(|&child| match self.kind(child) {
                DeclarationKind::Classifier => true,
                DeclarationKind::Function | DeclarationKind::Property => is_object,
                _ => false,
            })
            .collect();
        if let Some(companion) = self.companion(classifier) {
            out.extend(self.children(companion).iter().copied().filter(|&child| {
                matches!(
                    self.kind(child),
                    DeclarationKind::Classifier
                        | DeclarationKind::Function
                        | DeclarationKind::Property
                )
            }));
        }
        out
    }

    // ============================================================
    // Scopes
    // ============================================================

    /// Get a scope record by id.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different tree.
    pub fn scope(&self, id: ScopeId) -> &Scope {
        self.scopes
            .get(id.index())
            .unwrap_or_else(|| panic!("{id:?} does not belong to this declaration tree"))
    }

    pub fn decl_scopes(&self, id: SymbolId) -> DeclScopes {
        self.decl_scopes.get(id.index()).copied().unwrap_or_default()
    }

    pub fn default_import_scope(&self) -> ScopeId {
        self.default_imports
    }

    pub fn default_star_import_scope(&self) -> ScopeId {
        self.default_star_imports
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    // ============================================================
    // Files & imports
    // ============================================================

    pub fn file(&self, file: FileId) -> Option<&FileData> {
        self.files.get(&file)
    }

    pub fn files(&self) -> impl Iterator<Item = (FileId, &FileData)> {
        self.files.iter().map(|(id, data)| (*id, data))
    }

    pub fn import(&self, id: ImportId) -> &ImportDirective {
        &self.imports[id.index()]
    }

    pub fn imports(&self) -> &[ImportDirective] {
        &self.imports
    }

    /// Import directives written in a file, in source order.
    pub fn file_imports(&self, file: FileId) -> impl Iterator<Item = &ImportDirective> {
        self.file(file)
            .into_iter()
            .flat_map(|data| data.imports.iter().map(|&id| self.import(id)))
    }
}

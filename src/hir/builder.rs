//! Construction of a [`DeclarationTree`].
//!
//! The builder is the adapter a host front end fills in: files with their
//! package and imports, then declarations nested inside files and other
//! declarations. [`TreeBuilder::finish`] assigns declaration order, resolves
//! imports and precomputes every scope the resolver will ever walk.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;
use tracing::{debug, trace};

use super::ids::{ImportId, ScopeId, SymbolId};
use super::imports::{ImportDirective, ImportOrigin, resolve_import};
use super::packages::PackageTable;
use super::scope::{Scope, ScopeKind};
use super::symbols::{ClassKind, DeclarationKind, Symbol, SymbolData};
use super::tree::{DeclScopes, DeclarationTree, FileData};
use crate::base::{FileId, Interner, TextRange};

/// Errors raised while building a declaration tree.
///
/// These are contract violations by the host adapter, not resolution
/// outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("unknown file: {0:?}")]
    UnknownFile(FileId),

    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(SymbolId),

    #[error("a {child:?} cannot be declared inside a {parent:?}")]
    InvalidContainer {
        child: DeclarationKind,
        parent: DeclarationKind,
    },

    #[error("invalid declaration name '{0}'")]
    InvalidName(String),

    #[error("invalid package name '{0}'")]
    InvalidPackage(String),

    #[error("invalid import path '{0}'")]
    InvalidImport(String),

    #[error("'{0}' already has a primary constructor")]
    DuplicatePrimaryConstructor(String),

    #[error("{0:?} is not a classifier")]
    NotAClassifier(SymbolId),
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Where a new declaration goes: top level of a file, or inside another
/// declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    File(FileId),
    Symbol(SymbolId),
}

impl From<FileId> for Container {
    fn from(file: FileId) -> Self {
        Container::File(file)
    }
}

impl From<SymbolId> for Container {
    fn from(symbol: SymbolId) -> Self {
        Container::Symbol(symbol)
    }
}

#[derive(Debug)]
struct PendingFile {
    path: SmolStr,
    package: SymbolId,
    imports: Vec<ImportId>,
}

/// Accumulates declarations before they are frozen into a tree.
#[derive(Debug)]
pub struct TreeBuilder {
    names: Interner,
    symbols: Vec<Symbol>,
    children: Vec<Vec<SymbolId>>,
    files: IndexMap<FileId, PendingFile>,
    packages: PackageTable,
    imports: Vec<ImportDirective>,
    root_package: SymbolId,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        let names = Interner::new();
        let root = Symbol {
            name: names.intern(""),
            data: SymbolData::Package {
                fq_name: SmolStr::default(),
            },
            parent: None,
            order: 0,
            file: None,
            range: None,
        };
        let mut packages = PackageTable::new();
        packages.insert(SmolStr::default(), SymbolId::new(0));
        Self {
            names,
            symbols: vec![root],
            children: vec![Vec::new()],
            files: IndexMap::new(),
            packages,
            imports: Vec::new(),
            root_package: SymbolId::new(0),
        }
    }

    // ============================================================
    // Files & packages
    // ============================================================

    /// Register a file in package `package` (dotted, empty for the root).
    ///
    /// Files are processed in registration order.
    pub fn add_file(&mut self, path: &str, package: &str) -> TreeResult<FileId> {
        let package = self.ensure_package(package)?;
        let id = FileId::new(self.files.len() as u32);
        self.files.insert(
            id,
            PendingFile {
                path: SmolStr::new(path),
                package,
                imports: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Get or create a package and all of its parent packages.
    pub fn ensure_package(&mut self, fq_name: &str) -> TreeResult<SymbolId> {
        if fq_name.is_empty() {
            return Ok(self.root_package);
        }
        let segments: Vec<&str> = fq_name.split('.').collect();
        if segments.iter().any(|s| !is_identifier(s)) {
            return Err(TreeError::InvalidPackage(fq_name.to_string()));
        }

        let mut parent = self.root_package;
        for len in 1..=segments.len() {
            let prefix = segments[..len].join(".");
            if let Some(existing) = self.packages.exact(&prefix) {
                parent = existing;
                continue;
            }
            let id = self.push_symbol(
                segments[len - 1],
                SymbolData::Package {
                    fq_name: SmolStr::new(&prefix),
                },
                parent,
                None,
            );
            self.packages.insert(SmolStr::new(prefix), id);
            parent = id;
        }
        Ok(parent)
    }

    /// `import a.b.C` (or `import a.b.C as alias`).
    pub fn add_import(&mut self, file: FileId, path: &str, alias: Option<&str>) -> TreeResult<ImportId> {
        if !self.files.contains_key(&file) {
            return Err(TreeError::UnknownFile(file));
        }
        let id = self.push_import(path, alias, false, ImportOrigin::Explicit(file))?;
        if let Some(pending) = self.files.get_mut(&file) {
            pending.imports.push(id);
        }
        Ok(id)
    }

    /// `import a.b.*`; `path` is given without the trailing `.*`.
    pub fn add_star_import(&mut self, file: FileId, path: &str) -> TreeResult<ImportId> {
        if !self.files.contains_key(&file) {
            return Err(TreeError::UnknownFile(file));
        }
        let id = self.push_import(path, None, true, ImportOrigin::Explicit(file))?;
        if let Some(pending) = self.files.get_mut(&file) {
            pending.imports.push(id);
        }
        Ok(id)
    }

    /// A named import every file receives implicitly.
    pub fn add_default_import(&mut self, path: &str) -> TreeResult<ImportId> {
        self.push_import(path, None, false, ImportOrigin::Default)
    }

    /// A star import every file receives implicitly (e.g. `kotlin.*`).
    pub fn add_default_star_import(&mut self, path: &str) -> TreeResult<ImportId> {
        self.push_import(path, None, true, ImportOrigin::Default)
    }

    fn push_import(
        &mut self,
        path: &str,
        alias: Option<&str>,
        is_star: bool,
        origin: ImportOrigin,
    ) -> TreeResult<ImportId> {
        let segments: Vec<SmolStr> = path.split('.').map(SmolStr::new).collect();
        if path.is_empty() || segments.iter().any(|s| !is_identifier(s)) {
            return Err(TreeError::InvalidImport(path.to_string()));
        }
        if let Some(alias) = alias {
            if !is_identifier(alias) {
                return Err(TreeError::InvalidName(alias.to_string()));
            }
            self.names.intern(alias);
        }
        let id = ImportId(self.imports.len() as u32);
        self.imports.push(ImportDirective {
            id,
            path: segments,
            alias: alias.map(SmolStr::new),
            is_star,
            origin,
            resolved: Vec::new(),
        });
        Ok(id)
    }

    // ============================================================
    // Declarations
    // ============================================================

    pub fn add_class(&mut self, parent: impl Into<Container>, name: &str) -> TreeResult<SymbolId> {
        self.add_classifier(parent, name, ClassKind::Class)
    }

    pub fn add_classifier(
        &mut self,
        parent: impl Into<Container>,
        name: &str,
        class_kind: ClassKind,
    ) -> TreeResult<SymbolId> {
        self.add_declaration(
            parent.into(),
            name,
            SymbolData::Classifier {
                class_kind,
                supertypes: Vec::new(),
                primary_constructor: None,
            },
        )
    }

    /// Companion object of `class`, named `Companion` unless given a name.
    pub fn add_companion(&mut self, class: SymbolId, name: Option<&str>) -> TreeResult<SymbolId> {
        self.expect_classifier(class)?;
        self.add_classifier(
            class,
            name.unwrap_or("Companion"),
            ClassKind::CompanionObject,
        )
    }

    pub fn add_function(&mut self, parent: impl Into<Container>, name: &str) -> TreeResult<SymbolId> {
        self.add_declaration(parent.into(), name, SymbolData::Function { receiver: None })
    }

    pub fn add_extension_function(
        &mut self,
        parent: impl Into<Container>,
        name: &str,
        receiver: SymbolId,
    ) -> TreeResult<SymbolId> {
        self.expect_classifier(receiver)?;
        self.add_declaration(
            parent.into(),
            name,
            SymbolData::Function {
                receiver: Some(receiver),
            },
        )
    }

    pub fn add_property(&mut self, parent: impl Into<Container>, name: &str) -> TreeResult<SymbolId> {
        self.add_declaration(
            parent.into(),
            name,
            SymbolData::Property {
                receiver: None,
                in_primary_constructor: false,
            },
        )
    }

    pub fn add_extension_property(
        &mut self,
        parent: impl Into<Container>,
        name: &str,
        receiver: SymbolId,
    ) -> TreeResult<SymbolId> {
        self.expect_classifier(receiver)?;
        self.add_declaration(
            parent.into(),
            name,
            SymbolData::Property {
                receiver: Some(receiver),
                in_primary_constructor: false,
            },
        )
    }

    /// Value parameter of a function or constructor.
    pub fn add_parameter(&mut self, owner: SymbolId, name: &str) -> TreeResult<SymbolId> {
        self.add_declaration(Container::Symbol(owner), name, SymbolData::Parameter)
    }

    pub fn add_type_parameter(&mut self, owner: SymbolId, name: &str) -> TreeResult<SymbolId> {
        self.add_declaration(Container::Symbol(owner), name, SymbolData::TypeParameter)
    }

    /// The primary constructor of `class`; it carries the class's name.
    pub fn add_primary_constructor(&mut self, class: SymbolId) -> TreeResult<SymbolId> {
        self.expect_classifier(class)?;
        if self.symbols[class.index()].primary_constructor().is_some() {
            let name = self.names.lookup(self.symbols[class.index()].name);
            return Err(TreeError::DuplicatePrimaryConstructor(
                name.unwrap_or_default().to_string(),
            ));
        }
        let name = self.names.lookup(self.symbols[class.index()].name).unwrap_or_default();
        let ctor = self.add_declaration(
            Container::Symbol(class),
            &name,
            SymbolData::Constructor { is_primary: true },
        )?;
        if let SymbolData::Classifier {
            primary_constructor,
            ..
        } = &mut self.symbols[class.index()].data
        {
            *primary_constructor = Some(ctor);
        }
        Ok(ctor)
    }

    pub fn add_secondary_constructor(&mut self, class: SymbolId) -> TreeResult<SymbolId> {
        self.expect_classifier(class)?;
        let name = self.names.lookup(self.symbols[class.index()].name).unwrap_or_default();
        self.add_declaration(
            Container::Symbol(class),
            &name,
            SymbolData::Constructor { is_primary: false },
        )
    }

    /// `class C(val name: T)`: a primary-constructor parameter and the
    /// member property it declares. Creates the primary constructor if
    /// needed. Returns `(parameter, property)`.
    pub fn add_constructor_property(
        &mut self,
        class: SymbolId,
        name: &str,
    ) -> TreeResult<(SymbolId, SymbolId)> {
        self.expect_classifier(class)?;
        let ctor = match self.symbols[class.index()].primary_constructor() {
            Some(ctor) => ctor,
            None => self.add_primary_constructor(class)?,
        };
        let parameter = self.add_parameter(ctor, name)?;
        let property = self.add_declaration(
            Container::Symbol(class),
            name,
            SymbolData::Property {
                receiver: None,
                in_primary_constructor: true,
            },
        )?;
        Ok((parameter, property))
    }

    pub fn add_supertype(&mut self, class: SymbolId, supertype: SymbolId) -> TreeResult<()> {
        self.expect_classifier(supertype)?;
        self.expect_classifier(class)?;
        if let SymbolData::Classifier { supertypes, .. } = &mut self.symbols[class.index()].data {
            if !supertypes.contains(&supertype) {
                supertypes.push(supertype);
            }
        }
        Ok(())
    }

    pub fn set_range(&mut self, symbol: SymbolId, range: TextRange) -> TreeResult<()> {
        let symbol = self
            .symbols
            .get_mut(symbol.index())
            .ok_or(TreeError::UnknownSymbol(symbol))?;
        symbol.range = Some(range);
        Ok(())
    }

    fn expect_classifier(&self, id: SymbolId) -> TreeResult<()> {
        match self.symbols.get(id.index()) {
            Some(symbol) if symbol.kind() == DeclarationKind::Classifier => Ok(()),
            Some(_) => Err(TreeError::NotAClassifier(id)),
            None => Err(TreeError::UnknownSymbol(id)),
        }
    }

    fn add_declaration(
        &mut self,
        container: Container,
        name: &str,
        data: SymbolData,
    ) -> TreeResult<SymbolId> {
        if !is_identifier(name) {
            return Err(TreeError::InvalidName(name.to_string()));
        }
        let child = data.kind();
        let (parent, file) = match container {
            Container::File(file) => {
                let pending = self.files.get(&file).ok_or(TreeError::UnknownFile(file))?;
                (pending.package, Some(file))
            }
            Container::Symbol(parent) => {
                let symbol = self
                    .symbols
                    .get(parent.index())
                    .ok_or(TreeError::UnknownSymbol(parent))?;
                if !allowed_parent(child, symbol.kind()) {
                    return Err(TreeError::InvalidContainer {
                        child,
                        parent: symbol.kind(),
                    });
                }
                (parent, symbol.file)
            }
        };
        Ok(self.push_symbol(name, data, parent, file))
    }

    fn push_symbol(
        &mut self,
        name: &str,
        data: SymbolData,
        parent: SymbolId,
        file: Option<FileId>,
    ) -> SymbolId {
        let id = SymbolId::new(self.symbols.len());
        self.symbols.push(Symbol {
            name: self.names.intern(name),
            data,
            parent: Some(parent),
            order: 0,
            file,
            range: None,
        });
        self.children.push(Vec::new());
        self.children[parent.index()].push(id);
        id
    }

    // ============================================================
    // Finish
    // ============================================================

    /// Freeze the builder into an immutable tree.
    pub fn finish(self) -> TreeResult<DeclarationTree> {
        let TreeBuilder {
            names,
            mut symbols,
            mut children,
            files,
            packages,
            imports,
            root_package,
        } = self;

        // Declaration order: file processing order, then insertion order.
        let mut ranked: Vec<usize> = (0..symbols.len()).collect();
        ranked.sort_by_key(|&i| (symbols[i].file.map_or(0, FileId::index), i));
        for (order, &i) in ranked.iter().enumerate() {
            symbols[i].order = order as u32;
        }
        for list in &mut children {
            list.sort_by_key(|id| symbols[id.index()].order);
        }

        let symbol_count = symbols.len();
        let mut tree = DeclarationTree {
            names,
            symbols,
            children,
            decl_scopes: vec![DeclScopes::default(); symbol_count],
            scopes: Vec::new(),
            files: IndexMap::new(),
            packages,
            imports,
            root_package,
            default_imports: ScopeId::new(0),
            default_star_imports: ScopeId::new(0),
        };

        for index in 0..symbol_count {
            let scopes = declaration_scopes(&mut tree, SymbolId::new(index));
            tree.decl_scopes[index] = scopes;
        }
        for index in 0..symbol_count {
            let id = SymbolId::new(index);
            if tree.kind(id) == DeclarationKind::Classifier {
                let inherited = inherited_scope(&mut tree, id);
                tree.decl_scopes[index].inherited = inherited;
            }
        }

        let resolved: Vec<Vec<SymbolId>> = tree
            .imports
            .iter()
            .map(|directive| resolve_import(&tree, directive))
            .collect();
        for (directive, targets) in tree.imports.iter_mut().zip(resolved) {
            if targets.is_empty() {
                debug!("[TREE] import '{}' binds nothing", directive.display_path());
            }
            directive.resolved = targets;
        }

        let defaults: Vec<ImportId> = tree
            .imports
            .iter()
            .filter(|d| d.is_default())
            .map(|d| d.id)
            .collect();
        tree.default_imports = import_scope(&mut tree, &defaults, ScopeKind::DefaultImport);
        tree.default_star_imports = import_scope(&mut tree, &defaults, ScopeKind::DefaultStarImport);

        for (file, pending) in files {
            let explicit_imports = import_scope(&mut tree, &pending.imports, ScopeKind::ExplicitImport);
            let star_imports = import_scope(&mut tree, &pending.imports, ScopeKind::ExplicitStarImport);
            tree.files.insert(
                file,
                FileData {
                    path: pending.path,
                    package: pending.package,
                    imports: pending.imports,
                    explicit_imports,
                    star_imports,
                },
            );
        }

        trace!(
            "[TREE] finished: {} symbols, {} scopes, {} packages, {} files",
            tree.len(),
            tree.scope_count(),
            tree.packages().len(),
            tree.files.len()
        );
        Ok(tree)
    }
}

fn allowed_parent(child: DeclarationKind, parent: DeclarationKind) -> bool {
    use DeclarationKind::*;
    match child {
        Classifier | Function | Property => {
            matches!(parent, Classifier | Function | Constructor)
        }
        Parameter => matches!(parent, Function | Constructor),
        TypeParameter => matches!(parent, Classifier | Function | Property),
        Constructor => parent == Classifier,
        Package => false,
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && !s.contains(|c: char| c == '.' || c.is_whitespace())
}

fn alloc_scope(
    tree: &mut DeclarationTree,
    kind: ScopeKind,
    owner: SymbolId,
    members: impl IntoIterator<Item = SymbolId>,
) -> Option<ScopeId> {
    let mut scope = Scope::new(kind, Some(owner));
    for member in members {
        scope.insert(tree.symbol(member).name, member);
    }
    if scope.is_empty() {
        return None;
    }
    let id = ScopeId::new(tree.scopes.len());
    tree.scopes.push(scope);
    Some(id)
}

fn children_of_kind(
    tree: &DeclarationTree,
    owner: SymbolId,
    kinds: &[DeclarationKind],
) -> Vec<SymbolId> {
    tree.children(owner)
        .iter()
        .copied()
        .filter(|&child| kinds.contains(&tree.kind(child)))
        .collect()
}

fn declaration_scopes(tree: &mut DeclarationTree, id: SymbolId) -> DeclScopes {
    use DeclarationKind as K;
    let mut scopes = DeclScopes::default();
    match tree.kind(id) {
        K::Package => {
            let members = tree.package_members(id);
            scopes.members = alloc_scope(tree, ScopeKind::Package, id, members);
        }
        K::Classifier => {
            let type_params = children_of_kind(tree, id, &[K::TypeParameter]);
            scopes.type_parameters = alloc_scope(tree, ScopeKind::TypeParameter, id, type_params);

            let members = children_of_kind(tree, id, &[K::Function, K::Property]);
            scopes.members = alloc_scope(tree, ScopeKind::Type, id, members.clone());

            let statics = tree.static_members(id);
            scopes.statics = alloc_scope(tree, ScopeKind::StaticMember, id, statics);

            let properties = children_of_kind(tree, id, &[K::Property]);
            scopes.properties = alloc_scope(tree, ScopeKind::Local, id, properties);

            if let Some(ctor) = tree.symbol(id).primary_constructor() {
                let params = children_of_kind(tree, ctor, &[K::Parameter]);
                scopes.primary_parameters =
                    alloc_scope(tree, ScopeKind::Local, id, params.clone());
                scopes.constructor_parameters = alloc_scope(
                    tree,
                    ScopeKind::Local,
                    id,
                    params.iter().copied().chain([ctor]),
                );
                scopes.constructor = alloc_scope(tree, ScopeKind::Local, id, [ctor]);
                scopes.members_with_parameters = alloc_scope(
                    tree,
                    ScopeKind::Type,
                    id,
                    members.into_iter().chain(params),
                );
            }
        }
        K::Function | K::Constructor => {
            let type_params = children_of_kind(tree, id, &[K::TypeParameter]);
            scopes.type_parameters =
                alloc_scope(tree, ScopeKind::TypeParameter, id, type_params.clone());

            let params = children_of_kind(tree, id, &[K::Parameter]);
            let locals = children_of_kind(tree, id, &[K::Classifier, K::Function, K::Property]);
            scopes.locals = alloc_scope(
                tree,
                ScopeKind::Local,
                id,
                params.iter().copied().chain(locals),
            );
            scopes.parameters = alloc_scope(
                tree,
                ScopeKind::Local,
                id,
                params.into_iter().chain(type_params),
            );
        }
        K::Property => {
            let type_params = children_of_kind(tree, id, &[K::TypeParameter]);
            scopes.type_parameters = alloc_scope(tree, ScopeKind::TypeParameter, id, type_params);
        }
        K::Parameter | K::TypeParameter => {}
    }
    scopes
}

/// Members of all supertypes, breadth-first in declaration order.
fn inherited_scope(tree: &mut DeclarationTree, class: SymbolId) -> Option<ScopeId> {
    let mut visited = FxHashSet::default();
    visited.insert(class);
    let mut queue: Vec<SymbolId> = tree.symbol(class).supertypes().to_vec();
    let mut members = Vec::new();
    let mut next = 0;
    while next < queue.len() {
        let supertype = queue[next];
        next += 1;
        if !visited.insert(supertype) {
            continue;
        }
        members.extend(children_of_kind(
            tree,
            supertype,
            &[DeclarationKind::Function, DeclarationKind::Property],
        ));
        queue.extend_from_slice(tree.symbol(supertype).supertypes());
    }
    alloc_scope(tree, ScopeKind::Type, class, members)
}

/// Scope binding the targets of the given directives that match `kind`.
///
/// Always allocated, even when empty, so files and defaults can refer to it.
fn import_scope(tree: &mut DeclarationTree, directives: &[ImportId], kind: ScopeKind) -> ScopeId {
    let want_star = matches!(
        kind,
        ScopeKind::ExplicitStarImport | ScopeKind::DefaultStarImport
    );
    let mut scope = Scope::new(kind, None);
    for &id in directives {
        let directive = tree.import(id);
        if directive.is_star != want_star {
            continue;
        }
        let alias = directive.alias.as_deref().and_then(|a| tree.find_name(a));
        for &target in &directive.resolved {
            let name = alias.unwrap_or(tree.symbol(target).name);
            scope.insert(name, target);
        }
    }
    let id = ScopeId::new(tree.scopes.len());
    tree.scopes.push(scope);
    id
}

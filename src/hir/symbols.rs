//! Declarations stored in the declaration tree.

use smol_str::SmolStr;

use super::ids::SymbolId;
use crate::base::{FileId, Name, TextRange};

/// The syntactic category of a declaration.
///
/// Used to break ties when several symbols in one scope share a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Classifier,
    Package,
    Function,
    Property,
    Parameter,
    TypeParameter,
    Constructor,
}

impl DeclarationKind {
    /// Rank inside a single scope, lower wins.
    ///
    /// Classifier > Constructor > Function > Property > Parameter >
    /// TypeParameter. Packages never live in scopes and rank last.
    pub const fn priority(self) -> u8 {
        match self {
            DeclarationKind::Classifier => 0,
            DeclarationKind::Constructor => 1,
            DeclarationKind::Function => 2,
            DeclarationKind::Property => 3,
            DeclarationKind::Parameter => 4,
            DeclarationKind::TypeParameter => 5,
            DeclarationKind::Package => 6,
        }
    }

    /// Functions and constructors are overload-resolvable in ordinary code,
    /// so binding one as a qualifier never blocks a qualified path.
    pub const fn is_callable(self) -> bool {
        matches!(
            self,
            DeclarationKind::Function | DeclarationKind::Constructor
        )
    }

    /// Kinds that own a member scope of their own.
    pub const fn is_container(self) -> bool {
        !matches!(
            self,
            DeclarationKind::Parameter | DeclarationKind::TypeParameter
        )
    }
}

/// Flavour of a classifier declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Object,
    CompanionObject,
    EnumClass,
    AnnotationClass,
}

/// Kind-specific payload of a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolData {
    Classifier {
        class_kind: ClassKind,
        /// Direct supertypes, in declaration order.
        supertypes: Vec<SymbolId>,
        primary_constructor: Option<SymbolId>,
    },
    Package {
        /// Dotted fully-qualified name, empty for the root package.
        fq_name: SmolStr,
    },
    Function {
        /// Extension receiver classifier, if this is an extension.
        receiver: Option<SymbolId>,
    },
    Property {
        receiver: Option<SymbolId>,
        /// Declared as `val`/`var` in a primary constructor.
        in_primary_constructor: bool,
    },
    Parameter,
    TypeParameter,
    Constructor {
        is_primary: bool,
    },
}

impl SymbolData {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            SymbolData::Classifier { .. } => DeclarationKind::Classifier,
            SymbolData::Package { .. } => DeclarationKind::Package,
            SymbolData::Function { .. } => DeclarationKind::Function,
            SymbolData::Property { .. } => DeclarationKind::Property,
            SymbolData::Parameter => DeclarationKind::Parameter,
            SymbolData::TypeParameter => DeclarationKind::TypeParameter,
            SymbolData::Constructor { .. } => DeclarationKind::Constructor,
        }
    }
}

/// A declaration in the tree.
///
/// Symbols are immutable once the tree is finished; resolution only reads
/// and orders them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: Name,
    pub data: SymbolData,
    /// The containing declaration (package for top-level declarations).
    pub parent: Option<SymbolId>,
    /// Global declaration order: file processing order, then source order.
    pub order: u32,
    pub file: Option<FileId>,
    pub range: Option<TextRange>,
}

impl Symbol {
    #[inline]
    pub fn kind(&self) -> DeclarationKind {
        self.data.kind()
    }

    /// The extension receiver of a function or property.
    pub fn receiver(&self) -> Option<SymbolId> {
        match self.data {
            SymbolData::Function { receiver } | SymbolData::Property { receiver, .. } => receiver,
            _ => None,
        }
    }

    pub fn class_kind(&self) -> Option<ClassKind> {
        match self.data {
            SymbolData::Classifier { class_kind, .. } => Some(class_kind),
            _ => None,
        }
    }

    pub fn is_companion(&self) -> bool {
        self.class_kind() == Some(ClassKind::CompanionObject)
    }

    pub fn supertypes(&self) -> &[SymbolId] {
        match &self.data {
            SymbolData::Classifier { supertypes, .. } => supertypes,
            _ => &[],
        }
    }

    pub fn primary_constructor(&self) -> Option<SymbolId> {
        match self.data {
            SymbolData::Classifier {
                primary_constructor,
                ..
            } => primary_constructor,
            _ => None,
        }
    }

    pub fn is_primary_constructor(&self) -> bool {
        matches!(self.data, SymbolData::Constructor { is_primary: true })
    }

    /// Dotted package name, only for packages.
    pub fn package_fq_name(&self) -> Option<&str> {
        match &self.data {
            SymbolData::Package { fq_name } => Some(fq_name),
            _ => None,
        }
    }
}

//! Anchors: the declaration that owns a documentation comment.

use crate::hir::SymbolId;

/// Documentation sub-section a reference appears in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagSection {
    /// The main documentation text.
    #[default]
    None,
    /// `@constructor`
    Constructor,
    /// `@param`
    Param,
    /// `@property`
    Property,
}

impl TagSection {
    /// Parse a block tag name, with or without the leading `@`.
    ///
    /// Unknown tags (`@return`, `@see`, ...) behave like the main text.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim_start_matches('@') {
            "constructor" => TagSection::Constructor,
            "param" => TagSection::Param,
            "property" => TagSection::Property,
            _ => TagSection::None,
        }
    }
}

/// The declaration owning a documentation comment plus the active tag section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub declaration: SymbolId,
    pub section: TagSection,
}

impl Anchor {
    pub fn new(declaration: SymbolId) -> Self {
        Self {
            declaration,
            section: TagSection::None,
        }
    }

    pub fn with_section(mut self, section: TagSection) -> Self {
        self.section = section;
        self
    }
}

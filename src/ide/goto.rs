//! Go-to-declaration for documentation links.

use smol_str::SmolStr;

use crate::base::{FileId, TextRange};
use crate::hir::{DeclarationKind, DeclarationTree, SymbolId};
use crate::resolve::ResolutionResult;

/// A target location for go-to-declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    pub symbol: SymbolId,
    /// The file containing the target. Packages have none.
    pub file: Option<FileId>,
    pub range: Option<TextRange>,
    pub kind: DeclarationKind,
    /// The symbol name.
    pub name: SmolStr,
    pub qualified_name: String,
}

impl GotoTarget {
    pub fn from_symbol(tree: &DeclarationTree, symbol: SymbolId) -> Self {
        let data = tree.symbol(symbol);
        Self {
            symbol,
            file: data.file,
            range: data.range,
            kind: data.kind(),
            name: tree.symbol_name(symbol),
            qualified_name: tree.qualified_name(symbol),
        }
    }
}

/// Navigation only ever follows the prioritized answer.
pub fn goto_declaration(tree: &DeclarationTree, result: &ResolutionResult) -> Option<GotoTarget> {
    result
        .first()
        .map(|symbol| GotoTarget::from_symbol(tree, symbol))
}

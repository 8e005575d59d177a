//! Import usage for optimizers.
//!
//! Documentation links keep imports alive: every declaration a link could
//! bind to marks the imports that bind it as used.

use crate::base::FileId;
use crate::hir::{DeclarationTree, ImportId};
use crate::resolve::ResolutionResult;

/// Explicit imports of `file` that bind a symbol of any of `results`.
///
/// Returned in source order.
pub fn used_imports<'r>(
    tree: &DeclarationTree,
    file: FileId,
    results: impl IntoIterator<Item = &'r ResolutionResult>,
) -> Vec<ImportId> {
    let results: Vec<&ResolutionResult> = results.into_iter().collect();
    tree.file_imports(file)
        .filter(|directive| {
            results
                .iter()
                .any(|result| result.iter().any(|symbol| directive.binds(symbol)))
        })
        .map(|directive| directive.id)
        .collect()
}

/// Explicit imports of `file` no link in `results` needs.
pub fn unused_imports<'r>(
    tree: &DeclarationTree,
    file: FileId,
    results: impl IntoIterator<Item = &'r ResolutionResult>,
) -> Vec<ImportId> {
    let used = used_imports(tree, file, results);
    tree.file_imports(file)
        .map(|directive| directive.id)
        .filter(|id| !used.contains(id))
        .collect()
}

//! Link text for documentation renderers.

use crate::hir::DeclarationTree;
use crate::resolve::{Reference, ResolutionResult};

/// A rendered documentation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLink {
    /// Text to display.
    pub text: String,
    /// Fully-qualified target, `None` when unresolved.
    pub target: Option<String>,
}

/// Plain text for a link: the reference as written, pointing at the first
/// symbol. Overloads are never shown.
pub fn render_link(tree: &DeclarationTree, reference: &Reference, result: &ResolutionResult) -> RenderedLink {
    RenderedLink {
        text: reference.full_name(),
        target: result.first().map(|symbol| tree.qualified_name(symbol)),
    }
}

/// Fully-qualified name of the answer, or the raw reference when unresolved.
pub fn link_text(tree: &DeclarationTree, reference: &Reference, result: &ResolutionResult) -> String {
    render_link(tree, reference, result)
        .target
        .unwrap_or_else(|| reference.full_name())
}

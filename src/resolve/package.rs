//! Package fallback.

use tracing::trace;

use super::result::{ResolutionOrigin, ResolutionResult};
use crate::hir::PackageTable;

/// Resolve `full_name` as an exact fully-qualified package name.
///
/// `io` never matches `foo.io`.
pub fn resolve_package(full_name: &str, packages: &PackageTable) -> ResolutionResult {
    match packages.exact(full_name) {
        Some(package) => {
            trace!("[KDOC] '{}' -> package {:?}", full_name, package);
            ResolutionResult::new(vec![package], ResolutionOrigin::Package)
        }
        None => ResolutionResult::unresolved(),
    }
}

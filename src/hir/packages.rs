//! Package table: exact and longest-prefix package lookup.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::ids::SymbolId;

/// All packages of a declaration tree, keyed by dotted fully-qualified name.
///
/// The root package (empty name) is never matched by lookups.
#[derive(Clone, Debug, Default)]
pub struct PackageTable {
    by_fq_name: IndexMap<SmolStr, SymbolId>,
}

impl PackageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, fq_name: SmolStr, package: SymbolId) {
        self.by_fq_name.insert(fq_name, package);
    }

    /// The package whose fully-qualified name is exactly `fq_name`.
    ///
    /// `bar` does not match `foo.bar`.
    pub fn exact(&self, fq_name: &str) -> Option<SymbolId> {
        if fq_name.is_empty() {
            return None;
        }
        self.by_fq_name.get(fq_name).copied()
    }

    /// The package for a path given as segments.
    pub fn exact_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<SymbolId> {
        self.exact(&join(segments))
    }

    /// Longest package name that is a strict prefix of `segments`.
    ///
    /// Returns the package and the number of segments it consumed, which
    /// is always at least one and less than `segments.len()`.
    pub fn longest_prefix<S: AsRef<str>>(&self, segments: &[S]) -> Option<(SymbolId, usize)> {
        (1..segments.len())
            .rev()
            .find_map(|len| self.exact(&join(&segments[..len])).map(|pkg| (pkg, len)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SymbolId)> {
        self.by_fq_name
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.by_fq_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fq_name.is_empty()
    }
}

fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(segment.as_ref());
    }
    out
}

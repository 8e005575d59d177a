//! Documentation references as name paths.

use std::fmt;

use smol_str::SmolStr;

use super::error::ReferenceError;

/// A name path written in a documentation link, e.g. `[com.example.Foo.bar]`.
///
/// Markup is already stripped; a reference is just its segments. The
/// literal `this` is flagged so it can resolve to the anchor's receiver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    segments: Vec<SmolStr>,
    is_this: bool,
}

impl Reference {
    /// Single-segment reference.
    ///
    /// `name` must be one identifier. Use [`Reference::from_dotted`] for
    /// paths.
    pub fn short(name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        debug_assert!(
            !name.contains('.'),
            "short reference '{name}' contains a path separator"
        );
        let is_this = name.as_str() == "this";
        Self {
            segments: vec![name],
            is_this,
        }
    }

    pub fn this() -> Self {
        Self::short("this")
    }

    pub fn from_segments<I, S>(segments: I) -> Result<Self, ReferenceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let segments: Vec<SmolStr> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(ReferenceError::Empty);
        }
        if let Some(index) = segments.iter().position(|s| s.is_empty()) {
            return Err(ReferenceError::empty_segment(segments.join("."), index));
        }
        let is_this = segments.len() == 1 && segments[0].as_str() == "this";
        Ok(Self { segments, is_this })
    }

    /// Split an already-extracted dotted path such as `a.b.C`.
    pub fn from_dotted(path: &str) -> Result<Self, ReferenceError> {
        if path.is_empty() {
            return Err(ReferenceError::Empty);
        }
        Self::from_segments(path.split('.'))
    }

    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    pub fn is_this(&self) -> bool {
        self.is_this
    }

    pub fn is_multi_segment(&self) -> bool {
        self.segments.len() > 1
    }

    /// The final segment, the name a short lookup binds.
    ///
    /// # Panics
    /// Panics on a reference without segments, which only a caller bypassing
    /// the constructors can produce.
    pub fn last(&self) -> &str {
        match self.segments.last() {
            Some(last) => last.as_str(),
            None => panic!("documentation reference has no segments"),
        }
    }

    /// All segments joined with `.`.
    pub fn full_name(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl std::str::FromStr for Reference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dotted(s)
    }
}

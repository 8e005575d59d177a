//! Resolver configuration.

/// Where primary-constructor parameters are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConstructorParameterScope {
    /// Only in the constructor itself and its tag sections.
    #[default]
    OwnBodyOnly,
    /// Also from every declaration nested inside the class.
    NestedDeclarations,
}

/// Options controlling how scope chains are assembled.
///
/// ```
/// use kdoc::resolve::{ConstructorParameterScope, ResolverConfig};
///
/// let config = ResolverConfig::new()
///     .with_constructor_parameters(ConstructorParameterScope::NestedDeclarations)
///     .with_inherited_members(false);
/// assert!(!config.inherited_members);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolverConfig {
    pub constructor_parameters: ConstructorParameterScope,
    /// Walk supertype members after a classifier's own members.
    pub inherited_members: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            constructor_parameters: ConstructorParameterScope::default(),
            inherited_members: true,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constructor_parameters(mut self, policy: ConstructorParameterScope) -> Self {
        self.constructor_parameters = policy;
        self
    }

    pub fn with_inherited_members(mut self, enabled: bool) -> Self {
        self.inherited_members = enabled;
        self
    }
}

//! Resolution pipeline tests
//!
//! - The documented scenarios end to end
//! - Tag-section matrix
//! - Self-links, short names, qualified paths, package fallback
//! - Configuration policies

pub mod tests_multi_segment;
pub mod tests_package_fallback;
pub mod tests_scope_chain;
pub mod tests_short_name;
pub mod tests_tag_sections;

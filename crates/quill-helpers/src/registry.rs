//! Read-only view of the host's content-type, taxonomy, and term registries.
//!
//! The host runtime owns these registries; the helper library only consumes
//! them. [`ContentRegistry`] is the injected seam, so the enumerators in
//! [`crate::enumerate`] stay unit-testable against fakes.

use crate::Result;

/// Identifier of a single taxonomy term in the host registry.
pub type TermId = u64;

/// Parent id carried by top-level terms.
pub const TOP_LEVEL: TermId = 0;

/// A named category of content items (e.g. article, page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Unique slug identifying the type.
    pub slug: String,
    /// Singular display name, when the host defines one.
    pub singular_name: Option<String>,
}

impl ContentType {
    /// Display label: `"Singular (slug)"` when a singular name exists,
    /// otherwise the bare slug.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self.singular_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => format!("{name} ({})", self.slug),
            None => self.slug.clone(),
        }
    }
}

/// A classification scheme attachable to one or more content types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    /// Unique slug identifying the taxonomy.
    pub slug: String,
    /// Plural display label.
    pub label: String,
    /// Singular display name, when the host defines one.
    pub singular_name: Option<String>,
}

impl Taxonomy {
    /// Display label: the singular name when present, else the plural label.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self.singular_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => self.label.clone(),
        }
    }
}

/// A single value within a taxonomy, optionally nested under a parent term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Unique term identifier.
    pub id: TermId,
    /// Display name.
    pub name: String,
    /// Parent term id; [`TOP_LEVEL`] for top-level terms.
    pub parent: TermId,
}

/// Read-only access to the host's content-type, taxonomy, and term
/// registries.
///
/// Listing content types and taxonomies is infallible (the registries are
/// in-memory on the host side); term queries may fail and the enumerators
/// treat a failure the same as an empty result.
pub trait ContentRegistry {
    /// Public content types, split by origin: `builtin` selects the host's
    /// built-in types, `!builtin` the custom ones.
    fn list_content_types(&self, builtin: bool) -> Vec<ContentType>;

    /// Taxonomies attached to the given content type.
    fn list_taxonomies(&self, content_type: &str) -> Vec<Taxonomy>;

    /// Terms of a taxonomy under the given parent, empty terms included.
    /// Pass [`TOP_LEVEL`] for top-level terms.
    fn list_terms(&self, taxonomy: &str, parent: TermId) -> Result<Vec<Term>>;

    /// Direct children of a term.
    fn list_child_terms(&self, term: TermId, taxonomy: &str) -> Result<Vec<Term>>;
}

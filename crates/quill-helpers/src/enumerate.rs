//! Labeled enumerations over the host registries.
//!
//! These walks build the option maps the host surfaces in its settings UI:
//! content types keyed by slug, taxonomy terms keyed by term id. Maps are
//! insertion-ordered so the UI lists entries in registry order; on a key
//! collision the later entry wins while keeping the earlier position.

use indexmap::IndexMap;
use tracing::debug;

use crate::registry::{ContentRegistry, TOP_LEVEL, Term, TermId};

/// All public content types, keyed by slug, with display labels.
///
/// Built-in types are listed first, then custom types; a custom type sharing
/// a slug with a built-in one overwrites the built-in label.
pub fn all_content_types<R: ContentRegistry + ?Sized>(registry: &R) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    let builtin = registry.list_content_types(true);
    let custom = registry.list_content_types(false);

    for ct in builtin.into_iter().chain(custom) {
        let label = ct.display_label();
        out.insert(ct.slug, label);
    }

    out
}

/// All taxonomy terms reachable through any public content type, keyed by
/// term id, with composite display labels.
///
/// For every content type, every attached taxonomy is walked: top-level
/// terms are labeled `"{term} ({content type} · {taxonomy})"`, and each
/// top-level term's direct children `"{parent} → {child} ({content type} ·
/// {taxonomy})"`. A taxonomy whose term lookup fails or comes back empty is
/// skipped. A term reachable through two content types keeps its
/// last-written label.
pub fn all_taxonomy_terms<R: ContentRegistry + ?Sized>(registry: &R) -> IndexMap<TermId, String> {
    let mut out = IndexMap::new();

    for (slug, ct_label) in all_content_types(registry) {
        for taxonomy in registry.list_taxonomies(&slug) {
            let tax_label = taxonomy.display_label();

            let Some(terms) = top_level_terms(registry, &taxonomy.slug) else {
                continue;
            };

            for term in &terms {
                out.insert(term.id, format!("{} ({ct_label} · {tax_label})", term.name));
            }

            // Child terms are not part of the top-level listing; fetch them
            // per parent term.
            for term in &terms {
                for child in child_terms(registry, term, &taxonomy.slug) {
                    out.insert(
                        child.id,
                        format!("{} → {} ({ct_label} · {tax_label})", term.name, child.name),
                    );
                }
            }
        }
    }

    out
}

/// Ids of every term reachable through one content type's taxonomies.
///
/// Same traversal as [`all_taxonomy_terms`] restricted to a single content
/// type: per taxonomy, top-level term ids first, then child ids. The list is
/// append-only; a term attached to several taxonomies appears once per
/// taxonomy.
pub fn all_term_ids<R: ContentRegistry + ?Sized>(registry: &R, content_type: &str) -> Vec<TermId> {
    let mut out = Vec::new();

    for taxonomy in registry.list_taxonomies(content_type) {
        let Some(terms) = top_level_terms(registry, &taxonomy.slug) else {
            continue;
        };

        out.extend(terms.iter().map(|term| term.id));

        for term in &terms {
            out.extend(
                child_terms(registry, term, &taxonomy.slug)
                    .iter()
                    .map(|child| child.id),
            );
        }
    }

    out
}

/// Top-level terms of a taxonomy, or `None` when the lookup fails or the
/// taxonomy is empty (both mean "skip this taxonomy").
fn top_level_terms<R: ContentRegistry + ?Sized>(registry: &R, taxonomy: &str) -> Option<Vec<Term>> {
    match registry.list_terms(taxonomy, TOP_LEVEL) {
        Ok(terms) if terms.is_empty() => {
            debug!(taxonomy, "taxonomy has no top-level terms, skipping");
            None
        },
        Ok(terms) => Some(terms),
        Err(err) => {
            debug!(taxonomy, error = %err, "term lookup failed, skipping taxonomy");
            None
        },
    }
}

/// Direct children of a term; a failed lookup degrades to no children.
fn child_terms<R: ContentRegistry + ?Sized>(registry: &R, parent: &Term, taxonomy: &str) -> Vec<Term> {
    match registry.list_child_terms(parent.id, taxonomy) {
        Ok(children) => children,
        Err(err) => {
            debug!(taxonomy, parent = parent.id, error = %err, "child term lookup failed");
            Vec::new()
        },
    }
}

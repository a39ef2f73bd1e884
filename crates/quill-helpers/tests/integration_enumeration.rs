//! End-to-end enumeration over a host-shaped fake registry: several content
//! types sharing taxonomies, child terms, and a taxonomy whose lookups fail.

use std::collections::HashMap;

use quill_helpers::registry::TOP_LEVEL;
use quill_helpers::{
    ContentRegistry, ContentType, Error, Result, Taxonomy, Term, TermId, all_content_types,
    all_taxonomy_terms, all_term_ids,
};

struct HostRegistry {
    builtin: Vec<ContentType>,
    custom: Vec<ContentType>,
    taxonomies: HashMap<String, Vec<Taxonomy>>,
    terms: HashMap<String, Vec<Term>>,
    failing: Vec<String>,
}

impl HostRegistry {
    /// A host with built-in articles and pages, a custom recipe type, a
    /// category tree shared by articles and recipes, flat tags on articles,
    /// and a broken taxonomy on pages.
    fn sample() -> Self {
        let content_type = |slug: &str, singular: &str| ContentType {
            slug: slug.to_string(),
            singular_name: Some(singular.to_string()),
        };
        let taxonomy = |slug: &str, label: &str, singular: Option<&str>| Taxonomy {
            slug: slug.to_string(),
            label: label.to_string(),
            singular_name: singular.map(str::to_string),
        };
        let term = |id: TermId, name: &str, parent: TermId| Term {
            id,
            name: name.to_string(),
            parent,
        };

        let mut taxonomies = HashMap::new();
        taxonomies.insert(
            "article".to_string(),
            vec![
                taxonomy("category", "Categories", Some("Category")),
                taxonomy("post_tag", "Tags", None),
            ],
        );
        taxonomies.insert(
            "recipe".to_string(),
            vec![taxonomy("category", "Categories", Some("Category"))],
        );
        taxonomies.insert(
            "page".to_string(),
            vec![taxonomy("audience", "Audiences", None)],
        );

        let mut terms = HashMap::new();
        terms.insert(
            "category".to_string(),
            vec![
                term(1, "News", TOP_LEVEL),
                term(2, "Culture", TOP_LEVEL),
                term(3, "Music", 2),
                term(4, "Film", 2),
            ],
        );
        terms.insert("post_tag".to_string(), vec![term(20, "Featured", TOP_LEVEL)]);

        Self {
            builtin: vec![
                content_type("article", "Article"),
                content_type("page", "Page"),
            ],
            custom: vec![content_type("recipe", "Recipe")],
            taxonomies,
            terms,
            failing: vec!["audience".to_string()],
        }
    }
}

impl ContentRegistry for HostRegistry {
    fn list_content_types(&self, builtin: bool) -> Vec<ContentType> {
        if builtin {
            self.builtin.clone()
        } else {
            self.custom.clone()
        }
    }

    fn list_taxonomies(&self, content_type: &str) -> Vec<Taxonomy> {
        self.taxonomies.get(content_type).cloned().unwrap_or_default()
    }

    fn list_terms(&self, taxonomy: &str, parent: TermId) -> Result<Vec<Term>> {
        if self.failing.iter().any(|t| t == taxonomy) {
            return Err(Error::Registry(format!("{taxonomy} is unavailable")));
        }
        Ok(self
            .terms
            .get(taxonomy)
            .map(|terms| {
                terms
                    .iter()
                    .filter(|t| t.parent == parent)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn list_child_terms(&self, term: TermId, taxonomy: &str) -> Result<Vec<Term>> {
        self.list_terms(taxonomy, term)
    }
}

#[test]
fn test_content_type_map_lists_builtin_before_custom() {
    let registry = HostRegistry::sample();
    let types = all_content_types(&registry);

    assert_eq!(
        types.iter().collect::<Vec<_>>(),
        vec![
            (&"article".to_string(), &"Article (article)".to_string()),
            (&"page".to_string(), &"Page (page)".to_string()),
            (&"recipe".to_string(), &"Recipe (recipe)".to_string()),
        ]
    );
}

#[test]
fn test_term_map_covers_children_and_survives_broken_taxonomy() {
    let registry = HostRegistry::sample();
    let terms = all_taxonomy_terms(&registry);

    // Category terms are revisited through recipes, so the surviving labels
    // carry the recipe content type; tags only exist on articles. The broken
    // audience taxonomy contributes nothing.
    assert_eq!(terms.len(), 5);
    assert_eq!(terms[&1], "News (Recipe (recipe) · Category)");
    assert_eq!(terms[&3], "Culture → Music (Recipe (recipe) · Category)");
    assert_eq!(terms[&4], "Culture → Film (Recipe (recipe) · Category)");
    assert_eq!(terms[&20], "Featured (Article (article) · Tags)");
}

#[test]
fn test_term_map_keys_are_unique_by_construction() {
    let registry = HostRegistry::sample();
    let terms = all_taxonomy_terms(&registry);

    let mut ids: Vec<TermId> = terms.keys().copied().collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), terms.len());
}

#[test]
fn test_term_ids_walk_single_content_type() {
    let registry = HostRegistry::sample();

    // Articles: categories (top-level then children), then tags.
    assert_eq!(all_term_ids(&registry, "article"), vec![1, 2, 3, 4, 20]);
    // Recipes share the category tree only.
    assert_eq!(all_term_ids(&registry, "recipe"), vec![1, 2, 3, 4]);
    // Pages only carry the broken taxonomy.
    assert!(all_term_ids(&registry, "page").is_empty());
}

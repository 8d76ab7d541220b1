//! Read-side aggregate derivations over an already-fetched idea set.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::idea::Idea;

/// Counts derived from a slice of ideas. Correctness is bounded by the
/// slice the caller supplies: page-level slices give page-level stats,
/// full-corpus stats require an unfiltered fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub ideas: usize,
    pub creators: usize,
    pub business_types: usize,
    pub categories: usize,
    pub total_clicks: i64,
}

impl CatalogStats {
    pub fn from_ideas(ideas: &[Idea]) -> Self {
        let creators: HashSet<&str> = ideas.iter().map(|i| i.source_name.as_str()).collect();
        let business_types: HashSet<&str> =
            ideas.iter().map(|i| i.business_type.as_str()).collect();
        let categories: HashSet<&str> = ideas.iter().map(|i| i.category.as_str()).collect();
        let total_clicks = ideas.iter().map(|i| i64::from(i.clicks.get())).sum();

        Self {
            ideas: ideas.len(),
            creators: creators.len(),
            business_types: business_types.len(),
            categories: categories.len(),
            total_clicks,
        }
    }
}

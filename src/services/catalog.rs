//! Core business logic for the filtered, sorted, paginated listing.

use chrono::NaiveDate;

use crate::domain::idea::Idea;
use crate::domain::stats::CatalogStats;
use crate::dto::listing::ListingState;
use crate::pagination::Paginated;
use crate::repository::{IdeaListQuery, IdeaReader};

/// Runs the listing query described by `state` and wraps the result page.
///
/// A store failure degrades to an empty page with zero total rather than
/// propagating: callers render "no matches" and the condition is logged for
/// operational visibility.
pub fn show_listing<R>(
    state: &ListingState,
    today: NaiveDate,
    per_page: usize,
    repo: &R,
) -> Paginated<Idea>
where
    R: IdeaReader,
{
    match repo.list_ideas(state.to_list_query(today, per_page)) {
        Ok((total, ideas)) => Paginated::new(ideas, state.page, per_page, total),
        Err(e) => {
            log::error!("Failed to list ideas: {e}");
            Paginated::empty(state.page)
        }
    }
}

/// Full-corpus stats from a separate, unfiltered fetch. Degrades to zeroed
/// stats when the store is unavailable.
pub fn full_catalog_stats<R>(repo: &R) -> CatalogStats
where
    R: IdeaReader,
{
    match repo.list_ideas(IdeaListQuery::default()) {
        Ok((_total, ideas)) => CatalogStats::from_ideas(&ideas),
        Err(e) => {
            log::error!("Failed to compute catalog stats: {e}");
            CatalogStats::default()
        }
    }
}

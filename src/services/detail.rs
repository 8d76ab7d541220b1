//! Detail-page resolution, click counting and related-idea selection.

use crate::domain::idea::Idea;
use crate::domain::related::rank_related;
use crate::domain::slug::{
    business_type_from_slug, category_from_slug, idea_path, parse_idea_id,
};
use crate::repository::{IdeaReader, IdeaWriter};

use super::{ServiceError, ServiceResult};

/// Related ideas shown on a detail page.
pub const RELATED_LIMIT: usize = 3;
/// Over-fetch factor: extra clicks-ordered candidates pulled so the tag
/// re-ranking has material to work with, without a full-table scan.
const RELATED_OVERFETCH: usize = 3;

/// Everything a detail page needs.
#[derive(Debug, Clone)]
pub struct IdeaPage {
    pub idea: Idea,
    /// Empty when no candidate shares a category or type; the caller hides
    /// the related section entirely in that case.
    pub related: Vec<Idea>,
    pub canonical_path: String,
}

/// Resolves a three-segment idea path and assembles the detail page.
///
/// The path is the source of truth: the trailing id segment must parse, the
/// loaded idea must exist, and its category and business type must re-slug
/// to the path segments exactly. Any mismatch is NotFound, not a redirect.
/// The click increment is best-effort and never blocks rendering.
pub fn show_idea<R>(
    category_slug: &str,
    type_slug: &str,
    idea_slug: &str,
    repo: &R,
) -> ServiceResult<IdeaPage>
where
    R: IdeaReader + IdeaWriter,
{
    let category = category_from_slug(category_slug).ok_or(ServiceError::NotFound)?;
    let business_type = business_type_from_slug(type_slug).ok_or(ServiceError::NotFound)?;
    let id = parse_idea_id(idea_slug).ok_or(ServiceError::NotFound)?;

    let idea = match repo.get_idea_by_id(id) {
        Ok(Some(idea)) => idea,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to load idea {id}: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if idea.category != category || idea.business_type != business_type {
        return Err(ServiceError::NotFound);
    }

    if let Err(e) = repo.increment_clicks(id) {
        log::warn!("Failed to increment clicks for idea {id}: {e}");
    }

    let candidates = match repo.list_related_candidates(&idea, RELATED_LIMIT * RELATED_OVERFETCH) {
        Ok(candidates) => candidates,
        Err(e) => {
            log::error!("Failed to fetch related candidates for idea {id}: {e}");
            Vec::new()
        }
    };
    let related = rank_related(&idea, candidates, RELATED_LIMIT);

    let canonical_path = idea_path(&idea);

    Ok(IdeaPage {
        idea,
        related,
        canonical_path,
    })
}

/// Computes the canonical path for a legacy `/idea/{id}` URL.
///
/// Returns `None` when the id segment is malformed or resolves to nothing;
/// the caller then redirects to the default listing view instead of erroring.
pub fn legacy_idea_path<R>(raw_id: &str, repo: &R) -> Option<String>
where
    R: IdeaReader,
{
    let id = parse_idea_id(raw_id)?;
    match repo.get_idea_by_id(id) {
        Ok(Some(idea)) => Some(idea_path(&idea)),
        Ok(None) => None,
        Err(e) => {
            log::error!("Failed to resolve legacy idea id {id}: {e}");
            None
        }
    }
}

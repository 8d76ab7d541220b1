//! URL slug codec and resolution primitives.
//!
//! `to_slug` is lossy: special characters and case are discarded, so a slug
//! cannot be decoded back into a name. Resolution therefore re-derives slugs
//! from canonical names and compares, it never parses the slug itself. The
//! one exception is the numeric id suffix of an idea slug, which is appended
//! after slugification and recoverable from the final hyphen segment.

use crate::domain::idea::Idea;
use crate::domain::types::{BusinessType, Category, IdeaId};

/// Converts a display string into a URL slug.
///
/// ASCII-lowercases, drops characters outside alphanumerics, underscore,
/// whitespace and hyphen, collapses whitespace/underscore/hyphen runs into
/// single hyphens and trims leading/trailing hyphens. Idempotent.
pub fn to_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch == '-' || ch == '_' || ch.is_whitespace() {
            pending_separator = true;
        }
        // Remaining characters are stripped without forcing a separator,
        // matching `[^\w\s-]` removal before run collapsing.
    }
    slug
}

/// Slug for an idea detail page: title slug plus the numeric id suffix.
pub fn idea_slug(title: &str, id: IdeaId) -> String {
    format!("{}-{}", to_slug(title), id)
}

/// The canonical three-segment path for an idea.
pub fn idea_path(idea: &Idea) -> String {
    format!(
        "/{}/{}/{}",
        to_slug(idea.category.as_str()),
        to_slug(idea.business_type.as_str()),
        idea_slug(idea.title.as_str(), idea.id)
    )
}

/// Recovers the candidate idea id from the final hyphen segment of an idea
/// slug. Returns `None` when the segment is not a positive integer; callers
/// treat that the same as an unknown id.
pub fn parse_idea_id(slug: &str) -> Option<IdeaId> {
    let tail = slug.rsplit('-').next()?;
    let id = tail.parse::<i32>().ok()?;
    IdeaId::new(id).ok()
}

/// Finds the first name whose slug equals `slug`.
///
/// When two distinct names normalize to the same slug the first match wins,
/// so callers should pass the list in a stable (sorted) order.
pub fn find_by_slug<'a, S: AsRef<str>>(slug: &str, names: &'a [S]) -> Option<&'a S> {
    names.iter().find(|name| to_slug(name.as_ref()) == slug)
}

/// Resolves a category slug against the closed enumeration.
pub fn category_from_slug(slug: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|c| to_slug(c.as_str()) == slug)
}

/// Resolves a business-type slug against the closed enumeration.
pub fn business_type_from_slug(slug: &str) -> Option<BusinessType> {
    BusinessType::ALL
        .into_iter()
        .find(|t| to_slug(t.as_str()) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_special_characters_and_collapses_runs() {
        assert_eq!(to_slug("Food & Drink"), "food-drink");
        assert_eq!(to_slug("  AI/ML   tools_2024 "), "aiml-tools-2024");
        assert_eq!(to_slug("--Already--Sluggy--"), "already-sluggy");
        assert_eq!(to_slug("Café au Lait"), "caf-au-lait");
    }

    #[test]
    fn is_idempotent() {
        for input in ["Recipe Sharing App", "Food & Drink", "a_b-c d", "***", ""] {
            let once = to_slug(input);
            assert_eq!(to_slug(&once), once);
        }
    }

    #[test]
    fn idea_slug_appends_numeric_id() {
        let id = IdeaId::new(42).unwrap();
        assert_eq!(idea_slug("Recipe Sharing App", id), "recipe-sharing-app-42");
        assert_eq!(parse_idea_id("recipe-sharing-app-42"), Some(id));
    }

    #[test]
    fn parse_idea_id_rejects_non_numeric_tails() {
        assert_eq!(parse_idea_id("recipe-sharing-app"), None);
        assert_eq!(parse_idea_id(""), None);
        assert_eq!(parse_idea_id("idea-0"), None);
    }

    #[test]
    fn parse_idea_id_handles_digit_heavy_titles() {
        let id = IdeaId::new(42).unwrap();
        assert_eq!(parse_idea_id(&idea_slug("Top 10 Apps", id)), Some(id));
    }

    #[test]
    fn enum_slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(
                category_from_slug(&to_slug(category.as_str())),
                Some(category)
            );
        }
        for business_type in BusinessType::ALL {
            assert_eq!(
                business_type_from_slug(&to_slug(business_type.as_str())),
                Some(business_type)
            );
        }
        assert_eq!(category_from_slug("gardening"), None);
    }

    #[test]
    fn find_by_slug_takes_first_match_on_collisions() {
        let tags = ["AI ML", "ai_ml", "Cooking"];
        assert_eq!(find_by_slug("ai-ml", &tags), Some(&"AI ML"));
        assert_eq!(find_by_slug("cooking", &tags), Some(&"Cooking"));
        assert_eq!(find_by_slug("missing", &tags), None);
    }
}

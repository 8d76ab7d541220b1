//! Category, business-type, creator and tag browse pages.

use crate::domain::idea::Idea;
use crate::domain::slug::{business_type_from_slug, category_from_slug, find_by_slug};
use crate::domain::stats::CatalogStats;
use crate::domain::types::SortBy;
use crate::repository::{IdeaListQuery, IdeaReader};

use super::{ServiceError, ServiceResult};

/// Data for one browse page: the resolved display name, every matching idea
/// ordered by clicks descending, and stats over that fetched set.
#[derive(Debug, Clone)]
pub struct BrowsePage {
    pub name: String,
    pub ideas: Vec<Idea>,
    pub stats: CatalogStats,
}

fn build_page<R>(name: String, query: IdeaListQuery, repo: &R) -> BrowsePage
where
    R: IdeaReader,
{
    let ideas = match repo.list_ideas(query.sort(SortBy::MostClicked)) {
        Ok((_total, ideas)) => ideas,
        Err(e) => {
            log::error!("Failed to list ideas for browse page '{name}': {e}");
            Vec::new()
        }
    };
    let stats = CatalogStats::from_ideas(&ideas);
    BrowsePage { name, ideas, stats }
}

/// Resolves a category slug against the closed enumeration and loads its
/// ideas. Unknown slugs are NotFound, never a fallback category.
pub fn show_category<R>(slug: &str, repo: &R) -> ServiceResult<BrowsePage>
where
    R: IdeaReader,
{
    let category = category_from_slug(slug).ok_or(ServiceError::NotFound)?;
    Ok(build_page(
        category.as_str().to_string(),
        IdeaListQuery::default().category(category),
        repo,
    ))
}

/// Resolves a business-type slug against the closed enumeration.
pub fn show_business_type<R>(slug: &str, repo: &R) -> ServiceResult<BrowsePage>
where
    R: IdeaReader,
{
    let business_type = business_type_from_slug(slug).ok_or(ServiceError::NotFound)?;
    Ok(build_page(
        business_type.as_str().to_string(),
        IdeaListQuery::default().business_type(business_type),
        repo,
    ))
}

/// Resolves a creator slug against the distinct creator list. The list is
/// open-ended, so resolution re-slugs every name and takes the first match.
pub fn show_creator<R>(slug: &str, repo: &R) -> ServiceResult<BrowsePage>
where
    R: IdeaReader,
{
    let creators = match repo.list_creators() {
        Ok(creators) => creators,
        Err(e) => {
            log::error!("Failed to list creators: {e}");
            Vec::new()
        }
    };
    let creator = find_by_slug(slug, &creators)
        .cloned()
        .ok_or(ServiceError::NotFound)?;
    Ok(build_page(
        creator.as_str().to_string(),
        IdeaListQuery::default().creator(creator),
        repo,
    ))
}

/// Resolves a tag slug against the distinct tag list. Distinct tags arrive
/// sorted, so colliding slugs resolve to the lexicographically first tag.
pub fn show_tag<R>(slug: &str, repo: &R) -> ServiceResult<BrowsePage>
where
    R: IdeaReader,
{
    let tags = match repo.list_tags() {
        Ok(tags) => tags,
        Err(e) => {
            log::error!("Failed to list tags: {e}");
            Vec::new()
        }
    };
    let tag = find_by_slug(slug, &tags)
        .cloned()
        .ok_or(ServiceError::NotFound)?;
    Ok(build_page(
        tag.as_str().to_string(),
        IdeaListQuery::default().tag(tag),
        repo,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        BusinessType, Category, ClickCount, CreatorName, IdeaId, IdeaTitle, TagName,
    };
    use crate::repository::test::TestRepository;

    fn idea(id: i32, creator: &str, tags: &[&str], clicks: i32) -> Idea {
        Idea {
            id: IdeaId::new(id).unwrap(),
            title: IdeaTitle::new(format!("Idea {id}")).unwrap(),
            description: String::new(),
            problem: String::new(),
            solution: String::new(),
            category: Category::Technology,
            business_type: BusinessType::Saas,
            subcategories: tags.iter().map(|t| TagName::new(*t).unwrap()).collect(),
            source_name: CreatorName::new(creator).unwrap(),
            source_logo: None,
            source_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            source_link: None,
            schedule: None,
            clicks: ClickCount::new(clicks).unwrap(),
            created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn resolves_category_slugs() {
        let repo = TestRepository::new(vec![idea(1, "Alex", &[], 5)]);

        let page = show_category("technology", &repo).unwrap();
        assert_eq!(page.name, "Technology");
        assert_eq!(page.ideas.len(), 1);
        assert_eq!(page.stats.total_clicks, 5);

        assert!(matches!(
            show_category("gardening", &repo),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn resolves_creator_slugs_from_the_distinct_list() {
        let repo = TestRepository::new(vec![idea(1, "Jane Doe", &[], 1), idea(2, "Alex", &[], 2)]);

        let page = show_creator("jane-doe", &repo).unwrap();
        assert_eq!(page.name, "Jane Doe");
        assert_eq!(page.ideas.len(), 1);

        assert!(matches!(
            show_creator("nobody", &repo),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn resolves_tag_slugs_and_orders_by_clicks() {
        let repo = TestRepository::new(vec![
            idea(1, "Alex", &["ai"], 1),
            idea(2, "Alex", &["ai"], 9),
            idea(3, "Alex", &["fitness"], 5),
        ]);

        let page = show_tag("ai", &repo).unwrap();
        let ids: Vec<i32> = page.ideas.iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn unavailable_store_resolves_nothing() {
        let repo = TestRepository::failing();
        assert!(matches!(
            show_creator("anyone", &repo),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            show_tag("anything", &repo),
            Err(ServiceError::NotFound)
        ));
    }
}

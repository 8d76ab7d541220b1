use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::idea::{Idea as DomainIdea, Schedule};
use crate::domain::types::{
    BusinessType, Category, ClickCount, CreatorName, IdeaId, IdeaTitle, SourceUrl, TagName,
    TypeConstraintError,
};

/// Row representation of the `ideas` table. Tags are stored as a JSON array
/// in a single text column.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::ideas)]
pub struct Idea {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub problem: String,
    pub solution: String,
    pub category: String,
    pub business_type: String,
    pub subcategories: String,
    pub source_name: String,
    pub source_logo: Option<String>,
    pub source_date: NaiveDate,
    pub source_link: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub clicks: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn parse_tags(raw: &str) -> Result<Vec<TagName>, TypeConstraintError> {
    let tags: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("subcategories: {e}")))?;
    Ok(tags
        .into_iter()
        .filter(|tag| !tag.trim().is_empty())
        .map(TagName::new)
        .collect::<Result<Vec<_>, _>>()?)
}

impl TryFrom<Idea> for DomainIdea {
    type Error = TypeConstraintError;

    fn try_from(idea: Idea) -> Result<Self, Self::Error> {
        let schedule = match (idea.start_time, idea.end_time) {
            (Some(start), Some(end)) => Some(Schedule { start, end }),
            (None, None) => None,
            _ => {
                return Err(TypeConstraintError::InvalidValue(
                    "start_time and end_time must be paired".into(),
                ));
            }
        };

        Ok(Self {
            id: IdeaId::new(idea.id)?,
            title: IdeaTitle::new(idea.title)?,
            description: idea.description,
            problem: idea.problem,
            solution: idea.solution,
            category: Category::try_from(idea.category)?,
            business_type: BusinessType::try_from(idea.business_type)?,
            subcategories: parse_tags(&idea.subcategories)?,
            source_name: CreatorName::new(idea.source_name)?,
            source_logo: idea.source_logo.map(SourceUrl::new).transpose()?,
            source_date: idea.source_date,
            source_link: idea.source_link.map(SourceUrl::new).transpose()?,
            schedule,
            clicks: ClickCount::new(idea.clicks)?,
            created_at: idea.created_at,
            updated_at: idea.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Idea {
        Idea {
            id: 42,
            title: "Recipe Sharing App".into(),
            description: "Share recipes".into(),
            problem: "Recipes are scattered".into(),
            solution: "One place".into(),
            category: "Food & Drink".into(),
            business_type: "Mobile App".into(),
            subcategories: r#"["cooking","community"]"#.into(),
            source_name: "Alex".into(),
            source_logo: None,
            source_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            source_link: Some("https://example.com/post".into()),
            start_time: None,
            end_time: None,
            clicks: 3,
            created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn converts_rows_into_domain_ideas() {
        let idea = DomainIdea::try_from(sample_row()).unwrap();
        assert_eq!(idea.id, 42);
        assert_eq!(idea.category, Category::FoodAndDrink);
        assert_eq!(idea.business_type, BusinessType::MobileApp);
        assert_eq!(idea.subcategories.len(), 2);
        assert!(idea.schedule.is_none());
    }

    #[test]
    fn rejects_unknown_categories() {
        let mut row = sample_row();
        row.category = "Gardening".into();
        assert!(DomainIdea::try_from(row).is_err());
    }

    #[test]
    fn rejects_unpaired_schedule_endpoints() {
        let mut row = sample_row();
        row.start_time = Some("09:00".into());
        assert!(DomainIdea::try_from(row).is_err());

        let mut row = sample_row();
        row.start_time = Some("09:00".into());
        row.end_time = Some("17:00".into());
        let idea = DomainIdea::try_from(row).unwrap();
        assert_eq!(
            idea.schedule,
            Some(Schedule {
                start: "09:00".into(),
                end: "17:00".into()
            })
        );
    }

    #[test]
    fn skips_blank_tags_but_rejects_malformed_json() {
        let mut row = sample_row();
        row.subcategories = r#"["cooking",""]"#.into();
        assert_eq!(DomainIdea::try_from(row).unwrap().subcategories.len(), 1);

        let mut row = sample_row();
        row.subcategories = "not json".into();
        assert!(DomainIdea::try_from(row).is_err());
    }
}

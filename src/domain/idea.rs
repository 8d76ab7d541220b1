use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BusinessType, Category, ClickCount, CreatorName, IdeaId, IdeaTitle, SourceUrl, TagName,
};

/// Number of days after `source_date` during which an idea is badged as new.
pub const NEW_BADGE_DAYS: i64 = 15;

/// Optional scheduling window attached to an idea. The store keeps the two
/// endpoints as opaque strings; they are paired, both present or both absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub start: String,
    pub end: String,
}

/// A cataloged app-idea record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    pub title: IdeaTitle,
    pub description: String,
    pub problem: String,
    pub solution: String,
    pub category: Category,
    pub business_type: BusinessType,
    /// Open-vocabulary tags. Order carries no meaning.
    pub subcategories: Vec<TagName>,
    pub source_name: CreatorName,
    pub source_logo: Option<SourceUrl>,
    /// Authoritative date for newest/oldest ordering and the "new" badge.
    /// Distinct from the record-creation timestamp.
    pub source_date: NaiveDate,
    pub source_link: Option<SourceUrl>,
    pub schedule: Option<Schedule>,
    pub clicks: ClickCount,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Idea {
    /// Whether the idea falls inside the "new" badge window relative to
    /// `today`. Future-dated ideas count as new.
    pub fn is_new(&self, today: NaiveDate) -> bool {
        (today - self.source_date).num_days() <= NEW_BADGE_DAYS
    }

    /// Whether `tag` appears among the idea's subcategories.
    pub fn has_tag(&self, tag: &TagName) -> bool {
        self.subcategories.contains(tag)
    }
}

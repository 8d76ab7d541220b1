use std::collections::BTreeSet;

use diesel::prelude::*;

use crate::domain::idea::Idea;
use crate::domain::types::{CreatorName, IdeaId, SortBy, TagName};
use crate::models::idea::Idea as DbIdea;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, IdeaListQuery, IdeaReader, IdeaWriter};

fn into_domain(rows: Vec<DbIdea>) -> RepositoryResult<Vec<Idea>> {
    rows.into_iter()
        .map(|row| Idea::try_from(row).map_err(Into::into))
        .collect()
}

/// Pattern matching rows whose JSON tag column contains `tag`. Relies on
/// serde_json always quoting array elements.
fn tag_pattern(tag: &TagName) -> String {
    format!("%\"{}\"%", tag.as_str())
}

impl IdeaReader for DieselRepository {
    fn list_ideas(&self, query: IdeaListQuery) -> RepositoryResult<(usize, Vec<Idea>)> {
        use crate::schema::ideas;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = ideas::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                // SQLite LIKE is case-insensitive for ASCII, matching the
                // store-side ilike of the previous implementation.
                let pattern = format!("%{search}%");
                items = items.filter(
                    ideas::title
                        .like(pattern.clone())
                        .or(ideas::description.like(pattern.clone()))
                        .or(ideas::source_name.like(pattern)),
                );
            }

            if let Some(category) = query.category {
                items = items.filter(ideas::category.eq(category.as_str()));
            }

            if let Some(business_type) = query.business_type {
                items = items.filter(ideas::business_type.eq(business_type.as_str()));
            }

            if let Some(since) = query.since {
                items = items.filter(ideas::source_date.ge(since));
            }

            if let Some(creator) = &query.creator {
                items = items.filter(ideas::source_name.eq(creator.as_str()));
            }

            if let Some(tag) = &query.tag {
                items = items.filter(ideas::subcategories.like(tag_pattern(tag)));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();

        items = match query.sort_by {
            SortBy::NewestFirst => items.order((ideas::source_date.desc(), ideas::id.asc())),
            SortBy::OldestFirst => items.order((ideas::source_date.asc(), ideas::id.asc())),
            SortBy::MostClicked => items.order((ideas::clicks.desc(), ideas::id.asc())),
            SortBy::LeastClicked => items.order((ideas::clicks.asc(), ideas::id.asc())),
        };

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset() as i64)
                .limit(pagination.per_page as i64);
        }

        let rows = items.load::<DbIdea>(&mut conn)?;

        Ok((total, into_domain(rows)?))
    }

    fn get_idea_by_id(&self, id: IdeaId) -> RepositoryResult<Option<Idea>> {
        use crate::schema::ideas;

        let mut conn = self.conn()?;

        let row = ideas::table
            .find(id.get())
            .first::<DbIdea>(&mut conn)
            .optional()?;

        row.map(|row| Idea::try_from(row).map_err(Into::into))
            .transpose()
    }

    fn list_related_candidates(
        &self,
        reference: &Idea,
        limit: usize,
    ) -> RepositoryResult<Vec<Idea>> {
        use crate::schema::ideas;

        let mut conn = self.conn()?;

        let rows = ideas::table
            .filter(ideas::id.ne(reference.id.get()))
            .filter(
                ideas::category
                    .eq(reference.category.as_str())
                    .or(ideas::business_type.eq(reference.business_type.as_str())),
            )
            .order((ideas::clicks.desc(), ideas::id.asc()))
            .limit(limit as i64)
            .load::<DbIdea>(&mut conn)?;

        into_domain(rows)
    }

    fn list_creators(&self) -> RepositoryResult<Vec<CreatorName>> {
        use crate::schema::ideas;

        let mut conn = self.conn()?;

        let names: Vec<String> = ideas::table
            .select(ideas::source_name)
            .distinct()
            .order(ideas::source_name.asc())
            .load(&mut conn)?;

        names
            .into_iter()
            .map(|name| CreatorName::new(name).map_err(Into::into))
            .collect()
    }

    fn list_tags(&self) -> RepositoryResult<Vec<TagName>> {
        use crate::schema::ideas;

        let mut conn = self.conn()?;

        // Tags live inside a JSON column, so distinctness is computed here
        // rather than pushed to the store.
        let columns: Vec<String> = ideas::table.select(ideas::subcategories).load(&mut conn)?;

        let mut unique = BTreeSet::new();
        for column in columns {
            let tags: Vec<String> = serde_json::from_str(&column).map_err(|e| {
                crate::repository::errors::RepositoryError::Validation(format!(
                    "subcategories: {e}"
                ))
            })?;
            unique.extend(tags.into_iter().filter(|tag| !tag.trim().is_empty()));
        }

        unique
            .into_iter()
            .map(|tag| TagName::new(tag).map_err(Into::into))
            .collect()
    }
}

impl IdeaWriter for DieselRepository {
    fn increment_clicks(&self, id: IdeaId) -> RepositoryResult<usize> {
        use crate::schema::ideas;

        let mut conn = self.conn()?;

        // Single UPDATE so concurrent detail views never lose increments.
        let affected = diesel::update(ideas::table.find(id.get()))
            .set(ideas::clicks.eq(ideas::clicks + 1))
            .execute(&mut conn)?;

        Ok(affected)
    }
}

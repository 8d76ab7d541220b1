use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::idea::Idea;
use crate::domain::types::{BusinessType, Category, CreatorName, IdeaId, SortBy, TagName};
use crate::pagination::Pagination;

pub mod errors;
pub mod idea;

use errors::RepositoryResult;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing ideas.
///
/// `None` on a filter axis means the "All" sentinel: no filter applied.
/// Axes combine with AND semantics; only the search term matches multiple
/// fields with OR inside its own axis.
#[derive(Debug, Clone, Default)]
pub struct IdeaListQuery {
    /// Case-insensitive match against title, description or creator name.
    pub search: Option<String>,
    /// Exact category filter.
    pub category: Option<Category>,
    /// Exact business-type filter.
    pub business_type: Option<BusinessType>,
    /// Inclusive lower bound on `source_date`, at day granularity.
    pub since: Option<NaiveDate>,
    /// Exact creator filter.
    pub creator: Option<CreatorName>,
    /// Ideas carrying this tag.
    pub tag: Option<TagName>,
    /// Result ordering; ties break on id ascending.
    pub sort_by: SortBy,
    /// Pagination parameters applied after filter and sort.
    pub pagination: Option<Pagination>,
}

impl IdeaListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if !search.is_empty() {
            self.search = Some(search);
        }
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn business_type(mut self, business_type: BusinessType) -> Self {
        self.business_type = Some(business_type);
        self
    }

    pub fn since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    pub fn creator(mut self, creator: CreatorName) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn tag(mut self, tag: TagName) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

/// Read-only operations for idea entities.
pub trait IdeaReader {
    /// List ideas matching the supplied query, returning the total match
    /// count before pagination together with the requested page.
    fn list_ideas(&self, query: IdeaListQuery) -> RepositoryResult<(usize, Vec<Idea>)>;
    /// Retrieve an idea by its identifier.
    fn get_idea_by_id(&self, id: IdeaId) -> RepositoryResult<Option<Idea>>;
    /// Candidates for the related-ideas ranking: same category or business
    /// type as the reference, excluding the reference itself, ordered by
    /// clicks descending and capped at `limit`.
    fn list_related_candidates(&self, reference: &Idea, limit: usize)
    -> RepositoryResult<Vec<Idea>>;
    /// Distinct creator names, sorted.
    fn list_creators(&self) -> RepositoryResult<Vec<CreatorName>>;
    /// Distinct tags across all ideas, sorted.
    fn list_tags(&self) -> RepositoryResult<Vec<TagName>>;
}

/// Write operations for idea entities.
pub trait IdeaWriter {
    /// Atomically increment the click counter of an idea at the store level.
    /// Returns the number of affected rows (zero when the id is unknown).
    fn increment_clicks(&self, id: IdeaId) -> RepositoryResult<usize>;
}

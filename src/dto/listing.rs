//! Explicit listing state and its URL query-string mapping.
//!
//! The interactive filter/search/sort/page state is one immutable struct.
//! `ListingQueryParams` is the raw wire shape; `ListingState` is the parsed
//! form, and `to_query_string` maps it back, omitting defaults so canonical
//! URLs stay short. Both directions are pure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BusinessType, Category, DateFilter, SortBy};
use crate::repository::IdeaListQuery;

/// Raw listing query parameters as they appear in the URL.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListingQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

/// Parsed, immutable listing state. The single source of truth for a
/// listing request; every consumer receives it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub search: String,
    /// `None` is the "All" sentinel.
    pub category: Option<Category>,
    /// `None` is the "All" sentinel.
    pub business_type: Option<BusinessType>,
    pub date_filter: DateFilter,
    pub sort_by: SortBy,
    pub page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            business_type: None,
            date_filter: DateFilter::AllTime,
            sort_by: SortBy::NewestFirst,
            page: 1,
        }
    }
}

impl ListingState {
    /// Parses raw parameters, falling back to defaults for missing or
    /// unrecognized values. "All" and "All Time" map to the sentinels.
    pub fn from_params(params: &ListingQueryParams) -> Self {
        let category = params
            .category
            .as_deref()
            .and_then(|v| Category::try_from(v).ok());
        let business_type = params
            .business_type
            .as_deref()
            .and_then(|v| BusinessType::try_from(v).ok());
        let date_filter = params
            .date
            .as_deref()
            .and_then(|v| DateFilter::try_from(v).ok())
            .unwrap_or_default();
        let sort_by = params
            .sort
            .as_deref()
            .and_then(|v| SortBy::try_from(v).ok())
            .unwrap_or_default();

        Self {
            search: params.search.clone().unwrap_or_default(),
            category,
            business_type,
            date_filter,
            sort_by,
            page: params.page.unwrap_or(1).max(1),
        }
    }

    /// The wire shape of this state, with default values elided.
    pub fn to_params(&self) -> ListingQueryParams {
        ListingQueryParams {
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            category: self.category.map(|c| c.as_str().to_string()),
            business_type: self.business_type.map(|t| t.as_str().to_string()),
            date: (self.date_filter != DateFilter::AllTime)
                .then(|| self.date_filter.as_str().to_string()),
            sort: (self.sort_by != SortBy::NewestFirst)
                .then(|| self.sort_by.as_str().to_string()),
            page: (self.page > 1).then_some(self.page),
        }
    }

    /// Canonical query string for this state, without a leading `?`.
    /// Empty when every value is at its default.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.to_params()).unwrap_or_default()
    }

    /// Translates the state into a store query.
    pub fn to_list_query(&self, today: NaiveDate, per_page: usize) -> IdeaListQuery {
        let mut query = IdeaListQuery::default()
            .search(self.search.clone())
            .sort(self.sort_by)
            .paginate(self.page, per_page);
        if let Some(category) = self.category {
            query = query.category(category);
        }
        if let Some(business_type) = self.business_type {
            query = query.business_type(business_type);
        }
        if let Some(cutoff) = self.date_filter.cutoff(today) {
            query = query.since(cutoff);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_maps_to_empty_query_string() {
        let state = ListingState::default();
        assert_eq!(state.to_query_string(), "");
    }

    #[test]
    fn round_trips_through_params() {
        let state = ListingState {
            search: "recipe".into(),
            category: Some(Category::FoodAndDrink),
            business_type: Some(BusinessType::MobileApp),
            date_filter: DateFilter::LastMonth,
            sort_by: SortBy::MostClicked,
            page: 3,
        };

        let params = state.to_params();
        assert_eq!(ListingState::from_params(&params), state);
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let params = ListingQueryParams {
            search: None,
            category: Some("Gardening".into()),
            business_type: Some("All".into()),
            date: Some("Yesterday".into()),
            sort: None,
            page: Some(0),
        };

        let state = ListingState::from_params(&params);
        assert_eq!(state, ListingState::default());
    }

    #[test]
    fn query_string_encodes_values() {
        let state = ListingState {
            search: "coffee shop".into(),
            category: Some(Category::FoodAndDrink),
            ..ListingState::default()
        };

        assert_eq!(
            state.to_query_string(),
            "search=coffee+shop&category=Food+%26+Drink"
        );
    }

    #[test]
    fn list_query_carries_filters_and_cutoff() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let state = ListingState {
            category: Some(Category::Technology),
            date_filter: DateFilter::LastWeek,
            page: 2,
            ..ListingState::default()
        };

        let query = state.to_list_query(today, 12);
        assert_eq!(query.category, Some(Category::Technology));
        assert_eq!(query.since, NaiveDate::from_ymd_opt(2025, 1, 8));
        assert!(query.search.is_none());
        let pagination = query.pagination.unwrap();
        assert_eq!(pagination.offset(), 12);
    }
}

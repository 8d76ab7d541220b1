//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary. The closed classification enumerations live here as well.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if !trimmed.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(trimmed))
            }

            /// Borrow the URL as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned URL.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(IdeaId, "Unique identifier for an idea.", "idea_id");

non_empty_string_newtype!(
    IdeaTitle,
    "Idea title enforcing non-empty values.",
    "idea title"
);
non_empty_string_newtype!(
    CreatorName,
    "Creator display name enforcing non-empty values.",
    "creator name"
);
non_empty_string_newtype!(TagName, "Subcategory tag enforcing non-empty values.", "tag");

url_string_newtype!(SourceUrl, "External source or logo URL.", "source url");

/// Monotonically increasing view counter. Never negative, never decremented.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ClickCount(i32);

impl ClickCount {
    /// Constructs a counter value that must be zero or greater.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("clicks"))
        }
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ClickCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ClickCount> for i32 {
    fn from(value: ClickCount) -> Self {
        value.0
    }
}

/// Top-level classification. Closed: every persisted idea carries one of
/// these labels, which makes slug resolution exact and collision-free.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    Lifestyle,
    Education,
    Social,
    Productivity,
    Technology,
    Business,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::FoodAndDrink,
        Self::Lifestyle,
        Self::Education,
        Self::Social,
        Self::Productivity,
        Self::Technology,
        Self::Business,
    ];

    /// Display label, also the persisted representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodAndDrink => "Food & Drink",
            Self::Lifestyle => "Lifestyle",
            Self::Education => "Education",
            Self::Social => "Social",
            Self::Productivity => "Productivity",
            Self::Technology => "Technology",
            Self::Business => "Business",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("category: {value}")))
    }
}

impl TryFrom<String> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Secondary classification describing business model shape. Closed like
/// [`Category`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BusinessType {
    #[serde(rename = "SaaS")]
    Saas,
    #[serde(rename = "API Product")]
    ApiProduct,
    Marketplace,
    Directory,
    #[serde(rename = "Content Business")]
    ContentBusiness,
    Community,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "Data Business")]
    DataBusiness,
}

impl BusinessType {
    pub const ALL: [Self; 8] = [
        Self::Saas,
        Self::ApiProduct,
        Self::Marketplace,
        Self::Directory,
        Self::ContentBusiness,
        Self::Community,
        Self::MobileApp,
        Self::DataBusiness,
    ];

    /// Display label, also the persisted representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saas => "SaaS",
            Self::ApiProduct => "API Product",
            Self::Marketplace => "Marketplace",
            Self::Directory => "Directory",
            Self::ContentBusiness => "Content Business",
            Self::Community => "Community",
            Self::MobileApp => "Mobile App",
            Self::DataBusiness => "Data Business",
        }
    }
}

impl Display for BusinessType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for BusinessType {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == value.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("business type: {value}")))
    }
}

impl TryFrom<String> for BusinessType {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Relative date window applied to `source_date` when listing ideas.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DateFilter {
    #[default]
    AllTime,
    LastWeek,
    LastMonth,
    Last3Months,
    Last6Months,
    LastYear,
}

impl DateFilter {
    pub const ALL: [Self; 6] = [
        Self::AllTime,
        Self::LastWeek,
        Self::LastMonth,
        Self::Last3Months,
        Self::Last6Months,
        Self::LastYear,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllTime => "All Time",
            Self::LastWeek => "Last Week",
            Self::LastMonth => "Last Month",
            Self::Last3Months => "Last 3 Months",
            Self::Last6Months => "Last 6 Months",
            Self::LastYear => "Last Year",
        }
    }

    /// Window size in days. `None` means no cutoff.
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::AllTime => None,
            Self::LastWeek => Some(7),
            Self::LastMonth => Some(30),
            Self::Last3Months => Some(90),
            Self::Last6Months => Some(180),
            Self::LastYear => Some(365),
        }
    }

    /// Inclusive lower bound for `source_date`, at day granularity.
    /// Future-dated items always pass: this is a floor, not a ceiling.
    pub fn cutoff(self, today: chrono::NaiveDate) -> Option<chrono::NaiveDate> {
        self.days().map(|d| today - chrono::Duration::days(d))
    }
}

impl Display for DateFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for DateFilter {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == value.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("date filter: {value}")))
    }
}

/// Ordering applied to listing results. The secondary key is always
/// `id` ascending so pagination is deterministic under ties.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortBy {
    #[default]
    NewestFirst,
    OldestFirst,
    MostClicked,
    LeastClicked,
}

impl SortBy {
    pub const ALL: [Self; 4] = [
        Self::NewestFirst,
        Self::OldestFirst,
        Self::MostClicked,
        Self::LeastClicked,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewestFirst => "Newest First",
            Self::OldestFirst => "Oldest First",
            Self::MostClicked => "Most Clicked",
            Self::LeastClicked => "Least Clicked",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for SortBy {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("sort order: {value}")))
    }
}

//! # Listing Query Model
//!
//! The filter/sort/paginate contract for acronym listing requests.
//!
//! ## Filter Combination Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Filter Predicate                                   │
//! │                                                                         │
//! │  neither abbreviation nor phrase   →  all rows                         │
//! │  only abbreviation                 →  abbreviation CONTAINS value      │
//! │  only phrase                       →  phrase CONTAINS value            │
//! │  both                              →  abbreviation CONTAINS a          │
//! │                                       OR phrase CONTAINS p             │
//! │                                                                         │
//! │  Note the OR: supplying both filters widens the result set, it         │
//! │  does not narrow it.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Substring matching is byte-wise (case-sensitive), matching the
//! storage layer's `instr` semantics, so this module and the SQL built
//! from it agree on every input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::Acronym;
use crate::DEFAULT_PAGE_SIZE;

// =============================================================================
// Sort Column
// =============================================================================

/// Sortable columns for listing requests.
///
/// One variant per column, mapped explicitly to a column name. The
/// `order` request parameter is parsed into this enum; arbitrary
/// strings never reach SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Abbreviation,
    Description,
    Phrase,
}

impl SortColumn {
    /// All accepted `order` parameter values.
    pub const ALLOWED: [&'static str; 4] = ["id", "abbreviation", "description", "phrase"];

    /// Returns the SQL column this variant sorts by.
    pub const fn column_name(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Abbreviation => "abbreviation",
            SortColumn::Description => "description",
            SortColumn::Phrase => "phrase",
        }
    }

    /// Returns the comparison key of an acronym for this column.
    ///
    /// Used by the pure ordering model; the database applies the same
    /// column via [`SortColumn::column_name`].
    pub fn key<'a>(&self, acronym: &'a Acronym) -> SortKey<'a> {
        match self {
            SortColumn::Id => SortKey::Id(acronym.id),
            SortColumn::Abbreviation => SortKey::Text(Some(&acronym.abbreviation)),
            SortColumn::Description => SortKey::Text(acronym.description.as_deref()),
            SortColumn::Phrase => SortKey::Text(Some(&acronym.phrase)),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for SortColumn {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(SortColumn::Id),
            "abbreviation" => Ok(SortColumn::Abbreviation),
            "description" => Ok(SortColumn::Description),
            "phrase" => Ok(SortColumn::Phrase),
            _ => Err(ValidationError::NotAllowed {
                field: "order".to_string(),
                allowed: Self::ALLOWED.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

/// Comparison key for one acronym under one sort column.
///
/// SQLite sorts NULL before any text value; `Option` ordering gives the
/// same result for `None` descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Id(i64),
    Text(Option<&'a str>),
}

// =============================================================================
// Acronym Query
// =============================================================================

/// A validated listing request: filters plus pagination.
///
/// ## Example
/// ```rust
/// use acronyms_core::AcronymQuery;
///
/// let query = AcronymQuery::new(10).abbreviation("DM").offset(0);
/// assert_eq!(query.limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymQuery {
    /// Substring filter on the abbreviation column.
    pub abbreviation: Option<String>,

    /// Substring filter on the phrase column.
    pub phrase: Option<String>,

    /// Maximum rows returned, in `[1, 50]`.
    pub limit: i64,

    /// Rows skipped before the page starts.
    pub offset: i64,

    /// Sort column; `None` keeps storage natural order.
    pub order: Option<SortColumn>,
}

impl AcronymQuery {
    /// Creates a query with the given page size and no filters.
    pub fn new(limit: i64) -> Self {
        AcronymQuery {
            abbreviation: None,
            phrase: None,
            limit,
            offset: 0,
            order: None,
        }
    }

    /// Sets the abbreviation substring filter.
    pub fn abbreviation(mut self, value: impl Into<String>) -> Self {
        self.abbreviation = Some(value.into());
        self
    }

    /// Sets the phrase substring filter.
    pub fn phrase(mut self, value: impl Into<String>) -> Self {
        self.phrase = Some(value.into());
        self
    }

    /// Sets the pagination offset.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the sort column.
    pub fn order(mut self, order: SortColumn) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns whether an acronym matches the filter predicate.
    ///
    /// This is the pure model of the SQL WHERE clause the repository
    /// builds: no filters match everything, one filter is a substring
    /// check on its column, both filters are the OR of the two checks.
    pub fn matches(&self, acronym: &Acronym) -> bool {
        match (self.abbreviation.as_deref(), self.phrase.as_deref()) {
            (None, None) => true,
            (Some(a), None) => acronym.abbreviation.contains(a),
            (None, Some(p)) => acronym.phrase.contains(p),
            (Some(a), Some(p)) => acronym.abbreviation.contains(a) || acronym.phrase.contains(p),
        }
    }
}

impl Default for AcronymQuery {
    fn default() -> Self {
        AcronymQuery::new(DEFAULT_PAGE_SIZE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

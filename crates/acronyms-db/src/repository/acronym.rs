//! # Acronym Repository
//!
//! Database operations for acronyms.
//!
//! ## Key Operations
//! - Lookup by id
//! - Filtered listing with total count
//! - Insert / replace / delete with uniqueness enforcement
//!
//! ## Filtered Listing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 How a Listing Request Executes                          │
//! │                                                                         │
//! │  AcronymQuery { abbreviation: "DM", phrase: None, limit: 10, ... }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE instr(abbreviation, ?) > 0                                      │
//! │       │                                                                 │
//! │       ├──► SELECT COUNT(*) ...        → total (X-Total-Count)          │
//! │       │                                                                 │
//! │       └──► SELECT ... ORDER BY <column>, id LIMIT ? OFFSET ?           │
//! │                                       → page                           │
//! │                                                                         │
//! │  Both statements share the same WHERE clause, so the count always      │
//! │  describes the filtered set the page was cut from.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Substring matching uses SQLite `instr`, which is byte-wise and
//! case-sensitive and treats no character as a wildcard.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use acronyms_core::{Acronym, AcronymBody, AcronymQuery};

/// Columns selected for every acronym read.
const ACRONYM_COLUMNS: &str = "id, abbreviation, description, phrase";

/// Repository for acronym database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = AcronymRepository::new(pool);
///
/// let (page, total) = repo.search(&query).await?;
/// let one = repo.get_by_id(3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AcronymRepository {
    pool: SqlitePool,
}

impl AcronymRepository {
    /// Creates a new AcronymRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AcronymRepository { pool }
    }

    /// Gets an acronym by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Acronym))` - Acronym found
    /// * `Ok(None)` - No row with that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Acronym>> {
        let acronym = sqlx::query_as::<_, Acronym>(&format!(
            "SELECT {ACRONYM_COLUMNS} FROM acronyms WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(acronym)
    }

    /// Runs a filtered, ordered, paginated listing.
    ///
    /// ## Returns
    /// The page of matching acronyms plus the total number of rows
    /// matching the filter before pagination.
    ///
    /// ## Ordering
    /// - `order` set: that column ascending, ties broken by id
    ///   (insertion order)
    /// - `order` unset: storage natural order, not guaranteed stable
    ///
    /// An offset beyond the total count returns an empty page.
    pub async fn search(&self, query: &AcronymQuery) -> DbResult<(Vec<Acronym>, i64)> {
        let (where_sql, binds) = filter_clause(query);

        debug!(
            abbreviation = ?query.abbreviation,
            phrase = ?query.phrase,
            limit = query.limit,
            offset = query.offset,
            "Listing acronyms"
        );

        // Total count over the same filter, before pagination
        let count_sql = format!("SELECT COUNT(*) FROM acronyms{where_sql}");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for bind in &binds {
            count_query = count_query.bind(bind);
        }
        let total = count_query.fetch_one(&self.pool).await?;

        // The sort column comes from the SortColumn enum, never from a
        // request-supplied string.
        let order_sql = match query.order {
            Some(column) => format!(" ORDER BY {} ASC, id ASC", column.column_name()),
            None => String::new(),
        };

        let page_sql = format!(
            "SELECT {ACRONYM_COLUMNS} FROM acronyms{where_sql}{order_sql} LIMIT ? OFFSET ?"
        );
        let mut page_query = sqlx::query_as::<_, Acronym>(&page_sql);
        for bind in &binds {
            page_query = page_query.bind(bind);
        }
        let page = page_query
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = page.len(), total, "Listing returned acronyms");
        Ok((page, total))
    }

    /// Inserts a new acronym.
    ///
    /// ## Returns
    /// * `Ok(i64)` - The storage-assigned id of the new row
    /// * `Err(DbError::UniqueViolation)` - (abbreviation, phrase) pair
    ///   already exists; storage is unchanged
    pub async fn insert(&self, body: &AcronymBody) -> DbResult<i64> {
        debug!(abbreviation = %body.abbreviation, "Inserting acronym");

        let result =
            sqlx::query("INSERT INTO acronyms (abbreviation, description, phrase) VALUES (?, ?, ?)")
                .bind(&body.abbreviation)
                .bind(&body.description)
                .bind(&body.phrase)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replaces all mutable fields of an existing acronym.
    ///
    /// The triple (abbreviation, description, phrase) is applied as a
    /// unit; partial updates are not supported.
    ///
    /// ## Returns
    /// * `Ok(())` - Row replaced, or no row had that id (a no-op that
    ///   still reports success; see DESIGN.md)
    /// * `Err(DbError::UniqueViolation)` - The new pair collides with
    ///   another row; storage is unchanged
    pub async fn replace(&self, id: i64, body: &AcronymBody) -> DbResult<()> {
        debug!(id, "Replacing acronym");

        sqlx::query("UPDATE acronyms SET abbreviation = ?, description = ?, phrase = ? WHERE id = ?")
            .bind(&body.abbreviation)
            .bind(&body.description)
            .bind(&body.phrase)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes an acronym by id.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No row had that id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting acronym");

        let result = sqlx::query("DELETE FROM acronyms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Acronym", id.to_string()));
        }

        Ok(())
    }

    /// Counts total acronyms (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM acronyms")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Builds the WHERE clause and its bind values for a listing filter.
///
/// The combination rule:
/// - neither filter → no WHERE clause
/// - one filter → substring check on its column
/// - both filters → OR of the two substring checks (not AND)
fn filter_clause(query: &AcronymQuery) -> (&'static str, Vec<&str>) {
    match (query.abbreviation.as_deref(), query.phrase.as_deref()) {
        (None, None) => ("", Vec::new()),
        (Some(a), None) => (" WHERE instr(abbreviation, ?) > 0", vec![a]),
        (None, Some(p)) => (" WHERE instr(phrase, ?) > 0", vec![p]),
        (Some(a), Some(p)) => (
            " WHERE instr(abbreviation, ?) > 0 OR instr(phrase, ?) > 0",
            vec![a, p],
        ),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use acronyms_core::SortColumn;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Seeds the canonical AM/DM fixture from the service contract.
    async fn seed(repo: &AcronymRepository) -> Vec<i64> {
        let mut ids = Vec::new();
        for (abbreviation, phrase) in [
            ("AM", "Ante Meridiem"),
            ("DM", "Data Mining"),
            ("DM", "Direct Message"),
        ] {
            ids.push(
                repo.insert(&AcronymBody::new(abbreviation, None, phrase))
                    .await
                    .unwrap(),
            );
        }
        ids
    }

    #[tokio::test]
    async fn test_insert_returns_fresh_id_and_get_round_trips() {
        let db = test_db().await;
        let repo = db.acronyms();

        let body = AcronymBody::new("AM", Some("Before noon".to_string()), "Ante Meridiem");
        let id = repo.insert(&body).await.unwrap();

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.abbreviation, "AM");
        assert_eq!(stored.description.as_deref(), Some("Before noon"));
        assert_eq!(stored.phrase, "Ante Meridiem");

        let second = repo
            .insert(&AcronymBody::new("PM", None, "Post Meridiem"))
            .await
            .unwrap();
        assert_ne!(id, second);
    }

    #[tokio::test]
    async fn test_duplicate_pair_conflicts_and_leaves_count_unchanged() {
        let db = test_db().await;
        let repo = db.acronyms();

        repo.insert(&AcronymBody::new("DM", None, "Data Mining"))
            .await
            .unwrap();

        let err = repo
            .insert(&AcronymBody::new("DM", None, "Data Mining"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
        assert_eq!(repo.count().await.unwrap(), 1);

        // Same abbreviation with a different phrase is allowed
        repo.insert(&AcronymBody::new("DM", None, "Direct Message"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_abbreviation_filter_returns_substring_matches() {
        let db = test_db().await;
        let repo = db.acronyms();
        let ids = seed(&repo).await;

        let query = AcronymQuery::new(10).abbreviation("DM").order(SortColumn::Id);
        let (page, total) = repo.search(&query).await.unwrap();

        assert_eq!(total, 2);
        assert_eq!(
            page.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![ids[1], ids[2]]
        );
    }

    #[tokio::test]
    async fn test_both_filters_return_or_union() {
        let db = test_db().await;
        let repo = db.acronyms();
        seed(&repo).await;

        let query = AcronymQuery::new(10)
            .abbreviation("AM")
            .phrase("Message")
            .order(SortColumn::Id);
        let (page, total) = repo.search(&query).await.unwrap();

        // AM row matches on abbreviation, Direct Message on phrase;
        // Data Mining matches neither. An AND would return nothing.
        assert_eq!(total, 2);
        assert_eq!(page[0].phrase, "Ante Meridiem");
        assert_eq!(page[1].phrase, "Direct Message");
    }

    #[tokio::test]
    async fn test_offset_beyond_total_returns_empty_page() {
        let db = test_db().await;
        let repo = db.acronyms();
        seed(&repo).await;

        let (page, total) = repo
            .search(&AcronymQuery::new(10).offset(100))
            .await
            .unwrap();

        assert_eq!(total, 3);
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_pagination_cuts_the_ordered_set() {
        let db = test_db().await;
        let repo = db.acronyms();
        seed(&repo).await;

        let query = AcronymQuery::new(1).offset(1).order(SortColumn::Phrase);
        let (page, total) = repo.search(&query).await.unwrap();

        // Phrase order: Ante Meridiem, Data Mining, Direct Message
        assert_eq!(total, 3);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].phrase, "Data Mining");
    }

    #[tokio::test]
    async fn test_order_ties_break_by_insertion_order() {
        let db = test_db().await;
        let repo = db.acronyms();
        let ids = seed(&repo).await;

        let query = AcronymQuery::new(10).order(SortColumn::Abbreviation);
        let (page, _) = repo.search(&query).await.unwrap();

        // Both DM rows share the sort key; the earlier insert comes first
        assert_eq!(
            page.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![ids[0], ids[1], ids[2]]
        );
    }

    #[tokio::test]
    async fn test_replace_applies_full_triple() {
        let db = test_db().await;
        let repo = db.acronyms();
        let id = repo
            .insert(&AcronymBody::new(
                "AM",
                Some("old".to_string()),
                "Ante Meridiem",
            ))
            .await
            .unwrap();

        repo.replace(id, &AcronymBody::new("FM", None, "Frequency Modulation"))
            .await
            .unwrap();

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.abbreviation, "FM");
        assert_eq!(stored.description, None);
        assert_eq!(stored.phrase, "Frequency Modulation");
    }

    #[tokio::test]
    async fn test_replace_collision_conflicts_and_preserves_row() {
        let db = test_db().await;
        let repo = db.acronyms();
        let ids = seed(&repo).await;

        // Row 2 (DM / Data Mining) -> (AM / Ante Meridiem) collides with row 1
        let err = repo
            .replace(ids[1], &AcronymBody::new("AM", None, "Ante Meridiem"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));

        let unchanged = repo.get_by_id(ids[1]).await.unwrap().unwrap();
        assert_eq!(unchanged.abbreviation, "DM");
        assert_eq!(unchanged.phrase, "Data Mining");
    }

    #[tokio::test]
    async fn test_replace_missing_id_is_silent_noop() {
        let db = test_db().await;
        let repo = db.acronyms();

        repo.replace(999, &AcronymBody::new("AM", None, "Ante Meridiem"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let db = test_db().await;
        let repo = db.acronyms();

        let err = repo.delete(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_row_from_listings() {
        let db = test_db().await;
        let repo = db.acronyms();
        let ids = seed(&repo).await;

        repo.delete(ids[1]).await.unwrap();

        let (page, total) = repo.search(&AcronymQuery::new(10)).await.unwrap();
        assert_eq!(total, 2);
        assert!(page.iter().all(|a| a.id != ids[1]));
        assert!(repo.get_by_id(ids[1]).await.unwrap().is_none());
    }
}

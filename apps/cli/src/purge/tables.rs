//! Relational store — ten independent tables, each carrying an
//! `arxiv_code` column. No foreign keys link them, so the delete order
//! is fixed but incidental.

use sqlx::PgPool;
use tracing::info;

use crate::errors::PurgeError;

/// Every table holding rows for a paper, in delete order.
pub const TABLES: [&str; 10] = [
    "arxiv_details",
    "summaries",
    "summary_notes",
    "recursive_summaries",
    "semantic_details",
    "topics",
    "arxiv_chunks",
    "arxiv_parent_chunks",
    "arxiv_large_parent_chunks",
    "arxiv_qna",
];

fn delete_statement(table: &str) -> String {
    // `table` comes from the fixed list above, never from user input.
    format!("DELETE FROM {table} WHERE arxiv_code = $1")
}

/// Deletes `arxiv_code` from every table inside one transaction.
///
/// A failure on any statement aborts the remaining tables and rolls the
/// transaction back. Zero affected rows is a reported outcome, not an
/// error.
pub async fn delete_from_all_tables(pool: &PgPool, arxiv_code: &str) -> Result<(), PurgeError> {
    let mut tx = pool.begin().await?;

    for table in TABLES {
        let result = sqlx::query(&delete_statement(table))
            .bind(arxiv_code)
            .execute(&mut *tx)
            .await?;
        info!(
            "Deleted {} row(s) for {} from {}.",
            result.rows_affected(),
            arxiv_code,
            table
        );
    }

    tx.commit().await?;
    Ok(())
}

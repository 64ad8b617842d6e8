//! Record repository for CRUD operations on portfolio project documents.
//!
//! Every method borrows a connection from the shared pool for exactly the
//! duration of its statement; nothing here opens or closes connections and
//! no exit path can leak one.

use crate::{DbError, Result as DbErrorResult};

use folio_core::ProjectRecord;

use serde_json::{Map, Value};
use sqlx::SqlitePool;

pub struct RecordRepository {
    pool: SqlitePool,
}

impl RecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All records, in store-native order. No ORDER BY: the order is
    /// whatever the engine yields and is not guaranteed stable.
    pub async fn find_all(&self) -> DbErrorResult<Vec<ProjectRecord>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT id, doc FROM portfolio_projects")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|(id, doc)| decode_doc(id, &doc))
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<ProjectRecord>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT id, doc FROM portfolio_projects WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(id, doc)| decode_doc(id, &doc)).transpose()
    }

    /// Insert a record under its identity key. A key collision is reported
    /// as `DbError::Duplicate` so the handler can surface it as a client
    /// error instead of a generic server error.
    pub async fn insert(&self, record: &ProjectRecord) -> DbErrorResult<()> {
        let doc = encode_doc(&record.fields)?;

        sqlx::query("INSERT INTO portfolio_projects (id, doc) VALUES (?, ?)")
            .bind(&record.id)
            .bind(&doc)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => {
                    DbError::duplicate(format!("record {} already exists", record.id))
                }
                _ => DbError::from(e),
            })?;

        Ok(())
    }

    /// Partial merge update. The record is fetched first, so an absent
    /// identity key comes back as `None` and a merge that changes no values
    /// still counts as success.
    pub async fn update(
        &self,
        id: &str,
        fields: Map<String, Value>,
    ) -> DbErrorResult<Option<ProjectRecord>> {
        let Some(mut record) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        record.merge(fields);
        let doc = encode_doc(&record.fields)?;

        sqlx::query("UPDATE portfolio_projects SET doc = ? WHERE id = ?")
            .bind(&doc)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Some(record))
    }

    /// Delete by identity key. Returns the number of rows removed; zero
    /// means the key matched nothing.
    pub async fn delete(&self, id: &str) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM portfolio_projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn decode_doc(id: String, doc: &str) -> DbErrorResult<ProjectRecord> {
    let fields: Map<String, Value> = serde_json::from_str(doc)
        .map_err(|e| DbError::corrupt(format!("record {}: doc is not a JSON object: {}", id, e)))?;

    Ok(ProjectRecord { id, fields })
}

fn encode_doc(fields: &Map<String, Value>) -> DbErrorResult<String> {
    serde_json::to_string(fields)
        .map_err(|e| DbError::corrupt(format!("failed to serialize doc: {}", e)))
}

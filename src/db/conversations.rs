//! Conversation Store
//!
//! Append-only log of answered questions. Records are never updated or
//! deleted; reads return the most recent records first.

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::ConversationRecord;
use crate::types::AppResult;

/// Maximum number of records served by the history endpoint
pub const RECENT_LIMIT: usize = 20;

#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn append(&self, record: &ConversationRecord) -> AppResult<()>;

    /// Up to `limit` records, newest first
    async fn recent(&self, limit: usize) -> AppResult<Vec<ConversationRecord>>;

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    /// Release the underlying connection(s)
    async fn close(&self) {}
}

// `seq` breaks timestamp ties so the newest insert comes first
const RECENT_QUERY: &str = r#"
    SELECT id, session_id, question, response, created_at
    FROM conversations
    ORDER BY created_at DESC, seq DESC
    LIMIT $1
"#;

pub struct PgConversationStore {
    pool: PgPool,
}

impl PgConversationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationStore for PgConversationStore {
    async fn append(&self, record: &ConversationRecord) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO conversations (id, session_id, question, response, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id)
        .bind(record.session_id)
        .bind(&record.question)
        .bind(&record.response)
        .bind(record.timestamp)
        .execute(&self.pool)
        .await?;

        debug!(id = %record.id, session_id = %record.session_id, "Conversation stored");
        Ok(())
    }

    async fn recent(&self, limit: usize) -> AppResult<Vec<ConversationRecord>> {
        let records = sqlx::query_as::<_, ConversationRecord>(RECENT_QUERY)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }
}

/// Store kept in process memory, used by tests and database-less runs
#[derive(Default)]
pub struct InMemoryConversationStore {
    records: RwLock<Vec<ConversationRecord>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn append(&self, record: &ConversationRecord) -> AppResult<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> AppResult<Vec<ConversationRecord>> {
        let records = self.records.read().await;
        // Newest insert first on equal timestamps
        let mut sorted: Vec<ConversationRecord> = records.iter().rev().cloned().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.truncate(limit);
        Ok(sorted)
    }
}

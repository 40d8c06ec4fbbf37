use async_trait::async_trait;

/// Persistence operations shared by every entity table.
///
/// Absence and failure are kept apart: `find_by_id` answers `Ok(None)` for a
/// missing row and reserves `Err` for the store itself.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Persisted record, `id` included.
    type Entity: Send;
    /// Every field of the record except `id`.
    type Draft: Send;

    /// Singular noun used in client-facing messages.
    const ENTITY: &'static str;

    /// Inserts when `id` is `None`, otherwise replaces the row with that `id`.
    async fn save(&self, id: Option<i64>, draft: Self::Draft) -> Result<Self::Entity, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<Self::Entity>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Self::Entity>, sqlx::Error>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Returns `false` when there was nothing to delete.
    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;
}

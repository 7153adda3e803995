//! Generic repository traits following Interface Segregation Principle (ISP).
//!
//! Any SeaORM entity keyed by a single primary key gets paginated reads,
//! partial updates and hard deletes by implementing `db()`. Mutations run in
//! their own transaction and roll back fully on any storage failure.
//!
//! These traits carry no business rules and perform no validation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, IntoActiveModel, Iterable, PaginatorTrait, PrimaryKeyTrait, QuerySelect,
    TransactionTrait,
};

use crate::errors::AppResult;
use crate::types::PageWindow;

/// Primary key value type of an entity
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Sync,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Single-row lookup by primary key
    async fn get_by_id(&self, id: PrimaryKeyOf<E>) -> AppResult<Option<E::Model>> {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// Rows in the store's natural order, offset by `skip`, capped at `limit`
    async fn get_all(&self, window: PageWindow) -> AppResult<Vec<E::Model>> {
        E::find()
            .offset(window.skip)
            .limit(window.limit)
            .all(self.db())
            .await
            .map_err(Into::into)
    }

    /// Count all entities
    async fn count(&self) -> AppResult<u64> {
        E::find().count(self.db()).await.map_err(Into::into)
    }

    /// Whether a row with this primary key is stored
    async fn exists(&self, id: PrimaryKeyOf<E>) -> AppResult<bool> {
        let matches = E::find_by_id(id).count(self.db()).await?;
        Ok(matches > 0)
    }
}

/// Write operations (Command)
#[async_trait]
pub trait WriteRepository<A>: Send + Sync
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Insert a new row and return it as persisted.
    ///
    /// The primary key is assigned by the entity's `before_save` when not set.
    async fn create(&self, model: A) -> AppResult<<A::Entity as EntityTrait>::Model> {
        let txn = self.db().begin().await?;
        let result = model.insert(&txn).await;
        commit_or_rollback(txn, result).await
    }

    /// Apply only the `Set` fields of `changes` to the row keyed by `id`.
    ///
    /// Returns `None` when no row matches. A change set with nothing `Set`
    /// returns the stored row without writing.
    async fn update(
        &self,
        id: PrimaryKeyOf<A::Entity>,
        changes: A,
    ) -> AppResult<Option<<A::Entity as EntityTrait>::Model>> {
        let txn = self.db().begin().await?;
        let result = apply_changes::<A>(&txn, id, changes).await;
        commit_or_rollback(txn, result).await
    }
}

/// Delete operations
#[async_trait]
pub trait DeleteRepository<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Hard delete by primary key; `false` when nothing was removed
    async fn delete(&self, id: PrimaryKeyOf<E>) -> AppResult<bool> {
        let txn = self.db().begin().await?;
        let result = E::delete_by_id(id)
            .exec(&txn)
            .await
            .map(|res| res.rows_affected > 0);
        commit_or_rollback(txn, result).await
    }
}

async fn apply_changes<A>(
    txn: &DatabaseTransaction,
    id: PrimaryKeyOf<A::Entity>,
    changes: A,
) -> Result<Option<<A::Entity as EntityTrait>::Model>, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let Some(existing) = <A::Entity as EntityTrait>::find_by_id(id).one(txn).await? else {
        return Ok(None);
    };

    let mut active = existing.clone().into_active_model();
    let mut dirty = false;
    for column in <<A::Entity as EntityTrait>::Column as Iterable>::iter() {
        if let ActiveValue::Set(value) = changes.get(column) {
            active.set(column, value);
            dirty = true;
        }
    }

    if !dirty {
        return Ok(Some(existing));
    }

    active.update(txn).await.map(Some)
}

/// Commit when the work succeeded, otherwise roll back and surface the
/// original storage error.
pub(crate) async fn commit_or_rollback<T>(
    txn: DatabaseTransaction,
    result: Result<T, DbErr>,
) -> AppResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e.into())
        }
    }
}

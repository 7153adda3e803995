//! User repository: the generic CRUD traits plus name lookups.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserChanges};
use crate::errors::AppResult;
use crate::types::PageWindow;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Reports only found/not-found and storage failures; name rules and
/// uniqueness belong to the service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn list(&self, window: PageWindow) -> AppResult<Vec<User>>;

    /// Insert a user with a freshly generated id
    async fn create(&self, first_name: String, last_name: String) -> AppResult<User>;

    /// Apply the supplied fields; `None` if no user has this id
    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>>;

    /// Hard delete; `false` if no user had this id
    async fn delete(&self, id: &str) -> AppResult<bool>;

    async fn count(&self) -> AppResult<u64>;

    async fn exists(&self, id: &str) -> AppResult<bool>;

    /// Exact, case-sensitive match on both names
    async fn find_by_full_name(&self, first_name: &str, last_name: &str)
        -> AppResult<Option<User>>;

    /// Case-insensitive substring match on first OR last name
    async fn search_by_name(&self, query: &str) -> AppResult<Vec<User>>;

    /// Case-insensitive substring match on the first name
    async fn find_by_first_name(&self, query: &str) -> AppResult<Vec<User>>;

    /// Case-insensitive substring match on the last name
    async fn find_by_last_name(&self, query: &str) -> AppResult<Vec<User>>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_matching(&self, condition: Condition) -> AppResult<Vec<User>> {
        let models = UserEntity::find().filter(condition).all(&self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }
}

impl ReadRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// `lower(column) LIKE '%query%'`
fn contains_ignore_case(column: user::Column, query: &str) -> Condition {
    let pattern = format!("%{}%", query.to_lowercase());
    Condition::all().add(Expr::expr(Func::lower(Expr::col(column))).like(pattern))
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let model = self.get_by_id(id.to_string()).await?;
        Ok(model.map(User::from))
    }

    async fn list(&self, window: PageWindow) -> AppResult<Vec<User>> {
        let models = self.get_all(window).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, first_name: String, last_name: String) -> AppResult<User> {
        let active_model = ActiveModel {
            first_name: Set(first_name),
            last_name: Set(last_name),
            ..Default::default()
        };

        let model = WriteRepository::create(self, active_model).await?;
        Ok(User::from(model))
    }

    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>> {
        let mut active_model = ActiveModel::default();
        if let Some(first_name) = changes.first_name {
            active_model.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active_model.last_name = Set(last_name);
        }

        let model = WriteRepository::update(self, id.to_string(), active_model).await?;
        Ok(model.map(User::from))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        DeleteRepository::<UserEntity>::delete(self, id.to_string()).await
    }

    async fn count(&self) -> AppResult<u64> {
        ReadRepository::<UserEntity>::count(self).await
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        ReadRepository::<UserEntity>::exists(self, id.to_string()).await
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user::Column::FirstName.eq(first_name))
            .filter(user::Column::LastName.eq(last_name))
            .one(&self.db)
            .await?;

        Ok(model.map(User::from))
    }

    async fn search_by_name(&self, query: &str) -> AppResult<Vec<User>> {
        let condition = Condition::any()
            .add(contains_ignore_case(user::Column::FirstName, query))
            .add(contains_ignore_case(user::Column::LastName, query));
        self.find_matching(condition).await
    }

    async fn find_by_first_name(&self, query: &str) -> AppResult<Vec<User>> {
        self.find_matching(contains_ignore_case(user::Column::FirstName, query))
            .await
    }

    async fn find_by_last_name(&self, query: &str) -> AppResult<Vec<User>> {
        self.find_matching(contains_ignore_case(user::Column::LastName, query))
            .await
    }
}

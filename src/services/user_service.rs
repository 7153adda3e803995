//! User service - Handles user-related business logic.
//!
//! Trims and validates names, enforces the unique (first, last) pair and
//! clamps list windows before anything reaches the repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{validate_id, validate_names, User, UserChanges};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;
use crate::types::PageWindow;

/// User service trait for dependency injection.
///
/// Lookups by id return `None` for missing users; only the HTTP layer turns
/// that into a 404.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate, check uniqueness and persist a new user
    async fn create_user(&self, first_name: &str, last_name: &str) -> AppResult<User>;

    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// List with a permissive skip/limit clamp
    async fn list_users(&self, skip: i64, limit: i64) -> AppResult<Vec<User>>;

    /// Partial update; empty changes return the stored user untouched
    async fn update_user(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>>;

    async fn delete_user(&self, id: &str) -> AppResult<bool>;

    /// Case-insensitive substring search on first or last name
    async fn search_users(&self, query: &str) -> AppResult<Vec<User>>;

    async fn get_users_by_first_name(&self, name: &str) -> AppResult<Vec<User>>;

    async fn get_users_by_last_name(&self, name: &str) -> AppResult<Vec<User>>;

    async fn get_user_count(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserService over a UserRepository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Translate a unique-index rejection into the same conflict the
/// pre-check reports.
fn conflict_on_unique(err: AppError, message: String) -> AppError {
    if err.is_unique_violation() {
        tracing::warn!("{}", message);
        AppError::conflict(message)
    } else {
        err
    }
}

fn reject(err: AppError) -> AppError {
    tracing::warn!("Rejected user request: {}", err);
    err
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, first_name: &str, last_name: &str) -> AppResult<User> {
        let (first, last) = validate_names(first_name, last_name).map_err(reject)?;

        let duplicate = format!("User with name '{} {}' already exists", first, last);
        if self.repo.find_by_full_name(&first, &last).await?.is_some() {
            return Err(reject(AppError::conflict(duplicate)));
        }

        let user = self
            .repo
            .create(first, last)
            .await
            .map_err(|e| conflict_on_unique(e, duplicate))?;

        tracing::info!(user_id = %user.id, "Created user {}", user.full_name());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let id = validate_id(id).map_err(reject)?;
        self.repo.find_by_id(id).await
    }

    async fn list_users(&self, skip: i64, limit: i64) -> AppResult<Vec<User>> {
        self.repo.list(PageWindow::clamp(skip, limit)).await
    }

    async fn update_user(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>> {
        let id = validate_id(id).map_err(reject)?;

        let Some(existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(existing));
        }

        let (requested_first, requested_last) = changes.apply_to(&existing);
        let (first, last) = validate_names(&requested_first, &requested_last).map_err(reject)?;

        let duplicate = format!("Another user with name '{} {}' already exists", first, last);
        if !existing.has_name(&first, &last) {
            if let Some(other) = self.repo.find_by_full_name(&first, &last).await? {
                if other.id != existing.id {
                    return Err(reject(AppError::conflict(duplicate)));
                }
            }
        }

        let trimmed = UserChanges {
            first_name: changes.first_name.map(|_| first),
            last_name: changes.last_name.map(|_| last),
        };

        let updated = self
            .repo
            .update(id, trimmed)
            .await
            .map_err(|e| conflict_on_unique(e, duplicate))?;

        if let Some(user) = &updated {
            tracing::info!(user_id = %user.id, "Updated user {}", user.full_name());
        }
        Ok(updated)
    }

    async fn delete_user(&self, id: &str) -> AppResult<bool> {
        let id = validate_id(id).map_err(reject)?;

        let removed = self.repo.delete(id).await?;
        if removed {
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(removed)
    }

    async fn search_users(&self, query: &str) -> AppResult<Vec<User>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.search_by_name(query).await
    }

    async fn get_users_by_first_name(&self, name: &str) -> AppResult<Vec<User>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.find_by_first_name(name).await
    }

    async fn get_users_by_last_name(&self, name: &str) -> AppResult<Vec<User>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.find_by_last_name(name).await
    }

    async fn get_user_count(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;
    use sea_orm::{DbErr, RuntimeErr};

    fn user(id: &str, first: &str, last: &str) -> User {
        User::new(id, first, last)
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    // =========================================================================
    // create_user
    // =========================================================================

    #[tokio::test]
    async fn test_create_user_trims_and_persists() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_full_name()
            .withf(|first, last| first == "Alice" && last == "Smith")
            .times(1)
            .returning(|_, _| Ok(None));
        repo.expect_create()
            .with(eq("Alice".to_string()), eq("Smith".to_string()))
            .times(1)
            .returning(|first, last| Ok(User::new("new-id", first, last)));

        let created = service(repo).create_user("  Alice ", " Smith").await.unwrap();

        assert_eq!(created.id, "new-id");
        assert_eq!(created.full_name(), "Alice Smith");
    }

    #[tokio::test]
    async fn test_create_user_blank_name_persists_nothing() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_full_name().never();
        repo.expect_create().never();
        let service = service(repo);

        for first in ["", "   "] {
            let err = service.create_user(first, "Doe").await.unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == "First name cannot be empty"));
        }
    }

    #[tokio::test]
    async fn test_create_user_too_long_last_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let err = service(repo)
            .create_user("John", &"x".repeat(101))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m.contains("100 characters")));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_pair_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_full_name()
            .returning(|first, last| Ok(Some(user("existing", first, last))));
        repo.expect_create().never();

        let err = service(repo).create_user("Alice ", "Smith").await.unwrap_err();

        match err {
            AppError::Conflict(message) => {
                assert_eq!(message, "User with name 'Alice Smith' already exists")
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user_other_write_failures_are_not_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_full_name().returning(|_, _| Ok(None));
        repo.expect_create().returning(|_, _| {
            Err(AppError::Database(DbErr::Exec(RuntimeErr::Internal(
                "disk I/O error".to_string(),
            ))))
        });

        let err = service(repo).create_user("Alice", "Smith").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_create_user_storage_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_full_name()
            .returning(|_, _| Err(AppError::Database(DbErr::Custom("connection reset".into()))));

        let err = service(repo).create_user("Alice", "Smith").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    // =========================================================================
    // get / list / count
    // =========================================================================

    #[tokio::test]
    async fn test_get_user_blank_id_is_validation_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let err = service(repo).get_user_by_id("  ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_user_absent_is_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "missing")
            .returning(|_| Ok(None));

        let found = service(repo).get_user_by_id("missing").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_user_is_idempotent() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(2)
            .returning(|id| Ok(Some(user(id, "Alice", "Smith"))));
        let service = service(repo);

        let first = service.get_user_by_id("u1").await.unwrap();
        let second = service.get_user_by_id("u1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_users_clamps_window() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .with(eq(PageWindow { skip: 0, limit: 100 }))
            .times(1)
            .returning(|_| Ok(vec![user("1", "Alice", "Smith")]));

        let users = service(repo).list_users(-5, 5000).await.unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_list_users_passes_valid_window() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .with(eq(PageWindow { skip: 20, limit: 10 }))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        assert!(service(repo).list_users(20, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_user_count() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().returning(|| Ok(7));

        assert_eq!(service(repo).get_user_count().await.unwrap(), 7);
    }

    // =========================================================================
    // update_user
    // =========================================================================

    #[tokio::test]
    async fn test_update_user_empty_changes_is_noop() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(user(id, "Alice", "Smith"))));
        repo.expect_update().never();
        repo.expect_find_by_full_name().never();

        let updated = service(repo)
            .update_user("u1", UserChanges::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated, user("u1", "Alice", "Smith"));
    }

    #[tokio::test]
    async fn test_update_user_missing_is_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let changes = UserChanges {
            first_name: Some("Bob".to_string()),
            last_name: None,
        };
        assert!(service(repo).update_user("gone", changes).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_renames_with_trimmed_value() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(user(id, "Alice", "Smith"))));
        repo.expect_find_by_full_name()
            .withf(|first, last| first == "Alicia" && last == "Smith")
            .returning(|_, _| Ok(None));
        repo.expect_update()
            .withf(|id, changes| {
                id == "u1"
                    && changes.first_name.as_deref() == Some("Alicia")
                    && changes.last_name.is_none()
            })
            .times(1)
            .returning(|id, changes| {
                Ok(Some(user(id, &changes.first_name.unwrap(), "Smith")))
            });

        let changes = UserChanges {
            first_name: Some("  Alicia ".to_string()),
            last_name: None,
        };
        let updated = service(repo).update_user("u1", changes).await.unwrap().unwrap();

        assert_eq!(updated.full_name(), "Alicia Smith");
    }

    #[tokio::test]
    async fn test_update_user_onto_other_users_pair_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(user(id, "Alice", "Smith"))));
        repo.expect_find_by_full_name()
            .returning(|first, last| Ok(Some(user("u2", first, last))));
        repo.expect_update().never();

        let changes = UserChanges {
            first_name: Some("Bob".to_string()),
            last_name: Some("Johnson".to_string()),
        };
        let err = service(repo).update_user("u1", changes).await.unwrap_err();

        match err {
            AppError::Conflict(message) => {
                assert_eq!(message, "Another user with name 'Bob Johnson' already exists")
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_user_same_pair_skips_uniqueness_check() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(user(id, "Alice", "Smith"))));
        repo.expect_find_by_full_name().never();
        repo.expect_update()
            .returning(|id, _| Ok(Some(user(id, "Alice", "Smith"))));

        let changes = UserChanges {
            first_name: Some("Alice".to_string()),
            last_name: None,
        };
        assert!(service(repo).update_user("u1", changes).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_user_validates_resulting_names() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(user(id, "Alice", "Smith"))));
        repo.expect_update().never();

        let changes = UserChanges {
            first_name: None,
            last_name: Some("  ".to_string()),
        };
        let err = service(repo).update_user("u1", changes).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == "Last name cannot be empty"));
    }

    #[tokio::test]
    async fn test_update_user_blank_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let err = service(repo)
            .update_user("", UserChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    // =========================================================================
    // delete_user
    // =========================================================================

    #[tokio::test]
    async fn test_delete_user_reports_removal() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .withf(|id| id == "u1")
            .returning(|_| Ok(true));
        repo.expect_delete()
            .withf(|id| id == "missing")
            .returning(|_| Ok(false));
        let service = service(repo);

        assert!(service.delete_user("u1").await.unwrap());
        assert!(!service.delete_user("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_user_blank_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().never();

        let err = service(repo).delete_user(" ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    // =========================================================================
    // search
    // =========================================================================

    #[tokio::test]
    async fn test_blank_search_returns_empty_without_query() {
        let mut repo = MockUserRepository::new();
        repo.expect_search_by_name().never();
        repo.expect_find_by_first_name().never();
        repo.expect_find_by_last_name().never();
        let service = service(repo);

        assert!(service.search_users("").await.unwrap().is_empty());
        assert!(service.search_users("   ").await.unwrap().is_empty());
        assert!(service.get_users_by_first_name(" ").await.unwrap().is_empty());
        assert!(service.get_users_by_last_name("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_delegates_trimmed_query() {
        let mut repo = MockUserRepository::new();
        repo.expect_search_by_name()
            .withf(|q| q == "sm")
            .times(1)
            .returning(|_| Ok(vec![user("1", "Alice", "Smith")]));
        repo.expect_find_by_first_name()
            .withf(|q| q == "bo")
            .returning(|_| Ok(vec![user("2", "Bob", "Johnson")]));
        repo.expect_find_by_last_name()
            .withf(|q| q == "john")
            .returning(|_| Ok(vec![user("2", "Bob", "Johnson")]));
        let service = service(repo);

        assert_eq!(service.search_users(" sm ").await.unwrap().len(), 1);
        assert_eq!(service.get_users_by_first_name("bo").await.unwrap()[0].id, "2");
        assert_eq!(service.get_users_by_last_name("john").await.unwrap()[0].id, "2");
    }
}

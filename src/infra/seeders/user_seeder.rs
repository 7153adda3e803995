//! Sample users for local development.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use super::Seeder;
use crate::config::SAMPLE_USERS;
use crate::errors::AppResult;
use crate::infra::repositories::commit_or_rollback;
use crate::infra::repositories::entities::user::{self, ActiveModel, Entity as UserEntity};

/// Seeds "Alice Smith" and "Bob Johnson"
pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    fn name(&self) -> &'static str {
        "user"
    }

    async fn seed(&self, db: &DatabaseConnection) -> AppResult<u64> {
        let txn = db.begin().await?;
        let result = insert_missing(&txn).await;
        let created = commit_or_rollback(txn, result).await?;

        let total = UserEntity::find().count(db).await?;
        tracing::info!(created, total, "User seeding finished");

        Ok(created)
    }

    async fn clear(&self, db: &DatabaseConnection) -> AppResult<u64> {
        let result = UserEntity::delete_many().exec(db).await?;
        tracing::info!("Cleared {} users from database", result.rows_affected);
        Ok(result.rows_affected)
    }
}

async fn insert_missing(txn: &DatabaseTransaction) -> Result<u64, DbErr> {
    let mut created = 0;

    for (first_name, last_name) in SAMPLE_USERS {
        let existing = UserEntity::find()
            .filter(user::Column::FirstName.eq(*first_name))
            .filter(user::Column::LastName.eq(*last_name))
            .count(txn)
            .await?;

        if existing > 0 {
            tracing::info!("User already exists: {} {}", first_name, last_name);
            continue;
        }

        ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        created += 1;
        tracing::info!("Created user: {} {}", first_name, last_name);
    }

    Ok(created)
}

//! Migration: Create users table with a unique name pair.

use sea_orm_migration::prelude::*;

use crate::config::{MAX_NAME_LENGTH, USER_ID_LENGTH};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Table and column identifiers for Users
#[derive(Iden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
}

const NAME_INDEX: &str = "idx_users_first_name_last_name";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .string_len(USER_ID_LENGTH)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::FirstName)
                            .string_len(MAX_NAME_LENGTH as u32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::LastName)
                            .string_len(MAX_NAME_LENGTH as u32)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Authoritative guard for the (first_name, last_name) uniqueness rule
        manager
            .create_index(
                Index::create()
                    .name(NAME_INDEX)
                    .table(Users::Table)
                    .col(Users::FirstName)
                    .col(Users::LastName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(NAME_INDEX).table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

//! Migration: Create patients table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Patients::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Patients::Cuil)
                            .string_len(13)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Patients::Name).string().not_null())
                    .col(ColumnDef::new(Patients::LastName).string().not_null())
                    .col(ColumnDef::new(Patients::Email).string().not_null())
                    .col(ColumnDef::new(Patients::Street).string().not_null())
                    .col(ColumnDef::new(Patients::Number).integer().not_null())
                    .col(ColumnDef::new(Patients::Locality).string().not_null())
                    // Both set or both NULL
                    .col(ColumnDef::new(Patients::SocialWork).string().null())
                    .col(ColumnDef::new(Patients::AffiliateNumber).string().null())
                    .col(
                        ColumnDef::new(Patients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Patients {
    Table,
    Id,
    Cuil,
    Name,
    LastName,
    Email,
    Street,
    Number,
    Locality,
    SocialWork,
    AffiliateNumber,
    CreatedAt,
}

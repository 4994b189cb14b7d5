/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Volunteer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Volunteer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Volunteer::Name).string().not_null())
                    .col(ColumnDef::new(Volunteer::Linkedin).string().not_null())
                    .col(
                        ColumnDef::new(Volunteer::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Volunteer::IsActive).boolean().null())
                    .col(ColumnDef::new(Volunteer::JobtitleId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-volunteer-jobtitle_id")
                            .from(Volunteer::Table, Volunteer::JobtitleId)
                            .to(JobTitle::Table, JobTitle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Volunteer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Volunteer {
    Table,
    Id,
    Name,
    Linkedin,
    Email,
    IsActive,
    JobtitleId,
}

#[derive(DeriveIden)]
enum JobTitle {
    Table,
    Id,
}

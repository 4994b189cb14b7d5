/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260112_090000_create_table_user;
mod m20260112_090100_create_table_item;
mod m20260112_090200_create_table_job_title;
mod m20260112_090300_create_table_volunteer;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260112_090000_create_table_user::Migration),
            Box::new(m20260112_090100_create_table_item::Migration),
            Box::new(m20260112_090200_create_table_job_title::Migration),
            Box::new(m20260112_090300_create_table_volunteer::Migration),
        ]
    }
}

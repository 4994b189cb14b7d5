/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use super::consts::BASE_JOB_TITLES;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    seed_job_titles(&db)
        .await
        .context("Failed to seed job titles")?;
    Ok(db)
}

/// Fills an empty `job_title` table with the base catalogue. Job titles are
/// read-only through the API, so this is the only place they are created.
pub async fn seed_job_titles(db: &DatabaseConnection) -> Result<u64, DbErr> {
    if EJobTitle::find().count(db).await? > 0 {
        return Ok(0);
    }

    let mut inserted = 0;

    for title in BASE_JOB_TITLES {
        let ajob_title = AJobTitle {
            title: Set(title.to_string()),
            is_active: Set(true),
            ..Default::default()
        };

        ajob_title.insert(db).await?;
        inserted += 1;
    }

    tracing::info!(count = inserted, "Seeded base job titles");
    Ok(inserted)
}

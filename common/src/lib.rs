/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod schemas;
pub mod types;

use anyhow::Result;
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting Volunteer Hub on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;
    let jwt_secret = load_secret(&cli.jwt_secret_file);

    if jwt_secret.is_empty() {
        anyhow::bail!("JWT secret file {} is empty or missing", cli.jwt_secret_file);
    }

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}

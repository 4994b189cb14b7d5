/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::State;
use common::schemas::JobTitle;
use common::types::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<JobTitle>>> {
    let job_titles = EJobTitle::find()
        .filter(CJobTitle::IsActive.eq(true))
        .order_by_asc(CJobTitle::Id)
        .all(&state.db)
        .await?;

    Ok(Json(job_titles.into_iter().map(JobTitle::from).collect()))
}

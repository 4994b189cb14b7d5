/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::Pagination;
use crate::error::WebResult;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use common::schemas::Item;
use common::types::*;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};
use std::sync::Arc;

pub async fn get(
    state: State<Arc<ServerState>>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> WebResult<Json<Vec<Item>>> {
    let Query(pagination) = pagination?;

    let items = EItem::find()
        .order_by_asc(CItem::Id)
        .offset(pagination.skip)
        .limit(pagination.limit())
        .all(&state.db)
        .await?;

    Ok(Json(items.into_iter().map(Item::from).collect()))
}

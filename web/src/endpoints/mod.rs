/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod items;
pub mod job_titles;
pub mod users;
pub mod volunteers;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use common::consts::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use common::types::BaseResponse;
use serde::Deserialize;

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Pagination {
    pub fn limit(&self) -> u64 {
        self.limit.min(MAX_PAGE_LIMIT)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}

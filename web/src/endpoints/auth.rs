/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{authenticate_user, encode_jwt};
use crate::error::{WebError, WebResult};
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::{Form, Json};
use common::schemas::Token;
use common::types::*;
use serde::Deserialize;
use std::sync::Arc;

/// OAuth2 password grant form. `username` may also hold the email address.
#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub grant_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

pub async fn post_token(
    state: State<Arc<ServerState>>,
    body: Result<Form<TokenRequest>, FormRejection>,
) -> WebResult<Json<Token>> {
    let Form(body) = body?;

    if let Some(grant_type) = body.grant_type.as_deref() {
        if grant_type != "password" {
            return Err(WebError::BadRequest(format!(
                "Unsupported grant type: {}",
                grant_type
            )));
        }
    }

    let user = authenticate_user(&state, &body.username, &body.password)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    if user.is_active == Some(false) {
        return Err(WebError::inactive_user());
    }

    let access_token = encode_jwt(&state, &user.username)?;

    tracing::info!(username = %user.username, "Issued access token");

    Ok(Json(Token::bearer(access_token)))
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use common::schemas::{TokenData, UserInDB};
use common::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_auth::verify_password;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: usize,
    pub iat: usize,
}

pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response<Body>> {
    let auth_header = match req.headers().get(axum::http::header::AUTHORIZATION) {
        Some(header) => header
            .to_str()
            .map_err(|_| WebError::Forbidden("Authorization header empty".to_string()))?,
        None => {
            return Err(WebError::Forbidden(
                "Authorization header not found".to_string(),
            ));
        }
    };

    let mut header = auth_header.split_whitespace();

    let token = match (header.next(), header.next()) {
        (Some(scheme), Some(token)) if scheme.eq_ignore_ascii_case("Bearer") => token.to_string(),
        _ => {
            return Err(WebError::Forbidden(
                "Invalid Authorization header".to_string(),
            ));
        }
    };

    let token_data = decode_jwt(&state, &token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected access token");
        WebError::invalid_token()
    })?;

    let current_user = get_current_user(&state, token_data).await?;

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

pub fn encode_jwt(state: &ServerState, username: &str) -> WebResult<String> {
    let now = Utc::now();
    let expire = Duration::minutes(state.cli.access_token_expire_minutes);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;

    let claims = Claims {
        sub: Some(username.to_string()),
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.jwt_secret.as_ref()),
    )
    .map_err(|e| WebError::Internal(anyhow::anyhow!("Failed to generate token: {}", e)))
}

pub fn decode_jwt(
    state: &ServerState,
    jwt: &str,
) -> Result<TokenData, jsonwebtoken::errors::Error> {
    let token = decode::<Claims>(
        jwt,
        &DecodingKey::from_secret(state.jwt_secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(TokenData {
        username: token.claims.sub.filter(|sub| !sub.is_empty()),
    })
}

/// Resolves the subject of a decoded token to an active user.
pub async fn get_current_user(state: &ServerState, token_data: TokenData) -> WebResult<MUser> {
    let username = token_data.username.ok_or_else(WebError::invalid_token)?;

    let user = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_token)?;

    if !user.is_active {
        return Err(WebError::inactive_user());
    }

    Ok(user)
}

/// Looks a user up by username or email and checks the password. Returns
/// `None` for unknown users and wrong passwords alike.
pub async fn authenticate_user(
    state: &ServerState,
    loginname: &str,
    password: &str,
) -> WebResult<Option<UserInDB>> {
    let user = EUser::find()
        .filter(
            Condition::any()
                .add(CUser::Username.eq(loginname))
                .add(CUser::Email.eq(loginname)),
        )
        .one(&state.db)
        .await?;

    let Some(user) = user else {
        return Ok(None);
    };

    let user_in_db = UserInDB::from(user);

    if verify_password(password, &user_in_db.hashed_password).is_err() {
        return Ok(None);
    }

    Ok(Some(user_in_db))
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::Pagination;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use common::input::{validate_title, validate_username};
use common::schemas::{Item, ItemCreate, User, UserAuth, UserCreate};
use common::types::*;
use email_address::EmailAddress;
use entity::item;
use password_auth::generate_hash;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, LoaderTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<UserCreate>, JsonRejection>,
) -> WebResult<Json<User>> {
    let Json(body) = body?;

    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if let Err(e) = validate_username(&body.username) {
        return Err(WebError::invalid_username(e));
    }

    if !EmailAddress::is_valid(&body.email) {
        return Err(WebError::invalid_email());
    }

    if body.password.is_empty() {
        return Err(WebError::UnprocessableEntity(
            "Password cannot be empty".to_string(),
        ));
    }

    let existing_user = EUser::find()
        .filter(
            Condition::any()
                .add(CUser::Username.eq(body.username.clone()))
                .add(CUser::Email.eq(body.email.clone())),
        )
        .one(&state.db)
        .await?;

    if let Some(existing_user) = existing_user {
        return Err(if existing_user.email == body.email {
            WebError::already_exists("Email")
        } else {
            WebError::already_exists("Username")
        });
    }

    let user = AUser {
        email: Set(body.email),
        username: Set(body.username),
        hashed_password: Set(generate_hash(body.password)),
        is_active: Set(true),
        ..Default::default()
    };

    let user = user
        .insert(&state.db)
        .await
        .map_err(|e| WebError::from_insert(e, "User"))?;

    tracing::info!(user_id = user.id, username = %user.username, "Registered user");

    Ok(Json(User::from(user)))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> WebResult<Json<Vec<User>>> {
    let Query(pagination) = pagination?;

    let users = EUser::find()
        .order_by_asc(CUser::Id)
        .offset(pagination.skip)
        .limit(pagination.limit())
        .all(&state.db)
        .await?;

    let items = users.load_many(item::Entity, &state.db).await?;

    let users = users
        .into_iter()
        .zip(items)
        .map(|(user, items)| User::from((user, items)))
        .collect::<Vec<User>>();

    Ok(Json(users))
}

pub async fn get_user(
    state: State<Arc<ServerState>>,
    user_id: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<User>> {
    let Path(user_id) = user_id?;

    let user = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let items = user.find_related(item::Entity).all(&state.db).await?;

    Ok(Json(User::from((user, items))))
}

pub async fn get_me(Extension(user): Extension<MUser>) -> WebResult<Json<UserAuth>> {
    Ok(Json(UserAuth::from(user)))
}

pub async fn post_items(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    user_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<ItemCreate>, JsonRejection>,
) -> WebResult<Json<Item>> {
    let Path(user_id) = user_id?;
    let Json(body) = body?;

    let owner = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    if owner.id != user.id {
        return Err(WebError::Forbidden(
            "Cannot create items for another user".to_string(),
        ));
    }

    if let Err(e) = validate_title(&body.title) {
        return Err(WebError::invalid_title(e));
    }

    let item = AItem {
        title: Set(body.title),
        description: Set(body.description),
        owner_id: Set(owner.id),
        ..Default::default()
    };

    let item = item.insert(&state.db).await?;

    tracing::debug!(item_id = item.id, owner_id = item.owner_id, "Created item");

    Ok(Json(Item::from(item)))
}

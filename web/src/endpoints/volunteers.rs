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
use common::schemas::{Volunteer, VolunteerCreate, VolunteerList};
use common::types::*;
use email_address::EmailAddress;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;

pub async fn get(
    state: State<Arc<ServerState>>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> WebResult<Json<Vec<VolunteerList>>> {
    let Query(pagination) = pagination?;

    let volunteers = EVolunteer::find()
        .order_by_asc(CVolunteer::Id)
        .offset(pagination.skip)
        .limit(pagination.limit())
        .all(&state.db)
        .await?;

    Ok(Json(
        volunteers.into_iter().map(VolunteerList::from).collect(),
    ))
}

pub async fn get_volunteer(
    state: State<Arc<ServerState>>,
    volunteer_id: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<Volunteer>> {
    let Path(volunteer_id) = volunteer_id?;

    let volunteer = EVolunteer::find_by_id(volunteer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Volunteer"))?;

    Ok(Json(Volunteer::from(volunteer)))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<VolunteerCreate>, JsonRejection>,
) -> WebResult<Json<Volunteer>> {
    let Json(body) = body?;

    if body.name.trim().is_empty() {
        return Err(WebError::BadRequest("Name cannot be empty".to_string()));
    }

    if !EmailAddress::is_valid(&body.email) {
        return Err(WebError::invalid_email());
    }

    let job_title = EJobTitle::find_by_id(body.jobtitle_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Job title"))?;

    if !job_title.is_active {
        return Err(WebError::BadRequest(format!(
            "Job title {} is not active",
            job_title.title
        )));
    }

    let existing_volunteer = EVolunteer::find()
        .filter(CVolunteer::Email.eq(body.email.clone()))
        .one(&state.db)
        .await?;

    if existing_volunteer.is_some() {
        return Err(WebError::already_exists("Volunteer"));
    }

    let volunteer = AVolunteer {
        name: Set(body.name),
        linkedin: Set(body.linkedin),
        email: Set(body.email),
        is_active: Set(body.is_active),
        jobtitle_id: Set(job_title.id),
        ..Default::default()
    };

    let volunteer = volunteer
        .insert(&state.db)
        .await
        .map_err(|e| WebError::from_insert(e, "Volunteer"))?;

    tracing::info!(
        volunteer_id = volunteer.id,
        jobtitle_id = volunteer.jobtitle_id,
        created_by = user.id,
        "Registered volunteer"
    );

    Ok(Json(Volunteer::from(volunteer)))
}

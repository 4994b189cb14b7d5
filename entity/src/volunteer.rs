/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "volunteer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub linkedin: String,
    #[sea_orm(unique)]
    pub email: String,
    pub is_active: Option<bool>,
    pub jobtitle_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_title::Entity",
        from = "Column::JobtitleId",
        to = "super::job_title::Column::Id"
    )]
    JobTitle,
}

impl Related<super::job_title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobTitle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

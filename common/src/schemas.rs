/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Request and response bodies of the JSON API.
//!
//! Request bodies reject missing required fields and values of the wrong JSON
//! type. Optional fields fall back to their documented defaults. Response
//! bodies can be built directly from the database models via `From`.

use super::consts::TOKEN_TYPE;
use super::input::mask_email;
use super::types::*;
use serde::{Deserialize, Serialize};

fn default_true() -> Option<bool> {
    Some(true)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub id: i32,
    pub owner_id: i32,
}

impl From<MItem> for Item {
    fn from(item: MItem) -> Self {
        Item {
            title: item.title,
            description: item.description,
            id: item.id,
            owner_id: item.owner_id,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct UserCreate {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub email: String,
    pub id: i32,
    pub is_active: bool,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl From<(MUser, Vec<MItem>)> for User {
    fn from((user, items): (MUser, Vec<MItem>)) -> Self {
        User {
            email: user.email,
            id: user.id,
            is_active: user.is_active,
            items: items.into_iter().map(Item::from).collect(),
        }
    }
}

impl From<MUser> for User {
    fn from(user: MUser) -> Self {
        User::from((user, Vec::new()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobTitle {
    pub id: i32,
    pub title: String,
    pub is_active: bool,
}

impl From<MJobTitle> for JobTitle {
    fn from(job_title: MJobTitle) -> Self {
        JobTitle {
            id: job_title.id,
            title: job_title.title,
            is_active: job_title.is_active,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VolunteerCreate {
    pub name: String,
    pub linkedin: String,
    pub email: String,
    /// Omitted means active; an explicit `null` is kept as unknown.
    #[serde(default = "default_true")]
    pub is_active: Option<bool>,
    pub jobtitle_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Volunteer {
    pub name: String,
    pub linkedin: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    pub id: i32,
    pub jobtitle_id: i32,
    #[serde(default)]
    pub masked_email: Option<String>,
}

/// Row of the volunteer listing. Same fields as [`Volunteer`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VolunteerList {
    pub name: String,
    pub linkedin: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    pub id: i32,
    pub jobtitle_id: i32,
    #[serde(default)]
    pub masked_email: Option<String>,
}

impl From<MVolunteer> for Volunteer {
    fn from(volunteer: MVolunteer) -> Self {
        Volunteer {
            masked_email: mask_email(&volunteer.email),
            name: volunteer.name,
            linkedin: volunteer.linkedin,
            is_active: volunteer.is_active,
            id: volunteer.id,
            jobtitle_id: volunteer.jobtitle_id,
        }
    }
}

impl From<MVolunteer> for VolunteerList {
    fn from(volunteer: MVolunteer) -> Self {
        Volunteer::from(volunteer).into()
    }
}

impl From<Volunteer> for VolunteerList {
    fn from(volunteer: Volunteer) -> Self {
        VolunteerList {
            name: volunteer.name,
            linkedin: volunteer.linkedin,
            is_active: volunteer.is_active,
            id: volunteer.id,
            jobtitle_id: volunteer.jobtitle_id,
            masked_email: volunteer.masked_email,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    pub fn bearer(access_token: String) -> Self {
        Token {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TokenData {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserAuth {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct UserInDB {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    pub hashed_password: String,
}

impl std::fmt::Debug for UserInDB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInDB")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("is_active", &self.is_active)
            .field("hashed_password", &"[redacted]")
            .finish()
    }
}

impl From<MUser> for UserInDB {
    fn from(user: MUser) -> Self {
        UserInDB {
            username: user.username,
            email: user.email,
            is_active: Some(user.is_active),
            hashed_password: user.hashed_password,
        }
    }
}

impl From<UserInDB> for UserAuth {
    fn from(user: UserInDB) -> Self {
        UserAuth {
            username: user.username,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

impl From<MUser> for UserAuth {
    fn from(user: MUser) -> Self {
        UserInDB::from(user).into()
    }
}

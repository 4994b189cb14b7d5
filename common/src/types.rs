/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Volunteer Hub", display_name = "Volunteer Hub", bin_name = "volunteer-hub", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "VOLUNTEER_HUB_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "VOLUNTEER_HUB_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "VOLUNTEER_HUB_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "VOLUNTEER_HUB_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "VOLUNTEER_HUB_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "VOLUNTEER_HUB_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "VOLUNTEER_HUB_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "VOLUNTEER_HUB_ACCESS_TOKEN_EXPIRE_MINUTES", value_parser = greater_than_zero::<i64>, default_value = "30")]
    pub access_token_expire_minutes: i64,
    #[arg(long, env = "VOLUNTEER_HUB_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EItem = item::Entity;
pub type EJobTitle = job_title::Entity;
pub type EUser = user::Entity;
pub type EVolunteer = volunteer::Entity;

pub type MItem = item::Model;
pub type MJobTitle = job_title::Model;
pub type MUser = user::Model;
pub type MVolunteer = volunteer::Model;

pub type AItem = item::ActiveModel;
pub type AJobTitle = job_title::ActiveModel;
pub type AUser = user::ActiveModel;
pub type AVolunteer = volunteer::ActiveModel;

pub type CItem = item::Column;
pub type CJobTitle = job_title::Column;
pub type CUser = user::Column;
pub type CVolunteer = volunteer::Column;

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use common::types::*;
use entity::*;
use password_auth::generate_hash;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::{Arc, LazyLock};

pub const TEST_PASSWORD: &str = "correct horse battery staple";

static TEST_PASSWORD_HASH: LazyLock<String> = LazyLock::new(|| generate_hash(TEST_PASSWORD));

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        access_token_expire_minutes: 30,
        disable_registration: false,
    }
}

pub fn create_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
        jwt_secret: "test-jwt-secret".to_string(),
    })
}

pub fn create_mock_state() -> Arc<ServerState> {
    create_state(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

pub fn create_server(state: Arc<ServerState>) -> TestServer {
    TestServer::new(web::create_router(state)).unwrap()
}

pub fn test_user(id: i32, username: &str) -> user::Model {
    user::Model {
        id,
        email: format!("{}@example.com", username),
        username: username.to_string(),
        hashed_password: TEST_PASSWORD_HASH.clone(),
        is_active: true,
    }
}

pub fn test_item(id: i32, owner_id: i32, title: &str) -> item::Model {
    item::Model {
        id,
        title: title.to_string(),
        description: None,
        owner_id,
    }
}

pub fn test_job_title(id: i32, title: &str) -> job_title::Model {
    job_title::Model {
        id,
        title: title.to_string(),
        is_active: true,
    }
}

pub fn test_volunteer(id: i32, jobtitle_id: i32) -> volunteer::Model {
    volunteer::Model {
        id,
        name: "Vera".to_string(),
        linkedin: "https://linkedin.com/in/vera".to_string(),
        email: "vera@example.com".to_string(),
        is_active: Some(true),
        jobtitle_id,
    }
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post};
use axum::{Router, middleware};
use common::types::ServerState;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

fn cors_layer(serve_url: &str) -> CorsLayer {
    let origin = match serve_url.trim_end_matches('/').parse::<HeaderValue>() {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(e) => {
            tracing::warn!(error = %e, serve_url, "Invalid serve url, CORS disabled");
            AllowOrigin::list(Vec::new())
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/users", get(endpoints::users::get))
        .route("/api/users/me", get(endpoints::users::get_me))
        .route("/api/users/{user}", get(endpoints::users::get_user))
        .route("/api/users/{user}/items", post(endpoints::users::post_items))
        .route("/api/items", get(endpoints::items::get))
        .route("/api/volunteers", post(endpoints::volunteers::post))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            crate::authorization::authorize,
        ))
        .route("/api/users", post(endpoints::users::post))
        .route("/api/token", post(endpoints::auth::post_token))
        .route("/api/jobtitles", get(endpoints::job_titles::get))
        .route("/api/volunteers", get(endpoints::volunteers::get))
        .route(
            "/api/volunteers/{volunteer}",
            get(endpoints::volunteers::get_volunteer),
        )
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(cors_layer(&state.cli.serve_url))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}

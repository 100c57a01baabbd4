// ABOUTME: Root route serving the welcome page
// ABOUTME: Confirms the web layer is wired with a small HTML document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

use crate::constants::{paths, service_names};
use axum::{response::Html, routing::get, Router};

/// Welcome page routes
pub struct RootRoutes;

impl RootRoutes {
    /// Create the root route
    pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
        Router::new().route(paths::ROOT, get(Self::handle_index))
    }

    async fn handle_index() -> Html<String> {
        Html(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head><meta charset=\"utf-8\"><title>{name}</title></head>\n\
             <body><h1>Welcome to {name}</h1>\
             <p>Health: <a href=\"{health}\">{health}</a></p></body>\n\
             </html>\n",
            name = service_names::DISPLAY_NAME,
            health = paths::HEALTH,
        ))
    }
}

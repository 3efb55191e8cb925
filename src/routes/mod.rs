//! HTTP handlers.
//!
//! Public pages, feeds and the estimate form render HTML through
//! `render::document`; the admin API speaks JSON.

pub mod admin;
pub mod admin_api;
pub mod auth;
pub mod health;
pub mod leads;
pub mod pages;
pub mod rss;
pub mod sitemap;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::config::SiteConfig;
use crate::render::{self, public, Page};

/// Wrap a page in the document shell with a 200.
pub fn render_page(config: &SiteConfig, page: Page) -> Response {
    render_status(config, StatusCode::OK, page)
}

pub fn render_status(config: &SiteConfig, status: StatusCode, page: Page) -> Response {
    (status, Html(render::document(config, &page))).into_response()
}

pub fn not_found(config: &SiteConfig) -> Response {
    render_status(config, StatusCode::NOT_FOUND, public::not_found())
}

//! Admin back-office screens. Every handler except the login page requires
//! an [`AdminPageSession`]; store failures render zero states.

use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;
use uuid::Uuid;

use super::auth::AdminPageSession;
use super::{not_found, render_page};
use crate::content::model::{LeadStats, LeadStatus};
use crate::content::{or_default, with_fallback};
use crate::render::admin::{self, DashboardStats};
use crate::store::{ContentStore, StoreResult};
use crate::AppState;

const RECENT_LEADS: i64 = 5;
const LEADS_PAGE_LIMIT: i64 = 100;

/// Dashboard reads, issued together. Any failure fails the whole set.
async fn dashboard_stats(store: &dyn ContentStore) -> StoreResult<DashboardStats> {
    let (services, cities, published_posts, leads, new_leads, recent_leads) = tokio::try_join!(
        store.count_services(),
        store.count_cities(),
        store.count_published_posts(),
        store.count_leads(None),
        store.count_leads(Some(LeadStatus::New)),
        store.leads(None, RECENT_LEADS),
    )?;
    Ok(DashboardStats {
        services,
        cities,
        published_posts,
        leads,
        new_leads,
        recent_leads,
    })
}

/// Per-status counts, issued together. Any failure fails the whole set.
async fn lead_stats(store: &dyn ContentStore) -> StoreResult<LeadStats> {
    let (new, contacted, qualified, converted, total) = tokio::try_join!(
        store.count_leads(Some(LeadStatus::New)),
        store.count_leads(Some(LeadStatus::Contacted)),
        store.count_leads(Some(LeadStatus::Qualified)),
        store.count_leads(Some(LeadStatus::Converted)),
        store.count_leads(None),
    )?;
    Ok(LeadStats {
        new,
        contacted,
        qualified,
        converted,
        total,
    })
}

/// GET /admin/login
pub async fn login_page(State(state): State<AppState>) -> Response {
    render_page(&state.config, admin::login_page())
}

/// GET /admin
pub async fn dashboard(_session: AdminPageSession, State(state): State<AppState>) -> Response {
    let stats = with_fallback(dashboard_stats(state.store.as_ref()), DashboardStats::default()).await;
    render_page(&state.config, admin::dashboard(&stats))
}

/// GET /admin/services
pub async fn services(_session: AdminPageSession, State(state): State<AppState>) -> Response {
    let services = or_default(state.store.all_services()).await;
    render_page(&state.config, admin::services_list(&services))
}

/// GET /admin/services/new
pub async fn new_service(_session: AdminPageSession, State(state): State<AppState>) -> Response {
    render_page(&state.config, admin::service_form(None))
}

/// GET /admin/services/{id}/edit
pub async fn edit_service(
    _session: AdminPageSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    match with_fallback(state.store.service_by_id(id), None).await {
        Some(service) => render_page(&state.config, admin::service_form(Some(&service))),
        None => not_found(&state.config),
    }
}

/// GET /admin/cities
pub async fn cities(_session: AdminPageSession, State(state): State<AppState>) -> Response {
    let cities = or_default(state.store.all_cities()).await;
    render_page(&state.config, admin::cities_list(&cities))
}

/// GET /admin/cities/new
pub async fn new_city(_session: AdminPageSession, State(state): State<AppState>) -> Response {
    render_page(&state.config, admin::city_form(None))
}

/// GET /admin/cities/{id}/edit
pub async fn edit_city(
    _session: AdminPageSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    match with_fallback(state.store.city_by_id(id), None).await {
        Some(city) => render_page(&state.config, admin::city_form(Some(&city))),
        None => not_found(&state.config),
    }
}

/// GET /admin/blog
pub async fn posts(_session: AdminPageSession, State(state): State<AppState>) -> Response {
    let posts = or_default(state.store.all_posts()).await;
    render_page(&state.config, admin::posts_list(&posts))
}

/// GET /admin/blog/new
pub async fn new_post(_session: AdminPageSession, State(state): State<AppState>) -> Response {
    let cities = or_default(state.store.all_cities()).await;
    render_page(&state.config, admin::post_form(None, &cities))
}

/// GET /admin/blog/{id}/edit
pub async fn edit_post(
    _session: AdminPageSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    let (post, cities) = tokio::join!(
        with_fallback(state.store.post_by_id(id), None),
        or_default(state.store.all_cities()),
    );
    match post {
        Some(post) => render_page(&state.config, admin::post_form(Some(&post), &cities)),
        None => not_found(&state.config),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LeadsQuery {
    pub status: Option<String>,
}

/// GET /admin/leads[?status=]
pub async fn leads(
    _session: AdminPageSession,
    State(state): State<AppState>,
    Query(query): Query<LeadsQuery>,
) -> Response {
    // Unknown filters show every lead rather than an error.
    let filter = query
        .status
        .as_deref()
        .and_then(|s| s.parse::<LeadStatus>().ok());
    let store = state.store.as_ref();
    let (leads, stats) = tokio::join!(
        or_default(store.leads(filter, LEADS_PAGE_LIMIT)),
        with_fallback(lead_stats(store), LeadStats::default()),
    );
    render_page(&state.config, admin::leads_page(&leads, &stats, filter))
}

//! Admin JSON API.
//!
//! Payloads arrive in the shape the admin forms post: camelCase fields,
//! structured fields as JSON-encoded text (or already parsed arrays), blank
//! optional strings. They are normalised here before reaching the store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;

use super::auth::AdminSession;
use crate::content::codec::{Faq, ProcessStep, StructuredText};
use crate::content::model::{BlogPost, BlogPostInput, CityInput, LeadStatus, ServiceInput};
use crate::error::ApiError;
use crate::AppState;

lazy_static::lazy_static! {
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

// ============================================================================
// Normalisation
// ============================================================================

/// Lower-case, hyphenate whitespace runs, then validate.
pub fn normalize_slug(raw: &str) -> Result<String, ApiError> {
    let slug = WHITESPACE
        .replace_all(raw.trim(), "-")
        .to_lowercase();
    if SLUG_REGEX.is_match(&slug) {
        Ok(slug)
    } else {
        Err(ApiError::bad_request(
            "Slug may contain only lowercase letters, digits and single hyphens",
        ))
    }
}

pub fn normalize_state(raw: &str) -> Result<String, ApiError> {
    let state = raw.trim().to_uppercase();
    if state.len() == 2 && state.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(state)
    } else {
        Err(ApiError::bad_request("State must be a two-letter code"))
    }
}

fn required(value: String, field: &str) -> Result<String, ApiError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(ApiError::bad_request(format!("{} is required", field)))
    } else {
        Ok(value)
    }
}

/// Blank optional strings are stored as null.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    #[serde(default)]
    pub benefits: StructuredText<String>,
    #[serde(default)]
    pub process: StructuredText<ProcessStep>,
    #[serde(default)]
    pub faqs: StructuredText<Faq>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "enableFAQSchema")]
    pub enable_faq_schema: bool,
    #[serde(default)]
    pub enable_service_schema: bool,
}

impl ServicePayload {
    pub fn into_input(self) -> Result<ServiceInput, ApiError> {
        Ok(ServiceInput {
            name: required(self.name, "Name")?,
            slug: normalize_slug(&self.slug)?,
            short_description: self.short_description.trim().to_string(),
            description: self.description,
            meta_title: optional(self.meta_title),
            meta_description: optional(self.meta_description),
            keywords: optional(self.keywords),
            benefits: self.benefits.resolve(),
            process: self.process.resolve(),
            faqs: self.faqs.resolve(),
            published: self.published,
            featured: self.featured,
            enable_faq_schema: self.enable_faq_schema,
            enable_service_schema: self.enable_service_schema,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub slug: String,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub neighborhoods: StructuredText<String>,
    pub description: Option<String>,
    pub local_content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl CityPayload {
    pub fn into_input(self) -> Result<CityInput, ApiError> {
        Ok(CityInput {
            name: required(self.name, "Name")?,
            state: normalize_state(&self.state)?,
            slug: normalize_slug(&self.slug)?,
            zip_code: optional(self.zip_code),
            latitude: self.latitude,
            longitude: self.longitude,
            neighborhoods: self.neighborhoods.resolve(),
            description: optional(self.description),
            local_content: optional(self.local_content),
            meta_title: optional(self.meta_title),
            meta_description: optional(self.meta_description),
            keywords: optional(self.keywords),
            published: self.published,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: StructuredText<String>,
    pub city_id: Option<Uuid>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl BlogPostPayload {
    pub fn into_input(self) -> Result<BlogPostInput, ApiError> {
        Ok(BlogPostInput {
            title: required(self.title, "Title")?,
            slug: normalize_slug(&self.slug)?,
            excerpt: self.excerpt.trim().to_string(),
            content: self.content,
            featured_image: optional(self.featured_image),
            category: optional(self.category),
            tags: self.tags.resolve(),
            city_id: self.city_id,
            meta_title: optional(self.meta_title),
            meta_description: optional(self.meta_description),
            keywords: optional(self.keywords),
            published: self.published,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LeadStatusPayload {
    pub status: String,
}

/// Publication timestamp after a save: first publish stamps now, staying
/// published keeps the stamp, unpublishing clears it.
pub fn published_at_after_save(
    existing: Option<&BlogPost>,
    published: bool,
) -> Option<chrono::DateTime<Utc>> {
    if !published {
        return None;
    }
    existing
        .filter(|p| p.published)
        .and_then(|p| p.published_at)
        .or_else(|| Some(Utc::now()))
}

// ============================================================================
// Services
// ============================================================================

/// GET /api/admin/services
pub async fn list_services(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.all_services().await?))
}

/// POST /api/admin/services
pub async fn create_service(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let service = state.store.insert_service(payload.into_input()?).await?;
    tracing::info!(id = %service.id, slug = %service.slug, "service created");
    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/admin/services/{id}
pub async fn update_service(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ServicePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let service = state
        .store
        .update_service(id, payload.into_input()?)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = %service.id, slug = %service.slug, "service updated");
    Ok(Json(service))
}

/// DELETE /api/admin/services/{id}
pub async fn delete_service(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_service(id).await? {
        tracing::info!(id = %id, "service deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

// ============================================================================
// Cities
// ============================================================================

/// GET /api/admin/cities
pub async fn list_cities(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.all_cities().await?))
}

/// POST /api/admin/cities
pub async fn create_city(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<CityPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let city = state.store.insert_city(payload.into_input()?).await?;
    tracing::info!(id = %city.id, slug = %city.slug, "city created");
    Ok((StatusCode::CREATED, Json(city)))
}

/// PUT /api/admin/cities/{id}
pub async fn update_city(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CityPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let city = state
        .store
        .update_city(id, payload.into_input()?)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = %city.id, slug = %city.slug, "city updated");
    Ok(Json(city))
}

/// DELETE /api/admin/cities/{id}
pub async fn delete_city(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_city(id).await? {
        tracing::info!(id = %id, "city deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

// ============================================================================
// Blog posts
// ============================================================================

/// GET /api/admin/blog
pub async fn list_posts(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.all_posts().await?))
}

/// POST /api/admin/blog
pub async fn create_post(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<BlogPostPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let published_at = published_at_after_save(None, input.published);
    let post = state.store.insert_post(input, published_at).await?;
    tracing::info!(id = %post.id, slug = %post.slug, "blog post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/admin/blog/{id}
pub async fn update_post(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlogPostPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let existing = state.store.post_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let published_at = published_at_after_save(Some(&existing), input.published);
    let post = state
        .store
        .update_post(id, input, published_at)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = %post.id, slug = %post.slug, published = post.published, "blog post updated");
    Ok(Json(post))
}

/// DELETE /api/admin/blog/{id}
pub async fn delete_post(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_post(id).await? {
        tracing::info!(id = %id, "blog post deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

// ============================================================================
// Leads
// ============================================================================

/// PUT /api/admin/leads/{id}
pub async fn update_lead(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LeadStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let status: LeadStatus = payload.status.parse().map_err(ApiError::BadRequest)?;
    let lead = state
        .store
        .update_lead_status(id, status)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = %lead.id, status = %lead.status, "lead status updated");
    Ok(Json(lead))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::routes::auth::create_access_token;
    use crate::routes::test_support::send;
    use crate::store::memory::{sample_lead, sample_post, MemoryStore};
    use axum::body::Body;
    use axum::http::Request;
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn app_with(store: Arc<MemoryStore>) -> Router {
        crate::create_app(AppState::new(store, SiteConfig::default()))
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let token = create_access_token(&SiteConfig::default().jwt_secret, "admin@example.com").unwrap();
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("authorization", format!("Bearer {}", token))
            .header("content-type", "application/json");
        match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    fn service_body(slug: &str) -> Value {
        json!({
            "name": "Tile Installation",
            "slug": slug,
            "shortDescription": "Tile",
            "description": "All about tile.",
            "metaTitle": "",
            "benefits": "[\"Durable\",\"  \",\"Waterproof\"]",
            "process": "[{\"step\":1,\"title\":\"Measure\",\"description\":\"We measure\"}]",
            "faqs": "not json",
            "published": true,
            "enableFAQSchema": false,
            "enableServiceSchema": true
        })
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("  Hardwood   Floors ").unwrap(), "hardwood-floors");
        assert_eq!(normalize_slug("epoxy-flooring").unwrap(), "epoxy-flooring");
        assert!(normalize_slug("bad--slug").is_err());
        assert!(normalize_slug("no/slashes").is_err());
        assert!(normalize_slug("").is_err());
    }

    #[test]
    fn test_normalize_state() {
        assert_eq!(normalize_state(" co ").unwrap(), "CO");
        assert!(normalize_state("Colorado").is_err());
    }

    #[test]
    fn test_published_at_transitions() {
        let mut post = sample_post("p", true);
        let stamp = post.published_at;

        assert!(published_at_after_save(None, true).is_some());
        assert!(published_at_after_save(None, false).is_none());
        assert_eq!(published_at_after_save(Some(&post), true), stamp);
        assert!(published_at_after_save(Some(&post), false).is_none());

        post.published = false;
        post.published_at = None;
        assert!(published_at_after_save(Some(&post), true).is_some());
    }

    #[tokio::test]
    async fn test_create_service_normalises_payload() {
        let store = Arc::new(MemoryStore::new());
        let (status, _) = send(
            app_with(store.clone()),
            request("POST", "/api/admin/services", Some(service_body("Tile Installation"))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let services = store.services.lock().await;
        let service = &services[0];
        assert_eq!(service.slug, "tile-installation");
        assert_eq!(service.meta_title, None);
        assert_eq!(service.benefits, vec!["Durable", "Waterproof"]);
        assert_eq!(service.process.len(), 1);
        assert!(service.faqs.is_empty());
        assert!(!service.enable_faq_schema);
    }

    #[tokio::test]
    async fn test_multiline_faq_survives_edit_and_save() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store.clone());
        let (_, body) = send(app.clone(), request("POST", "/api/admin/services", Some(service_body("tile")))).await;
        let created: Value = serde_json::from_str(&body).unwrap();
        let uri = format!("/api/admin/services/{}", created["id"].as_str().unwrap());

        let faqs = json!([{ "question": "Tile | stone?", "answer": "Yes.\nBoth, with sealing." }]);
        let mut update = service_body("tile");
        update["faqs"] = Value::String(faqs.to_string());
        let (status, _) = send(app, request("PUT", &uri, Some(update))).await;
        assert_eq!(status, StatusCode::OK);

        let services = store.services.lock().await;
        assert_eq!(services[0].faqs.len(), 1);
        assert_eq!(services[0].faqs[0].question, "Tile | stone?");
        assert_eq!(services[0].faqs[0].answer, "Yes.\nBoth, with sealing.");
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_conflict() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store);
        let (status, _) = send(app.clone(), request("POST", "/api/admin/services", Some(service_body("tile")))).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = send(app, request("POST", "/api/admin/services", Some(service_body("tile")))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.contains("Slug already exists"));
    }

    #[tokio::test]
    async fn test_invalid_slug_is_bad_request() {
        let (status, _) = send(
            app_with(Arc::new(MemoryStore::new())),
            request("POST", "/api/admin/services", Some(service_body("a--b"))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_city_uppercases_state_and_accepts_parsed_arrays() {
        let store = Arc::new(MemoryStore::new());
        let body = json!({
            "name": "Golden",
            "state": "co",
            "slug": "golden",
            "zipCode": "",
            "latitude": 39.75,
            "longitude": null,
            "neighborhoods": ["Downtown", ""],
            "published": true
        });
        let (status, _) = send(app_with(store.clone()), request("POST", "/api/admin/cities", Some(body))).await;
        assert_eq!(status, StatusCode::CREATED);

        let cities = store.cities.lock().await;
        assert_eq!(cities[0].state, "CO");
        assert_eq!(cities[0].zip_code, None);
        assert_eq!(cities[0].neighborhoods, vec!["Downtown"]);
        assert!(cities[0].coordinates().is_none());
    }

    #[tokio::test]
    async fn test_unpublishing_post_clears_published_at() {
        let post = sample_post("stain", true);
        let id = post.id;
        let store = Arc::new(MemoryStore::new().with_post(post).await);
        let body = json!({
            "title": "Choosing a Stain Color",
            "slug": "stain",
            "excerpt": "How to pick",
            "content": "Text",
            "tags": "[\"stain\",\"oak\"]",
            "cityId": null,
            "published": false
        });
        let (status, _) = send(
            app_with(store.clone()),
            request("PUT", &format!("/api/admin/blog/{}", id), Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let posts = store.posts.lock().await;
        assert!(!posts[0].published);
        assert_eq!(posts[0].published_at, None);
        assert_eq!(posts[0].tags, vec!["stain", "oak"]);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let body = json!({ "title": "T", "slug": "t", "published": true });
        let (status, _) = send(
            app_with(Arc::new(MemoryStore::new())),
            request("PUT", &format!("/api/admin/blog/{}", Uuid::new_v4()), Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_service_then_missing() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store.clone());
        let (_, body) = send(app.clone(), request("POST", "/api/admin/services", Some(service_body("tile")))).await;
        let created: Value = serde_json::from_str(&body).unwrap();
        let uri = format!("/api/admin/services/{}", created["id"].as_str().unwrap());

        let (status, _) = send(app.clone(), request("DELETE", &uri, None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(app, request("DELETE", &uri, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lead_status_accepts_any_transition() {
        let lead = sample_lead("Ana", LeadStatus::Converted);
        let id = lead.id;
        let store = Arc::new(MemoryStore::new().with_lead(lead).await);
        let app = app_with(store.clone());

        let uri = format!("/api/admin/leads/{}", id);
        let (status, _) = send(app.clone(), request("PUT", &uri, Some(json!({ "status": "NEW" })))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.leads.lock().await[0].status, LeadStatus::New);

        let (status, _) = send(app, request("PUT", &uri, Some(json!({ "status": "ARCHIVED" })))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_down_is_service_unavailable() {
        let (status, _) = send(
            app_with(Arc::new(MemoryStore::offline())),
            request("GET", "/api/admin/cities", None),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}

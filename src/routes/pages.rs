//! Public page handlers.
//!
//! Every store read goes through the fallback boundary in `content::fallback`:
//! listings degrade to static data or an empty list, detail routes turn both
//! "missing" and "unreachable" into the 404 page.

use axum::{
    extract::{Path, State},
    response::Response,
};

use super::{not_found, render_page};
use crate::content::defaults::{
    fallback_city_by_slug, fallback_service_by_slug, EPOXY_SERVICE_SLUG, FALLBACK_CITIES,
    MENU_SERVICES,
};
use crate::content::{lookup_published, or_default, with_fallback, Lookup};
use crate::render::public::{self, ServiceCard};
use crate::store::ContentStore;
use crate::AppState;

const CITY_LANDING_PREFIX: &str = "flooring-installer-";
const EPOXY_LANDING_PREFIX: &str = "epoxy-flooring-";
const CITY_LANDING_SERVICES: i64 = 8;
const BLOG_INDEX_LIMIT: i64 = 20;

fn menu_cards() -> Vec<ServiceCard> {
    MENU_SERVICES.iter().map(ServiceCard::from).collect()
}

/// Published services as cards, or the static menu when the store is down.
pub(crate) async fn service_cards(store: &dyn ContentStore) -> Vec<ServiceCard> {
    let read = async {
        store
            .published_services(None)
            .await
            .map(|services| services.iter().map(ServiceCard::from).collect())
    };
    with_fallback(read, menu_cards()).await
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Response {
    render_page(&state.config, public::home(&state.config))
}

/// GET /services
pub async fn services_index(State(state): State<AppState>) -> Response {
    let cards = service_cards(state.store.as_ref()).await;
    render_page(&state.config, public::services_index(&cards))
}

/// GET /services/{slug}
pub async fn service_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let service = match lookup_published(state.store.service_by_slug(&slug)).await.found() {
        Some(service) => service,
        None => return not_found(&state.config),
    };
    let cards = service_cards(state.store.as_ref()).await;
    render_page(
        &state.config,
        public::service_detail(&state.config, &service, &cards),
    )
}

/// GET /service-areas
pub async fn service_areas(State(state): State<AppState>) -> Response {
    let cities = with_fallback(state.store.published_cities(), FALLBACK_CITIES.to_vec()).await;
    render_page(&state.config, public::service_areas(&cities))
}

/// GET /service-areas/{slug}
pub async fn city_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match lookup_published(state.store.city_by_slug(&slug)).await.found() {
        Some(city) => render_page(&state.config, public::city_detail(&city)),
        None => not_found(&state.config),
    }
}

/// GET /{page}: the city and epoxy landing pages share the root namespace.
pub async fn landing(State(state): State<AppState>, Path(page): Path<String>) -> Response {
    if let Some(city) = page.strip_prefix(EPOXY_LANDING_PREFIX) {
        return epoxy_landing(&state, city).await;
    }
    if let Some(city) = page.strip_prefix(CITY_LANDING_PREFIX) {
        return city_landing(&state, city).await;
    }
    not_found(&state.config)
}

async fn city_landing(state: &AppState, slug: &str) -> Response {
    let city = match lookup_published(state.store.city_by_slug(slug)).await.found() {
        Some(city) => city,
        None => return not_found(&state.config),
    };
    let services = or_default(state.store.published_services(Some(CITY_LANDING_SERVICES))).await;
    render_page(
        &state.config,
        public::city_landing(&state.config, &city, &services),
    )
}

async fn epoxy_landing(state: &AppState, slug: &str) -> Response {
    let city = match lookup_published(state.store.city_by_slug(slug)).await {
        Lookup::Found(city) => Some(city),
        Lookup::NotFound | Lookup::Unavailable => fallback_city_by_slug(slug),
    };
    let service = match lookup_published(state.store.service_by_slug(EPOXY_SERVICE_SLUG)).await {
        Lookup::Found(service) => Some(service),
        Lookup::NotFound | Lookup::Unavailable => fallback_service_by_slug(EPOXY_SERVICE_SLUG),
    };
    match (city, service) {
        (Some(city), Some(service)) => render_page(
            &state.config,
            public::epoxy_landing(&state.config, &city, &service),
        ),
        _ => not_found(&state.config),
    }
}

/// GET /blog
pub async fn blog_index(State(state): State<AppState>) -> Response {
    let posts = or_default(state.store.published_posts(BLOG_INDEX_LIMIT)).await;
    render_page(&state.config, public::blog_index(&posts))
}

/// GET /blog/{slug}
pub async fn blog_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match lookup_published(state.store.post_by_slug(&slug)).await.found() {
        Some(entry) => render_page(&state.config, public::blog_detail(&entry)),
        None => not_found(&state.config),
    }
}

/// Anything no other route matched.
pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found(&state.config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{get, state};
    use crate::store::memory::{sample_city, sample_post, sample_service, MemoryStore};
    use axum::http::StatusCode;

    fn app(store: MemoryStore) -> axum::Router {
        crate::create_app(state(store))
    }

    #[tokio::test]
    async fn test_home_renders_local_business_schema() {
        let (status, body) = get(app(MemoryStore::offline()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("application/ld+json").count(), 1);
        assert!(body.contains("LocalBusiness"));
    }

    #[tokio::test]
    async fn test_services_index_falls_back_to_menu_when_store_down() {
        let (status, body) = get(app(MemoryStore::offline()), "/services").await;
        assert_eq!(status, StatusCode::OK);
        for service in MENU_SERVICES {
            assert!(body.contains(&format!("/services/{}", service.slug)));
        }
    }

    #[tokio::test]
    async fn test_services_index_lists_only_published() {
        let store = MemoryStore::new()
            .with_service(sample_service("tile", true))
            .await
            .with_service(sample_service("secret", false))
            .await;
        let (_, body) = get(app(store), "/services").await;
        assert!(body.contains("/services/tile"));
        assert!(!body.contains("/services/secret"));
    }

    #[tokio::test]
    async fn test_service_detail_found_unpublished_missing_unavailable() {
        let store = MemoryStore::new()
            .with_service(sample_service("tile", true))
            .await
            .with_service(sample_service("secret", false))
            .await;
        let router = app(store);

        let (status, body) = get(router.clone(), "/services/tile").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hardwood Installation"));

        let (status, _) = get(router.clone(), "/services/secret").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(router, "/services/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get(app(MemoryStore::offline()), "/services/tile").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn test_service_areas_falls_back_to_static_cities() {
        let (status, body) = get(app(MemoryStore::offline()), "/service-areas").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/service-areas/denver"));
        assert!(body.contains("/service-areas/highlands-ranch"));
    }

    #[tokio::test]
    async fn test_service_areas_empty_store_shows_zero_state() {
        let (status, body) = get(app(MemoryStore::new()), "/service-areas").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No service areas configured yet."));
    }

    #[tokio::test]
    async fn test_city_detail_hides_unpublished() {
        let store = MemoryStore::new()
            .with_city(sample_city("lakewood", true))
            .await
            .with_city(sample_city("hidden", false))
            .await;
        let router = app(store);
        let (status, body) = get(router.clone(), "/service-areas/lakewood").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Lakewood, CO"));

        let (status, _) = get(router, "/service-areas/hidden").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_city_landing_dispatch() {
        let store = MemoryStore::new()
            .with_city(sample_city("lakewood", true))
            .await
            .with_service(sample_service("tile", true))
            .await;
        let (status, body) = get(app(store), "/flooring-installer-lakewood").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Flooring Installer in Lakewood, CO"));
        assert!(body.contains("GeoCoordinates"));
        assert!(body.contains("Hardwood Installation"));
    }

    #[tokio::test]
    async fn test_city_landing_renders_without_services_when_listing_fails() {
        let store = MemoryStore::new().with_city(sample_city("lakewood", true)).await;
        store.fail("published_services");
        let (status, body) = get(app(store), "/flooring-installer-lakewood").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Flooring Installer in Lakewood, CO"));
    }

    #[tokio::test]
    async fn test_city_landing_unknown_city_is_not_found() {
        let (status, _) = get(app(MemoryStore::new()), "/flooring-installer-atlantis").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_epoxy_landing_uses_static_data_when_store_down() {
        let (status, body) = get(app(MemoryStore::offline()), "/epoxy-flooring-denver").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Epoxy Flooring Installation in Denver, CO"));
        assert!(body.contains("FAQPage"));

        let (status, _) = get(app(MemoryStore::offline()), "/epoxy-flooring-atlantis").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unprefixed_root_page_is_not_found() {
        let (status, body) = get(app(MemoryStore::new()), "/about-us").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));

        let (status, _) = get(app(MemoryStore::new()), "/a/b/c").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blog_index_zero_state_when_store_down() {
        let (status, body) = get(app(MemoryStore::offline()), "/blog").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No blog posts yet. Check back soon!"));
    }

    #[tokio::test]
    async fn test_blog_detail_hides_drafts() {
        let store = MemoryStore::new()
            .with_post(sample_post("stain", true))
            .await
            .with_post(sample_post("draft", false))
            .await;
        let router = app(store);
        let (status, body) = get(router.clone(), "/blog/stain").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Choosing a Stain Color"));

        let (status, _) = get(router, "/blog/draft").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

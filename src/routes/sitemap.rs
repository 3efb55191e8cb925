use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::sitemap;
use crate::AppState;

/// GET /sitemap.xml
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let entries = sitemap::build(state.store.as_ref(), &state.config).await;
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::to_xml(&entries),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{get, state};
    use crate::store::memory::{sample_service, MemoryStore};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_sitemap_served_when_store_down() {
        let (status, body) = get(crate::create_app(state(MemoryStore::offline())), "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<url>").count(), 19);
        assert!(body.contains("<loc>https://example.com/warranty</loc>"));
    }

    #[tokio::test]
    async fn test_sitemap_includes_published_services() {
        let store = MemoryStore::new().with_service(sample_service("tile", true)).await;
        let (_, body) = get(crate::create_app(state(store)), "/sitemap.xml").await;
        assert!(body.contains("<loc>https://example.com/services/tile</loc>"));
    }
}

//! Flooring Site - marketing pages and admin back office

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod logging;
pub mod render;
pub mod routes;
pub mod sitemap;
pub mod store;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer,
};

use config::{SiteConfig, DEFAULT_ADMIN_EMAIL, DEFAULT_JWT_SECRET};
use routes::auth::LoginThrottle;
use store::{ContentStore, UnavailableStore};

/// Request-scoped context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub config: Arc<SiteConfig>,
    pub login_throttle: Arc<LoginThrottle>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, config: SiteConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            login_throttle: Arc::new(LoginThrottle::default()),
        }
    }
}

/// Configure CORS from environment variables.
/// Uses ALLOWED_ORIGINS (comma-separated), else the site URL itself.
pub fn configure_cors(config: &SiteConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = std::env::var("ALLOWED_ORIGINS")
        .ok()
        .map(|s| {
            s.split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect::<Vec<HeaderValue>>()
        })
        .filter(|origins| !origins.is_empty())
        .or_else(|| config.site_url.parse().ok().map(|origin| vec![origin]))
        .unwrap_or_default();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ])
        .allow_credentials(true)
}

/// Create and configure the application router.
pub fn create_app(state: AppState) -> Router {
    let cors = configure_cors(&state.config);

    let admin_api = Router::new()
        .route("/login", post(routes::auth::login))
        .route("/logout", post(routes::auth::logout))
        .route(
            "/services",
            get(routes::admin_api::list_services).post(routes::admin_api::create_service),
        )
        .route(
            "/services/{id}",
            put(routes::admin_api::update_service).delete(routes::admin_api::delete_service),
        )
        .route(
            "/cities",
            get(routes::admin_api::list_cities).post(routes::admin_api::create_city),
        )
        .route(
            "/cities/{id}",
            put(routes::admin_api::update_city).delete(routes::admin_api::delete_city),
        )
        .route(
            "/blog",
            get(routes::admin_api::list_posts).post(routes::admin_api::create_post),
        )
        .route(
            "/blog/{id}",
            put(routes::admin_api::update_post).delete(routes::admin_api::delete_post),
        )
        .route("/leads/{id}", put(routes::admin_api::update_lead));

    let admin = Router::new()
        .route("/", get(routes::admin::dashboard))
        .route("/login", get(routes::admin::login_page))
        .route("/services", get(routes::admin::services))
        .route("/services/new", get(routes::admin::new_service))
        .route("/services/{id}/edit", get(routes::admin::edit_service))
        .route("/cities", get(routes::admin::cities))
        .route("/cities/new", get(routes::admin::new_city))
        .route("/cities/{id}/edit", get(routes::admin::edit_city))
        .route("/blog", get(routes::admin::posts))
        .route("/blog/new", get(routes::admin::new_post))
        .route("/blog/{id}/edit", get(routes::admin::edit_post))
        .route("/leads", get(routes::admin::leads));

    Router::new()
        .route("/", get(routes::pages::home))
        .route("/services", get(routes::pages::services_index))
        .route("/services/{slug}", get(routes::pages::service_detail))
        .route("/service-areas", get(routes::pages::service_areas))
        .route("/service-areas/{slug}", get(routes::pages::city_detail))
        .route("/blog", get(routes::pages::blog_index))
        .route("/blog/{slug}", get(routes::pages::blog_detail))
        .route(
            "/free-estimate",
            get(routes::leads::estimate_form).post(routes::leads::submit_estimate),
        )
        .route("/sitemap.xml", get(routes::sitemap::sitemap_xml))
        .route("/rss.xml", get(routes::rss::rss_feed))
        .route("/health", get(routes::health::health_ping))
        .route("/health/database", get(routes::health::health_database))
        .route("/health/ready", get(routes::health::health_ready))
        .nest("/admin", admin)
        .nest("/api/admin", admin_api)
        .route("/{page}", get(routes::pages::landing))
        .fallback(routes::pages::fallback)
        .with_state(state)
        .layer(logging::middleware::propagate_request_id_layer())
        .layer(middleware::from_fn(logging::middleware::log_request))
        .layer(logging::middleware::request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        // Global 2 MB request body cap
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
        .layer(cors)
}

/// Refuse insecure production settings; warn about default credentials.
fn check_production_config(config: &SiteConfig) -> Result<(), String> {
    if !config.is_production() {
        return Ok(());
    }

    if config.jwt_secret.is_empty() || config.jwt_secret == DEFAULT_JWT_SECRET {
        return Err("JWT_SECRET must be set to a secure, unique value in production. \
             Refusing to start with the default secret."
            .to_string());
    }

    if config.admin_email.is_empty() || config.admin_email == DEFAULT_ADMIN_EMAIL {
        tracing::warn!("SECURITY: ADMIN_EMAIL is using an insecure default.");
    }
    let admin_password_set =
        std::env::var("ADMIN_HASH_PASSWORD").is_ok() || std::env::var("ADMIN_PASSWORD").is_ok();
    if !admin_password_set {
        tracing::warn!(
            "SECURITY: Neither ADMIN_HASH_PASSWORD nor ADMIN_PASSWORD is set. \
             The development default password is in use."
        );
    }

    Ok(())
}

/// Postgres when DATABASE_URL is set and reachable, otherwise the
/// unavailable store so every page renders its fallback.
async fn connect_store() -> Arc<dyn ContentStore> {
    if std::env::var("DATABASE_URL").is_err() {
        tracing::info!("DATABASE_URL not set. Running without database connection.");
        return Arc::new(UnavailableStore);
    }

    match db::init_pool(None).await {
        Ok(pool) => {
            if let Err(e) = db::run_migrations(&pool).await {
                tracing::error!("Failed to run database migrations: {}", e);
            }
            Arc::new(db::PgStore::new(pool))
        }
        Err(e) => {
            tracing::warn!(
                "Failed to initialize database pool: {}. Continuing without database.",
                e
            );
            Arc::new(UnavailableStore)
        }
    }
}

/// Run the server (used by main).
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = SiteConfig::from_env();

    let _log_guards = logging::init(config.is_production());

    routes::health::init_start_time();

    if let Err(message) = check_production_config(&config) {
        tracing::error!("FATAL: {}", message);
        return Err(message.into());
    }

    let store = connect_store().await;
    let app = create_app(AppState::new(store, config));

    let addr: SocketAddr = config::bind_address().parse()?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn test_create_app_returns_router() {
        let state = AppState::new(Arc::new(MemoryStore::new()), SiteConfig::default());
        let _app = create_app(state);
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = SiteConfig {
            environment: "production".to_string(),
            ..SiteConfig::default()
        };
        assert!(check_production_config(&config).is_err());

        let config = SiteConfig {
            environment: "production".to_string(),
            jwt_secret: "a-long-unique-secret".to_string(),
            ..SiteConfig::default()
        };
        assert!(check_production_config(&config).is_ok());
        assert!(check_production_config(&SiteConfig::default()).is_ok());
    }
}

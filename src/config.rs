//! Site configuration loaded from the environment.

use bcrypt::{hash, DEFAULT_COST};

pub const DEFAULT_SITE_URL: &str = "https://example.com";
pub const DEFAULT_JWT_SECRET: &str = "default-jwt-secret-change-in-production";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Request-scoped configuration shared by every handler through `AppState`.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute base URL without a trailing slash.
    pub site_url: String,
    pub business_name: String,
    pub business_phone: String,
    pub environment: String,
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password_hash: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let admin_password_hash = if let Ok(hashed) = std::env::var("ADMIN_HASH_PASSWORD") {
            hashed
        } else {
            let plain = std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
            hash(&plain, DEFAULT_COST).unwrap_or_default()
        };

        Self {
            site_url: normalize_site_url(
                &std::env::var("NEXT_PUBLIC_SITE_URL")
                    .unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
            ),
            business_name: std::env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "[Company Name]".to_string()),
            business_phone: std::env::var("BUSINESS_PHONE")
                .unwrap_or_else(|_| "+1-XXX-XXX-XXXX".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password_hash,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Join a route path onto the site URL.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            self.site_url.clone()
        } else if path.starts_with('/') {
            format!("{}{}", self.site_url, path)
        } else {
            format!("{}/{}", self.site_url, path)
        }
    }
}

impl Default for SiteConfig {
    /// Development defaults without touching the environment. The password hash is
    /// left empty so no login succeeds until one is configured.
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            business_name: "[Company Name]".to_string(),
            business_phone: "+1-XXX-XXX-XXXX".to_string(),
            environment: "development".to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password_hash: String::new(),
        }
    }
}

fn normalize_site_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_SITE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Bind address from HOST / PORT, defaulting to 127.0.0.1:3001.
pub fn bind_address() -> String {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3001);
    format!("{}:{}", host, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_site_url_trims_trailing_slash() {
        assert_eq!(normalize_site_url("https://floors.test/"), "https://floors.test");
        assert_eq!(normalize_site_url("  "), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_absolute_url_joins_paths() {
        let config = SiteConfig {
            site_url: "https://floors.test".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.absolute_url("/"), "https://floors.test");
        assert_eq!(config.absolute_url("/blog"), "https://floors.test/blog");
        assert_eq!(config.absolute_url("denver"), "https://floors.test/denver");
    }
}

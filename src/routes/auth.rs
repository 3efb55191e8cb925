/**
 * Authentication Routes
 * Single-admin login issuing a JWT session cookie, plus the extractors that gate admin routes
 */
use axum::{
    extract::{ConnectInfo, FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use bcrypt::verify;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use tokio::sync::RwLock;

use crate::config::SiteConfig;
use crate::error::ApiError;
use crate::AppState;

/// Session lifetime in hours
const SESSION_EXPIRY_HOURS: i64 = 8;

pub const SESSION_COOKIE: &str = "admin_session";

const ADMIN_ROLE: &str = "admin";

/// Failed logins allowed per client address within one window
const MAX_FAILED_LOGINS: u32 = 5;

const LOGIN_WINDOW_SECS: i64 = 60;

// ============================================================================
// Types
// ============================================================================

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a session token for the admin
pub fn create_access_token(
    secret: &str,
    email: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = now + Duration::hours(SESSION_EXPIRY_HOURS);

    let claims = Claims {
        sub: email.to_string(),
        role: ADMIN_ROLE.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify and decode a session token
pub fn verify_access_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Extract the session cookie value
fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

fn admin_claims(config: &SiteConfig, token: &str) -> Option<Claims> {
    match verify_access_token(&config.jwt_secret, token) {
        Ok(claims) if claims.role == ADMIN_ROLE => Some(claims),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "rejected admin session token");
            None
        }
    }
}

/// Claims of a valid admin session carried by the request, if any.
/// The cookie is tried first; a stale cookie does not mask a valid bearer token.
fn session_claims(headers: &HeaderMap, config: &SiteConfig) -> Option<Claims> {
    extract_session_cookie(headers)
        .into_iter()
        .chain(extract_bearer_token(headers))
        .find_map(|token| admin_claims(config, &token))
}

fn session_cookie(config: &SiteConfig, token: &str, max_age: i64) -> String {
    let secure = if config.is_production() { "; Secure" } else { "" };
    format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}{}",
        SESSION_COOKIE, token, max_age, secure
    )
}

fn set_cookie_header(cookie: String) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&cookie).map_err(|e| {
        tracing::error!(error = %e, "invalid session cookie header");
        ApiError::Internal
    })
}

// ============================================================================
// Login throttle
// ============================================================================

/// Failed-login counter per client address, consulted before the bcrypt check.
#[derive(Debug, Default)]
pub struct LoginThrottle {
    failures: RwLock<HashMap<IpAddr, (i64, u32)>>,
}

impl LoginThrottle {
    /// Whether `ip` may attempt a login at `now` (unix seconds).
    ///
    /// Expired windows are evicted on every call so the map only holds
    /// addresses that failed recently.
    pub async fn allows(&self, ip: IpAddr, now: i64) -> bool {
        let mut failures = self.failures.write().await;
        failures.retain(|_, (started, _)| now - *started < LOGIN_WINDOW_SECS);
        failures
            .get(&ip)
            .map_or(true, |(_, count)| *count < MAX_FAILED_LOGINS)
    }

    pub async fn record_failure(&self, ip: IpAddr, now: i64) {
        let mut failures = self.failures.write().await;
        let (_, count) = failures.entry(ip).or_insert((now, 0));
        *count += 1;
    }

    pub async fn clear(&self, ip: IpAddr) {
        self.failures.write().await.remove(&ip);
    }
}

// ============================================================================
// Extractors
// ============================================================================

/// Admin session for JSON API routes. Rejects with 401.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Claims);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        session_claims(&parts.headers, &state.config)
            .map(AdminSession)
            .ok_or(ApiError::Unauthorized)
    }
}

/// Admin session for HTML screens. Redirects to the login page.
#[derive(Debug, Clone)]
pub struct AdminPageSession(pub Claims);

impl FromRequestParts<AppState> for AdminPageSession {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        session_claims(&parts.headers, &state.config)
            .map(AdminPageSession)
            .ok_or_else(|| Redirect::to("/admin/login"))
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let ip = addr.ip();
    let now = Utc::now().timestamp();

    if !state.login_throttle.allows(ip, now).await {
        tracing::warn!(ip = %ip, "admin login throttled");
        return Err(ApiError::TooManyRequests);
    }

    let email = payload.email.trim().to_string();

    if email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    if !email.contains('@') {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    let config = state.config.clone();
    let email_ok = email.eq_ignore_ascii_case(&config.admin_email);
    let hash = config.admin_password_hash.clone();
    let password = payload.password;
    let password_ok = tokio::task::spawn_blocking(move || verify(&password, &hash).unwrap_or(false))
        .await
        .unwrap_or(false);

    if !email_ok || !password_ok {
        state.login_throttle.record_failure(ip, now).await;
        tracing::warn!(email = %email, ip = %ip, "failed admin login");
        return Err(ApiError::Unauthorized);
    }
    state.login_throttle.clear(ip).await;

    let token = create_access_token(&config.jwt_secret, &config.admin_email).map_err(|e| {
        tracing::error!(error = %e, "failed to create session token");
        ApiError::Internal
    })?;
    let max_age = SESSION_EXPIRY_HOURS * 3600;
    let cookie = set_cookie_header(session_cookie(&config, &token, max_age))?;

    tracing::info!(email = %config.admin_email, "admin logged in");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            access_token: token,
            expires_in: max_age,
        }),
    )
        .into_response())
}

/// POST /api/admin/logout
pub async fn logout(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cookie = set_cookie_header(session_cookie(&state.config, "", 0))?;
    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse { success: true }),
    )
        .into_response())
}

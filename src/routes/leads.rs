//! Free-estimate form.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    Form,
};
use serde::Deserialize;

use super::pages::service_cards;
use super::{render_page, render_status};
use crate::content::model::NewLead;
use crate::render::public;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EstimateQuery {
    pub service: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EstimateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub service: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl EstimateForm {
    /// Trimmed lead, or the message to show above the form.
    pub fn into_lead(self) -> Result<NewLead, &'static str> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let phone = self.phone.trim().to_string();

        if name.is_empty() {
            return Err("Please tell us your name.");
        }
        if email.is_empty() && phone.is_empty() {
            return Err("Please give us an email address or phone number.");
        }
        if !email.is_empty() && !email.contains('@') {
            return Err("Please enter a valid email address.");
        }

        Ok(NewLead {
            name,
            email,
            phone,
            service: optional(self.service),
            city: optional(self.city),
            message: optional(self.message),
        })
    }
}

/// GET /free-estimate
pub async fn estimate_form(
    State(state): State<AppState>,
    Query(query): Query<EstimateQuery>,
) -> Response {
    let cards = service_cards(state.store.as_ref()).await;
    render_page(
        &state.config,
        public::estimate_page(&cards, query.service.as_deref(), None),
    )
}

/// POST /free-estimate
pub async fn submit_estimate(
    State(state): State<AppState>,
    Form(form): Form<EstimateForm>,
) -> Response {
    let preselected = form.service.clone();
    let lead = match form.into_lead() {
        Ok(lead) => lead,
        Err(message) => {
            let cards = service_cards(state.store.as_ref()).await;
            return render_status(
                &state.config,
                StatusCode::UNPROCESSABLE_ENTITY,
                public::estimate_page(&cards, preselected.as_deref(), Some(message)),
            );
        }
    };

    match state.store.insert_lead(lead).await {
        Ok(lead) => {
            tracing::info!(lead_id = %lead.id, service = ?lead.service, "estimate request stored");
            render_page(&state.config, public::estimate_received(&lead.name))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to store estimate request");
            render_status(
                &state.config,
                StatusCode::SERVICE_UNAVAILABLE,
                public::estimate_failed(&state.config),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::LeadStatus;
    use crate::routes::test_support::{get, send, state};
    use crate::store::memory::MemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;

    fn form_request(body: &str) -> Request<Body> {
        Request::post("/free-estimate")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_into_lead_requires_name_and_contact() {
        let form = EstimateForm {
            name: "  ".to_string(),
            email: "a@b.com".to_string(),
            ..EstimateForm::default()
        };
        assert!(form.into_lead().is_err());

        let form = EstimateForm {
            name: "Ana".to_string(),
            ..EstimateForm::default()
        };
        assert!(form.into_lead().is_err());

        let form = EstimateForm {
            name: "Ana".to_string(),
            phone: "555-0100".to_string(),
            city: Some("  ".to_string()),
            ..EstimateForm::default()
        };
        let lead = form.into_lead().unwrap();
        assert_eq!(lead.city, None);
    }

    #[tokio::test]
    async fn test_form_preselects_service_from_query() {
        let app = crate::create_app(state(MemoryStore::offline()));
        let (status, body) = get(app, "/free-estimate?service=epoxy-flooring").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("value=\"epoxy-flooring\" selected"));
    }

    #[tokio::test]
    async fn test_submit_stores_new_lead() {
        let store = Arc::new(MemoryStore::new());
        let app_state = AppState::new(store.clone(), crate::config::SiteConfig::default());
        let (status, body) = send(
            crate::create_app(app_state),
            form_request("name=Ana+Diaz&email=ana%40example.com&phone=&service=tile-installation&city=Denver"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Thank you, Ana Diaz!"));

        let leads = store.leads.lock().await;
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].status, LeadStatus::New);
        assert_eq!(leads[0].service.as_deref(), Some("tile-installation"));
    }

    #[tokio::test]
    async fn test_submit_invalid_rerenders_form() {
        let app = crate::create_app(state(MemoryStore::new()));
        let (status, body) = send(app, form_request("name=&email=&phone=")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Please tell us your name."));
    }

    #[tokio::test]
    async fn test_submit_with_store_down_shows_phone() {
        let app = crate::create_app(state(MemoryStore::offline()));
        let (status, body) = send(app, form_request("name=Ana&phone=555-0100")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("+1-XXX-XXX-XXXX"));
    }
}

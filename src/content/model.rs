//! Domain types shared by the renderer, the admin screens and every store.
//!
//! Structured fields are already decoded here; the raw JSON-in-text form only
//! exists in `db::models` rows and in admin payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::codec::{Faq, ProcessStep};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    /// Comma-separated keyword override.
    pub keywords: Option<String>,
    pub benefits: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub faqs: Vec<Faq>,
    pub published: bool,
    pub featured: bool,
    #[serde(rename = "enableFAQSchema")]
    pub enable_faq_schema: bool,
    pub enable_service_schema: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a service, already normalised.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInput {
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub benefits: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub faqs: Vec<Faq>,
    pub published: bool,
    pub featured: bool,
    pub enable_faq_schema: bool,
    pub enable_service_schema: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: Uuid,
    pub name: String,
    /// Two-letter state code.
    pub state: String,
    pub slug: String,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub neighborhoods: Vec<String>,
    pub description: Option<String>,
    pub local_content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    /// Both coordinates, or nothing. A half-set pair is treated as absent.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityInput {
    pub name: String,
    pub state: String,
    pub slug: String,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub neighborhoods: Vec<String>,
    pub description: Option<String>,
    pub local_content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub city_id: Option<Uuid>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub published: bool,
    /// Null while unpublished.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub city_id: Option<Uuid>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub published: bool,
}

/// City label attached to a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRef {
    pub name: String,
    pub state: String,
}

/// Blog post joined with its optional city.
#[derive(Debug, Clone, PartialEq)]
pub struct PostWithCity {
    pub post: BlogPost,
    pub city: Option<CityRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Converted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
            LeadStatus::Contacted => "CONTACTED",
            LeadStatus::Qualified => "QUALIFIED",
            LeadStatus::Converted => "CONVERTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Converted => "Converted",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEW" => Ok(LeadStatus::New),
            "CONTACTED" => Ok(LeadStatus::Contacted),
            "QUALIFIED" => Ok(LeadStatus::Qualified),
            "CONVERTED" => Ok(LeadStatus::Converted),
            other => Err(format!("unknown lead status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<String>,
    /// Free text, not a foreign key.
    pub city: Option<String>,
    pub message: Option<String>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
}

/// Per-status lead counts for the leads screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadStats {
    pub new: i64,
    pub contacted: i64,
    pub qualified: i64,
    pub converted: i64,
    pub total: i64,
}

/// Slug plus last modification, used for sitemap enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct SlugStamp {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

/// Implemented by entities carrying a publish flag.
pub trait Publishable {
    fn is_published(&self) -> bool;
}

impl Publishable for Service {
    fn is_published(&self) -> bool {
        self.published
    }
}

impl Publishable for City {
    fn is_published(&self) -> bool {
        self.published
    }
}

impl Publishable for BlogPost {
    fn is_published(&self) -> bool {
        self.published
    }
}

impl Publishable for PostWithCity {
    fn is_published(&self) -> bool {
        self.post.published
    }
}

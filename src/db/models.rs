//! Database rows as stored. Structured columns are raw JSON-in-text here and
//! are decoded exactly once, in the `From` conversions to the domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::content::codec::decode;
use crate::content::model::{BlogPost, City, Lead, LeadStatus, Service, SlugStamp};

#[derive(Debug, Clone, FromRow)]
pub struct ServiceRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub benefits: Option<String>,
    pub process: Option<String>,
    pub faqs: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub enable_faq_schema: bool,
    pub enable_service_schema: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Service {
            benefits: decode(row.benefits.as_deref()),
            process: decode(row.process.as_deref()),
            faqs: decode(row.faqs.as_deref()),
            id: row.id,
            name: row.name,
            slug: row.slug,
            short_description: row.short_description,
            description: row.description,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            keywords: row.keywords,
            published: row.published,
            featured: row.featured,
            enable_faq_schema: row.enable_faq_schema,
            enable_service_schema: row.enable_service_schema,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CityRow {
    pub id: Uuid,
    pub name: String,
    pub state: String,
    pub slug: String,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub neighborhoods: Option<String>,
    pub description: Option<String>,
    pub local_content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CityRow> for City {
    fn from(row: CityRow) -> Self {
        City {
            neighborhoods: decode(row.neighborhoods.as_deref()),
            id: row.id,
            name: row.name,
            state: row.state,
            slug: row.slug,
            zip_code: row.zip_code,
            latitude: row.latitude,
            longitude: row.longitude,
            description: row.description,
            local_content: row.local_content,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            keywords: row.keywords,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct BlogPostRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub city_id: Option<Uuid>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        BlogPost {
            tags: decode(row.tags.as_deref()),
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            content: row.content,
            featured_image: row.featured_image,
            category: row.category,
            city_id: row.city_id,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            keywords: row.keywords,
            published: row.published,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Blog post row joined with its city label.
#[derive(Debug, Clone, FromRow)]
pub struct BlogPostWithCityRow {
    #[sqlx(flatten)]
    pub post: BlogPostRow,
    pub city_name: Option<String>,
    pub city_state: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct LeadRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        let status = row.status.parse().unwrap_or_else(|e| {
            tracing::warn!(lead_id = %row.id, error = %e, "unknown lead status, showing as NEW");
            LeadStatus::New
        });
        Lead {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            service: row.service,
            city: row.city,
            message: row.message,
            status,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SlugStampRow {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

impl From<SlugStampRow> for SlugStamp {
    fn from(row: SlugStampRow) -> Self {
        SlugStamp {
            slug: row.slug,
            updated_at: row.updated_at,
        }
    }
}

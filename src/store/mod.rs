//! Content store seam.
//!
//! Pages and admin screens talk to persistence only through [`ContentStore`].
//! `db::PgStore` is the Postgres implementation; [`UnavailableStore`] stands in
//! when no database is configured so every page runs its fallback path.

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

use crate::content::model::{
    BlogPost, BlogPostInput, City, CityInput, Lead, LeadStatus, NewLead, PostWithCity, Service,
    ServiceInput, SlugStamp,
};
use crate::error::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Round-trip to the backend, returning its latency.
    async fn ping(&self) -> StoreResult<Duration>;

    async fn service_by_slug(&self, slug: &str) -> StoreResult<Option<Service>>;
    async fn service_by_id(&self, id: Uuid) -> StoreResult<Option<Service>>;
    /// Published services, featured first, then by name.
    async fn published_services(&self, limit: Option<i64>) -> StoreResult<Vec<Service>>;
    /// Every service, newest first.
    async fn all_services(&self) -> StoreResult<Vec<Service>>;
    async fn insert_service(&self, input: ServiceInput) -> StoreResult<Service>;
    async fn update_service(&self, id: Uuid, input: ServiceInput) -> StoreResult<Option<Service>>;
    async fn delete_service(&self, id: Uuid) -> StoreResult<bool>;
    async fn count_services(&self) -> StoreResult<i64>;

    async fn city_by_slug(&self, slug: &str) -> StoreResult<Option<City>>;
    async fn city_by_id(&self, id: Uuid) -> StoreResult<Option<City>>;
    /// Published cities in alphabetical order.
    async fn published_cities(&self) -> StoreResult<Vec<City>>;
    /// Every city, newest first.
    async fn all_cities(&self) -> StoreResult<Vec<City>>;
    async fn insert_city(&self, input: CityInput) -> StoreResult<City>;
    async fn update_city(&self, id: Uuid, input: CityInput) -> StoreResult<Option<City>>;
    async fn delete_city(&self, id: Uuid) -> StoreResult<bool>;
    async fn count_cities(&self) -> StoreResult<i64>;

    async fn post_by_slug(&self, slug: &str) -> StoreResult<Option<PostWithCity>>;
    async fn post_by_id(&self, id: Uuid) -> StoreResult<Option<BlogPost>>;
    /// Published posts, most recently published first.
    async fn published_posts(&self, limit: i64) -> StoreResult<Vec<BlogPost>>;
    /// Every post, newest first.
    async fn all_posts(&self) -> StoreResult<Vec<BlogPost>>;
    async fn insert_post(
        &self,
        input: BlogPostInput,
        published_at: Option<DateTime<Utc>>,
    ) -> StoreResult<BlogPost>;
    async fn update_post(
        &self,
        id: Uuid,
        input: BlogPostInput,
        published_at: Option<DateTime<Utc>>,
    ) -> StoreResult<Option<BlogPost>>;
    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;
    async fn count_published_posts(&self) -> StoreResult<i64>;

    async fn insert_lead(&self, lead: NewLead) -> StoreResult<Lead>;
    /// Newest first, optionally filtered by status.
    async fn leads(&self, status: Option<LeadStatus>, limit: i64) -> StoreResult<Vec<Lead>>;
    async fn count_leads(&self, status: Option<LeadStatus>) -> StoreResult<i64>;
    /// Writes any status; no transition order is enforced.
    async fn update_lead_status(&self, id: Uuid, status: LeadStatus) -> StoreResult<Option<Lead>>;

    async fn published_service_stamps(&self) -> StoreResult<Vec<SlugStamp>>;
    async fn published_city_stamps(&self) -> StoreResult<Vec<SlugStamp>>;
    async fn location_page_stamps(&self) -> StoreResult<Vec<SlugStamp>>;
    async fn published_post_stamps(&self) -> StoreResult<Vec<SlugStamp>>;
}

/// Store used when no database is configured. Every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

#[async_trait]
impl ContentStore for UnavailableStore {
    async fn ping(&self) -> StoreResult<Duration> {
        Err(StoreError::Unavailable)
    }

    async fn service_by_slug(&self, _slug: &str) -> StoreResult<Option<Service>> {
        Err(StoreError::Unavailable)
    }

    async fn service_by_id(&self, _id: Uuid) -> StoreResult<Option<Service>> {
        Err(StoreError::Unavailable)
    }

    async fn published_services(&self, _limit: Option<i64>) -> StoreResult<Vec<Service>> {
        Err(StoreError::Unavailable)
    }

    async fn all_services(&self) -> StoreResult<Vec<Service>> {
        Err(StoreError::Unavailable)
    }

    async fn insert_service(&self, _input: ServiceInput) -> StoreResult<Service> {
        Err(StoreError::Unavailable)
    }

    async fn update_service(&self, _id: Uuid, _input: ServiceInput) -> StoreResult<Option<Service>> {
        Err(StoreError::Unavailable)
    }

    async fn delete_service(&self, _id: Uuid) -> StoreResult<bool> {
        Err(StoreError::Unavailable)
    }

    async fn count_services(&self) -> StoreResult<i64> {
        Err(StoreError::Unavailable)
    }

    async fn city_by_slug(&self, _slug: &str) -> StoreResult<Option<City>> {
        Err(StoreError::Unavailable)
    }

    async fn city_by_id(&self, _id: Uuid) -> StoreResult<Option<City>> {
        Err(StoreError::Unavailable)
    }

    async fn published_cities(&self) -> StoreResult<Vec<City>> {
        Err(StoreError::Unavailable)
    }

    async fn all_cities(&self) -> StoreResult<Vec<City>> {
        Err(StoreError::Unavailable)
    }

    async fn insert_city(&self, _input: CityInput) -> StoreResult<City> {
        Err(StoreError::Unavailable)
    }

    async fn update_city(&self, _id: Uuid, _input: CityInput) -> StoreResult<Option<City>> {
        Err(StoreError::Unavailable)
    }

    async fn delete_city(&self, _id: Uuid) -> StoreResult<bool> {
        Err(StoreError::Unavailable)
    }

    async fn count_cities(&self) -> StoreResult<i64> {
        Err(StoreError::Unavailable)
    }

    async fn post_by_slug(&self, _slug: &str) -> StoreResult<Option<PostWithCity>> {
        Err(StoreError::Unavailable)
    }

    async fn post_by_id(&self, _id: Uuid) -> StoreResult<Option<BlogPost>> {
        Err(StoreError::Unavailable)
    }

    async fn published_posts(&self, _limit: i64) -> StoreResult<Vec<BlogPost>> {
        Err(StoreError::Unavailable)
    }

    async fn all_posts(&self) -> StoreResult<Vec<BlogPost>> {
        Err(StoreError::Unavailable)
    }

    async fn insert_post(
        &self,
        _input: BlogPostInput,
        _published_at: Option<DateTime<Utc>>,
    ) -> StoreResult<BlogPost> {
        Err(StoreError::Unavailable)
    }

    async fn update_post(
        &self,
        _id: Uuid,
        _input: BlogPostInput,
        _published_at: Option<DateTime<Utc>>,
    ) -> StoreResult<Option<BlogPost>> {
        Err(StoreError::Unavailable)
    }

    async fn delete_post(&self, _id: Uuid) -> StoreResult<bool> {
        Err(StoreError::Unavailable)
    }

    async fn count_published_posts(&self) -> StoreResult<i64> {
        Err(StoreError::Unavailable)
    }

    async fn insert_lead(&self, _lead: NewLead) -> StoreResult<Lead> {
        Err(StoreError::Unavailable)
    }

    async fn leads(&self, _status: Option<LeadStatus>, _limit: i64) -> StoreResult<Vec<Lead>> {
        Err(StoreError::Unavailable)
    }

    async fn count_leads(&self, _status: Option<LeadStatus>) -> StoreResult<i64> {
        Err(StoreError::Unavailable)
    }

    async fn update_lead_status(&self, _id: Uuid, _status: LeadStatus) -> StoreResult<Option<Lead>> {
        Err(StoreError::Unavailable)
    }

    async fn published_service_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        Err(StoreError::Unavailable)
    }

    async fn published_city_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        Err(StoreError::Unavailable)
    }

    async fn location_page_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        Err(StoreError::Unavailable)
    }

    async fn published_post_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        Err(StoreError::Unavailable)
    }
}

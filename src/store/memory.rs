//! In-memory store for tests, with switches to simulate an unreachable backend.

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{ContentStore, StoreResult};
use crate::content::model::{
    BlogPost, BlogPostInput, City, CityInput, CityRef, Lead, LeadStatus, NewLead, PostWithCity,
    Service, ServiceInput, SlugStamp,
};
use crate::error::StoreError;

#[derive(Default)]
pub struct MemoryStore {
    pub services: Mutex<Vec<Service>>,
    pub cities: Mutex<Vec<City>>,
    pub posts: Mutex<Vec<BlogPost>>,
    pub leads: Mutex<Vec<Lead>>,
    pub location_pages: Mutex<Vec<SlugStamp>>,
    /// Fail every call.
    pub offline: AtomicBool,
    /// Fail only the named operations. `count_leads:STATUS` narrows to one filter.
    failing: std::sync::Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        let store = Self::default();
        store.offline.store(true, Ordering::SeqCst);
        store
    }

    pub fn fail(&self, op: &str) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(op.to_string());
        }
    }

    fn check(&self, op: &str) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        let failing = self
            .failing
            .lock()
            .map(|f| f.contains(op))
            .unwrap_or(false);
        if failing {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }

    pub async fn with_service(self, service: Service) -> Self {
        self.services.lock().await.push(service);
        self
    }

    pub async fn with_city(self, city: City) -> Self {
        self.cities.lock().await.push(city);
        self
    }

    pub async fn with_post(self, post: BlogPost) -> Self {
        self.posts.lock().await.push(post);
        self
    }

    pub async fn with_lead(self, lead: Lead) -> Self {
        self.leads.lock().await.push(lead);
        self
    }

    pub async fn with_location_page(self, slug: &str) -> Self {
        self.location_pages.lock().await.push(SlugStamp {
            slug: slug.to_string(),
            updated_at: Utc::now(),
        });
        self
    }
}

fn service_from_input(id: Uuid, input: ServiceInput, created_at: DateTime<Utc>) -> Service {
    Service {
        id,
        name: input.name,
        slug: input.slug,
        short_description: input.short_description,
        description: input.description,
        meta_title: input.meta_title,
        meta_description: input.meta_description,
        keywords: input.keywords,
        benefits: input.benefits,
        process: input.process,
        faqs: input.faqs,
        published: input.published,
        featured: input.featured,
        enable_faq_schema: input.enable_faq_schema,
        enable_service_schema: input.enable_service_schema,
        created_at,
        updated_at: Utc::now(),
    }
}

fn city_from_input(id: Uuid, input: CityInput, created_at: DateTime<Utc>) -> City {
    City {
        id,
        name: input.name,
        state: input.state,
        slug: input.slug,
        zip_code: input.zip_code,
        latitude: input.latitude,
        longitude: input.longitude,
        neighborhoods: input.neighborhoods,
        description: input.description,
        local_content: input.local_content,
        meta_title: input.meta_title,
        meta_description: input.meta_description,
        keywords: input.keywords,
        published: input.published,
        created_at,
        updated_at: Utc::now(),
    }
}

fn post_from_input(
    id: Uuid,
    input: BlogPostInput,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
) -> BlogPost {
    BlogPost {
        id,
        title: input.title,
        slug: input.slug,
        excerpt: input.excerpt,
        content: input.content,
        featured_image: input.featured_image,
        category: input.category,
        tags: input.tags,
        city_id: input.city_id,
        meta_title: input.meta_title,
        meta_description: input.meta_description,
        keywords: input.keywords,
        published: input.published,
        published_at,
        created_at,
        updated_at: Utc::now(),
    }
}

fn newest_first<T, F: Fn(&T) -> DateTime<Utc>>(mut items: Vec<T>, key: F) -> Vec<T> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn ping(&self) -> StoreResult<Duration> {
        self.check("ping")?;
        Ok(Duration::from_millis(0))
    }

    async fn service_by_slug(&self, slug: &str) -> StoreResult<Option<Service>> {
        self.check("service_by_slug")?;
        Ok(self.services.lock().await.iter().find(|s| s.slug == slug).cloned())
    }

    async fn service_by_id(&self, id: Uuid) -> StoreResult<Option<Service>> {
        self.check("service_by_id")?;
        Ok(self.services.lock().await.iter().find(|s| s.id == id).cloned())
    }

    async fn published_services(&self, limit: Option<i64>) -> StoreResult<Vec<Service>> {
        self.check("published_services")?;
        let mut services: Vec<Service> = self
            .services
            .lock()
            .await
            .iter()
            .filter(|s| s.published)
            .cloned()
            .collect();
        services.sort_by(|a, b| b.featured.cmp(&a.featured).then(a.name.cmp(&b.name)));
        if let Some(limit) = limit {
            services.truncate(limit.max(0) as usize);
        }
        Ok(services)
    }

    async fn all_services(&self) -> StoreResult<Vec<Service>> {
        self.check("all_services")?;
        let services = self.services.lock().await.clone();
        Ok(newest_first(services, |s| s.created_at))
    }

    async fn insert_service(&self, input: ServiceInput) -> StoreResult<Service> {
        self.check("insert_service")?;
        let mut services = self.services.lock().await;
        if services.iter().any(|s| s.slug == input.slug) {
            return Err(StoreError::DuplicateSlug);
        }
        let service = service_from_input(Uuid::new_v4(), input, Utc::now());
        services.push(service.clone());
        Ok(service)
    }

    async fn update_service(&self, id: Uuid, input: ServiceInput) -> StoreResult<Option<Service>> {
        self.check("update_service")?;
        let mut services = self.services.lock().await;
        if services.iter().any(|s| s.slug == input.slug && s.id != id) {
            return Err(StoreError::DuplicateSlug);
        }
        match services.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                *existing = service_from_input(id, input, existing.created_at);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_service(&self, id: Uuid) -> StoreResult<bool> {
        self.check("delete_service")?;
        let mut services = self.services.lock().await;
        let before = services.len();
        services.retain(|s| s.id != id);
        Ok(services.len() != before)
    }

    async fn count_services(&self) -> StoreResult<i64> {
        self.check("count_services")?;
        Ok(self.services.lock().await.len() as i64)
    }

    async fn city_by_slug(&self, slug: &str) -> StoreResult<Option<City>> {
        self.check("city_by_slug")?;
        Ok(self.cities.lock().await.iter().find(|c| c.slug == slug).cloned())
    }

    async fn city_by_id(&self, id: Uuid) -> StoreResult<Option<City>> {
        self.check("city_by_id")?;
        Ok(self.cities.lock().await.iter().find(|c| c.id == id).cloned())
    }

    async fn published_cities(&self) -> StoreResult<Vec<City>> {
        self.check("published_cities")?;
        let mut cities: Vec<City> = self
            .cities
            .lock()
            .await
            .iter()
            .filter(|c| c.published)
            .cloned()
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }

    async fn all_cities(&self) -> StoreResult<Vec<City>> {
        self.check("all_cities")?;
        let cities = self.cities.lock().await.clone();
        Ok(newest_first(cities, |c| c.created_at))
    }

    async fn insert_city(&self, input: CityInput) -> StoreResult<City> {
        self.check("insert_city")?;
        let mut cities = self.cities.lock().await;
        if cities.iter().any(|c| c.slug == input.slug) {
            return Err(StoreError::DuplicateSlug);
        }
        let city = city_from_input(Uuid::new_v4(), input, Utc::now());
        cities.push(city.clone());
        Ok(city)
    }

    async fn update_city(&self, id: Uuid, input: CityInput) -> StoreResult<Option<City>> {
        self.check("update_city")?;
        let mut cities = self.cities.lock().await;
        if cities.iter().any(|c| c.slug == input.slug && c.id != id) {
            return Err(StoreError::DuplicateSlug);
        }
        match cities.iter_mut().find(|c| c.id == id) {
            Some(existing) => {
                *existing = city_from_input(id, input, existing.created_at);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_city(&self, id: Uuid) -> StoreResult<bool> {
        self.check("delete_city")?;
        let mut cities = self.cities.lock().await;
        let before = cities.len();
        cities.retain(|c| c.id != id);
        Ok(cities.len() != before)
    }

    async fn count_cities(&self) -> StoreResult<i64> {
        self.check("count_cities")?;
        Ok(self.cities.lock().await.len() as i64)
    }

    async fn post_by_slug(&self, slug: &str) -> StoreResult<Option<PostWithCity>> {
        self.check("post_by_slug")?;
        let post = match self.posts.lock().await.iter().find(|p| p.slug == slug).cloned() {
            Some(post) => post,
            None => return Ok(None),
        };
        let city = match post.city_id {
            Some(city_id) => self
                .cities
                .lock()
                .await
                .iter()
                .find(|c| c.id == city_id)
                .map(|c| CityRef {
                    name: c.name.clone(),
                    state: c.state.clone(),
                }),
            None => None,
        };
        Ok(Some(PostWithCity { post, city }))
    }

    async fn post_by_id(&self, id: Uuid) -> StoreResult<Option<BlogPost>> {
        self.check("post_by_id")?;
        Ok(self.posts.lock().await.iter().find(|p| p.id == id).cloned())
    }

    async fn published_posts(&self, limit: i64) -> StoreResult<Vec<BlogPost>> {
        self.check("published_posts")?;
        let posts: Vec<BlogPost> = self
            .posts
            .lock()
            .await
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect();
        let mut posts = newest_first(posts, |p| p.published_at.unwrap_or(p.created_at));
        posts.truncate(limit.max(0) as usize);
        Ok(posts)
    }

    async fn all_posts(&self) -> StoreResult<Vec<BlogPost>> {
        self.check("all_posts")?;
        let posts = self.posts.lock().await.clone();
        Ok(newest_first(posts, |p| p.created_at))
    }

    async fn insert_post(
        &self,
        input: BlogPostInput,
        published_at: Option<DateTime<Utc>>,
    ) -> StoreResult<BlogPost> {
        self.check("insert_post")?;
        let mut posts = self.posts.lock().await;
        if posts.iter().any(|p| p.slug == input.slug) {
            return Err(StoreError::DuplicateSlug);
        }
        let post = post_from_input(Uuid::new_v4(), input, published_at, Utc::now());
        posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(
        &self,
        id: Uuid,
        input: BlogPostInput,
        published_at: Option<DateTime<Utc>>,
    ) -> StoreResult<Option<BlogPost>> {
        self.check("update_post")?;
        let mut posts = self.posts.lock().await;
        if posts.iter().any(|p| p.slug == input.slug && p.id != id) {
            return Err(StoreError::DuplicateSlug);
        }
        match posts.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = post_from_input(id, input, published_at, existing.created_at);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        self.check("delete_post")?;
        let mut posts = self.posts.lock().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() != before)
    }

    async fn count_published_posts(&self) -> StoreResult<i64> {
        self.check("count_published_posts")?;
        Ok(self.posts.lock().await.iter().filter(|p| p.published).count() as i64)
    }

    async fn insert_lead(&self, lead: NewLead) -> StoreResult<Lead> {
        self.check("insert_lead")?;
        let lead = Lead {
            id: Uuid::new_v4(),
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            service: lead.service,
            city: lead.city,
            message: lead.message,
            status: LeadStatus::New,
            created_at: Utc::now(),
        };
        self.leads.lock().await.push(lead.clone());
        Ok(lead)
    }

    async fn leads(&self, status: Option<LeadStatus>, limit: i64) -> StoreResult<Vec<Lead>> {
        self.check("leads")?;
        let leads: Vec<Lead> = self
            .leads
            .lock()
            .await
            .iter()
            .filter(|l| status.map_or(true, |s| l.status == s))
            .cloned()
            .collect();
        let mut leads = newest_first(leads, |l| l.created_at);
        leads.truncate(limit.max(0) as usize);
        Ok(leads)
    }

    async fn count_leads(&self, status: Option<LeadStatus>) -> StoreResult<i64> {
        self.check("count_leads")?;
        if let Some(status) = status {
            self.check(&format!("count_leads:{}", status.as_str()))?;
        }
        Ok(self
            .leads
            .lock()
            .await
            .iter()
            .filter(|l| status.map_or(true, |s| l.status == s))
            .count() as i64)
    }

    async fn update_lead_status(&self, id: Uuid, status: LeadStatus) -> StoreResult<Option<Lead>> {
        self.check("update_lead_status")?;
        let mut leads = self.leads.lock().await;
        Ok(leads.iter_mut().find(|l| l.id == id).map(|lead| {
            lead.status = status;
            lead.clone()
        }))
    }

    async fn published_service_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        self.check("published_service_stamps")?;
        Ok(self
            .services
            .lock()
            .await
            .iter()
            .filter(|s| s.published)
            .map(|s| SlugStamp {
                slug: s.slug.clone(),
                updated_at: s.updated_at,
            })
            .collect())
    }

    async fn published_city_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        self.check("published_city_stamps")?;
        Ok(self
            .cities
            .lock()
            .await
            .iter()
            .filter(|c| c.published)
            .map(|c| SlugStamp {
                slug: c.slug.clone(),
                updated_at: c.updated_at,
            })
            .collect())
    }

    async fn location_page_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        self.check("location_page_stamps")?;
        Ok(self.location_pages.lock().await.clone())
    }

    async fn published_post_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        self.check("published_post_stamps")?;
        Ok(self
            .posts
            .lock()
            .await
            .iter()
            .filter(|p| p.published)
            .map(|p| SlugStamp {
                slug: p.slug.clone(),
                updated_at: p.updated_at,
            })
            .collect())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn sample_service(slug: &str, published: bool) -> Service {
    let now = Utc::now();
    Service {
        id: Uuid::new_v4(),
        name: "Hardwood Installation".to_string(),
        slug: slug.to_string(),
        short_description: "New hardwood floors".to_string(),
        description: "First paragraph.\n\nSecond paragraph.".to_string(),
        meta_title: None,
        meta_description: None,
        keywords: None,
        benefits: vec!["Adds value".to_string(), "Lasts decades".to_string()],
        process: Vec::new(),
        faqs: Vec::new(),
        published,
        featured: false,
        enable_faq_schema: true,
        enable_service_schema: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_city(slug: &str, published: bool) -> City {
    let now = Utc::now();
    City {
        id: Uuid::new_v4(),
        name: "Lakewood".to_string(),
        state: "CO".to_string(),
        slug: slug.to_string(),
        zip_code: Some("80226".to_string()),
        latitude: Some(39.7047),
        longitude: Some(-105.0814),
        neighborhoods: vec!["Belmar".to_string(), "Green Mountain".to_string()],
        description: None,
        local_content: None,
        meta_title: None,
        meta_description: None,
        keywords: None,
        published,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_post(slug: &str, published: bool) -> BlogPost {
    let now = Utc::now();
    BlogPost {
        id: Uuid::new_v4(),
        title: "Choosing a Stain Color".to_string(),
        slug: slug.to_string(),
        excerpt: "How to pick a stain".to_string(),
        content: "Line one\nLine two".to_string(),
        featured_image: None,
        category: Some("Guides".to_string()),
        tags: Vec::new(),
        city_id: None,
        meta_title: None,
        meta_description: None,
        keywords: None,
        published,
        published_at: published.then(|| now - ChronoDuration::days(1)),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_lead(name: &str, status: LeadStatus) -> Lead {
    Lead {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".to_string(),
        service: Some("hardwood-refinishing".to_string()),
        city: Some("Denver".to_string()),
        message: None,
        status,
        created_at: Utc::now(),
    }
}

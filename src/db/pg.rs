//! Postgres implementation of the content store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::models::{BlogPostRow, BlogPostWithCityRow, CityRow, LeadRow, ServiceRow, SlugStampRow};
use crate::content::codec::encode;
use crate::content::model::{
    BlogPost, BlogPostInput, City, CityInput, CityRef, Lead, LeadStatus, NewLead, PostWithCity,
    Service, ServiceInput, SlugStamp,
};
use crate::store::{ContentStore, StoreResult};

const SERVICE_COLUMNS: &str = "id, name, slug, short_description, description, meta_title, \
     meta_description, keywords, benefits, process, faqs, published, featured, \
     enable_faq_schema, enable_service_schema, created_at, updated_at";

const CITY_COLUMNS: &str = "id, name, state, slug, zip_code, latitude, longitude, neighborhoods, \
     description, local_content, meta_title, meta_description, keywords, published, \
     created_at, updated_at";

const POST_COLUMNS: &str = "id, title, slug, excerpt, content, featured_image, category, tags, \
     city_id, meta_title, meta_description, keywords, published, published_at, \
     created_at, updated_at";

const LEAD_COLUMNS: &str = "id, name, email, phone, service, city, message, status, created_at";

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn stamps(&self, sql: &str) -> StoreResult<Vec<SlugStamp>> {
        let rows = sqlx::query_as::<_, SlugStampRow>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(SlugStamp::from).collect())
    }

    async fn count(&self, sql: &str) -> StoreResult<i64> {
        let (n,): (i64,) = sqlx::query_as(sql).fetch_one(&self.pool).await?;
        Ok(n)
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn ping(&self) -> StoreResult<Duration> {
        let start = Instant::now();
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(start.elapsed())
    }

    async fn service_by_slug(&self, slug: &str) -> StoreResult<Option<Service>> {
        let sql = format!("SELECT {} FROM services WHERE slug = $1", SERVICE_COLUMNS);
        let row = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Service::from))
    }

    async fn service_by_id(&self, id: Uuid) -> StoreResult<Option<Service>> {
        let sql = format!("SELECT {} FROM services WHERE id = $1", SERVICE_COLUMNS);
        let row = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Service::from))
    }

    async fn published_services(&self, limit: Option<i64>) -> StoreResult<Vec<Service>> {
        // LIMIT NULL means no limit in Postgres.
        let sql = format!(
            "SELECT {} FROM services WHERE published = true \
             ORDER BY featured DESC, name ASC LIMIT $1",
            SERVICE_COLUMNS
        );
        let rows = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Service::from).collect())
    }

    async fn all_services(&self) -> StoreResult<Vec<Service>> {
        let sql = format!(
            "SELECT {} FROM services ORDER BY created_at DESC",
            SERVICE_COLUMNS
        );
        let rows = sqlx::query_as::<_, ServiceRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Service::from).collect())
    }

    async fn insert_service(&self, input: ServiceInput) -> StoreResult<Service> {
        let sql = format!(
            r#"
            INSERT INTO services (name, slug, short_description, description, meta_title,
                meta_description, keywords, benefits, process, faqs, published, featured,
                enable_faq_schema, enable_service_schema, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, now(), now())
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        );
        let row = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.keywords)
            .bind(encode(&input.benefits))
            .bind(encode(&input.process))
            .bind(encode(&input.faqs))
            .bind(input.published)
            .bind(input.featured)
            .bind(input.enable_faq_schema)
            .bind(input.enable_service_schema)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_service(&self, id: Uuid, input: ServiceInput) -> StoreResult<Option<Service>> {
        let sql = format!(
            r#"
            UPDATE services SET name = $2, slug = $3, short_description = $4, description = $5,
                meta_title = $6, meta_description = $7, keywords = $8, benefits = $9,
                process = $10, faqs = $11, published = $12, featured = $13,
                enable_faq_schema = $14, enable_service_schema = $15, updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        );
        let row = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.keywords)
            .bind(encode(&input.benefits))
            .bind(encode(&input.process))
            .bind(encode(&input.faqs))
            .bind(input.published)
            .bind(input.featured)
            .bind(input.enable_faq_schema)
            .bind(input.enable_service_schema)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Service::from))
    }

    async fn delete_service(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_services(&self) -> StoreResult<i64> {
        self.count("SELECT COUNT(*) FROM services").await
    }

    async fn city_by_slug(&self, slug: &str) -> StoreResult<Option<City>> {
        let sql = format!("SELECT {} FROM cities WHERE slug = $1", CITY_COLUMNS);
        let row = sqlx::query_as::<_, CityRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(City::from))
    }

    async fn city_by_id(&self, id: Uuid) -> StoreResult<Option<City>> {
        let sql = format!("SELECT {} FROM cities WHERE id = $1", CITY_COLUMNS);
        let row = sqlx::query_as::<_, CityRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(City::from))
    }

    async fn published_cities(&self) -> StoreResult<Vec<City>> {
        let sql = format!(
            "SELECT {} FROM cities WHERE published = true ORDER BY name ASC",
            CITY_COLUMNS
        );
        let rows = sqlx::query_as::<_, CityRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn all_cities(&self) -> StoreResult<Vec<City>> {
        let sql = format!("SELECT {} FROM cities ORDER BY created_at DESC", CITY_COLUMNS);
        let rows = sqlx::query_as::<_, CityRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn insert_city(&self, input: CityInput) -> StoreResult<City> {
        let sql = format!(
            r#"
            INSERT INTO cities (name, state, slug, zip_code, latitude, longitude, neighborhoods,
                description, local_content, meta_title, meta_description, keywords, published,
                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, now(), now())
            RETURNING {}
            "#,
            CITY_COLUMNS
        );
        let row = sqlx::query_as::<_, CityRow>(&sql)
            .bind(&input.name)
            .bind(&input.state)
            .bind(&input.slug)
            .bind(&input.zip_code)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(encode(&input.neighborhoods))
            .bind(&input.description)
            .bind(&input.local_content)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.keywords)
            .bind(input.published)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_city(&self, id: Uuid, input: CityInput) -> StoreResult<Option<City>> {
        let sql = format!(
            r#"
            UPDATE cities SET name = $2, state = $3, slug = $4, zip_code = $5, latitude = $6,
                longitude = $7, neighborhoods = $8, description = $9, local_content = $10,
                meta_title = $11, meta_description = $12, keywords = $13, published = $14,
                updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            CITY_COLUMNS
        );
        let row = sqlx::query_as::<_, CityRow>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.state)
            .bind(&input.slug)
            .bind(&input.zip_code)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(encode(&input.neighborhoods))
            .bind(&input.description)
            .bind(&input.local_content)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.keywords)
            .bind(input.published)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(City::from))
    }

    async fn delete_city(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_cities(&self) -> StoreResult<i64> {
        self.count("SELECT COUNT(*) FROM cities").await
    }

    async fn post_by_slug(&self, slug: &str) -> StoreResult<Option<PostWithCity>> {
        let row = sqlx::query_as::<_, BlogPostWithCityRow>(
            r#"
            SELECT p.id, p.title, p.slug, p.excerpt, p.content, p.featured_image, p.category,
                   p.tags, p.city_id, p.meta_title, p.meta_description, p.keywords, p.published,
                   p.published_at, p.created_at, p.updated_at,
                   c.name AS city_name, c.state AS city_state
            FROM blog_posts p
            LEFT JOIN cities c ON c.id = p.city_id
            WHERE p.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| {
            let city = match (r.city_name, r.city_state) {
                (Some(name), Some(state)) => Some(CityRef { name, state }),
                _ => None,
            };
            PostWithCity {
                post: r.post.into(),
                city,
            }
        }))
    }

    async fn post_by_id(&self, id: Uuid) -> StoreResult<Option<BlogPost>> {
        let sql = format!("SELECT {} FROM blog_posts WHERE id = $1", POST_COLUMNS);
        let row = sqlx::query_as::<_, BlogPostRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BlogPost::from))
    }

    async fn published_posts(&self, limit: i64) -> StoreResult<Vec<BlogPost>> {
        let sql = format!(
            "SELECT {} FROM blog_posts WHERE published = true \
             ORDER BY published_at DESC NULLS LAST LIMIT $1",
            POST_COLUMNS
        );
        let rows = sqlx::query_as::<_, BlogPostRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn all_posts(&self) -> StoreResult<Vec<BlogPost>> {
        let sql = format!(
            "SELECT {} FROM blog_posts ORDER BY created_at DESC",
            POST_COLUMNS
        );
        let rows = sqlx::query_as::<_, BlogPostRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn insert_post(
        &self,
        input: BlogPostInput,
        published_at: Option<DateTime<Utc>>,
    ) -> StoreResult<BlogPost> {
        let sql = format!(
            r#"
            INSERT INTO blog_posts (title, slug, excerpt, content, featured_image, category, tags,
                city_id, meta_title, meta_description, keywords, published, published_at,
                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, now(), now())
            RETURNING {}
            "#,
            POST_COLUMNS
        );
        let row = sqlx::query_as::<_, BlogPostRow>(&sql)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.featured_image)
            .bind(&input.category)
            .bind(encode(&input.tags))
            .bind(input.city_id)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.keywords)
            .bind(input.published)
            .bind(published_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_post(
        &self,
        id: Uuid,
        input: BlogPostInput,
        published_at: Option<DateTime<Utc>>,
    ) -> StoreResult<Option<BlogPost>> {
        let sql = format!(
            r#"
            UPDATE blog_posts SET title = $2, slug = $3, excerpt = $4, content = $5,
                featured_image = $6, category = $7, tags = $8, city_id = $9, meta_title = $10,
                meta_description = $11, keywords = $12, published = $13, published_at = $14,
                updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            POST_COLUMNS
        );
        let row = sqlx::query_as::<_, BlogPostRow>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.featured_image)
            .bind(&input.category)
            .bind(encode(&input.tags))
            .bind(input.city_id)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.keywords)
            .bind(input.published)
            .bind(published_at)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BlogPost::from))
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_published_posts(&self) -> StoreResult<i64> {
        self.count("SELECT COUNT(*) FROM blog_posts WHERE published = true")
            .await
    }

    async fn insert_lead(&self, lead: NewLead) -> StoreResult<Lead> {
        let sql = format!(
            r#"
            INSERT INTO leads (name, email, phone, service, city, message, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            RETURNING {}
            "#,
            LEAD_COLUMNS
        );
        let row = sqlx::query_as::<_, LeadRow>(&sql)
            .bind(&lead.name)
            .bind(&lead.email)
            .bind(&lead.phone)
            .bind(&lead.service)
            .bind(&lead.city)
            .bind(&lead.message)
            .bind(LeadStatus::New.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn leads(&self, status: Option<LeadStatus>, limit: i64) -> StoreResult<Vec<Lead>> {
        let sql = format!(
            "SELECT {} FROM leads WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2",
            LEAD_COLUMNS
        );
        let rows = sqlx::query_as::<_, LeadRow>(&sql)
            .bind(status.map(|s| s.as_str()))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Lead::from).collect())
    }

    async fn count_leads(&self, status: Option<LeadStatus>) -> StoreResult<i64> {
        let (n,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM leads WHERE ($1::TEXT IS NULL OR status = $1)")
                .bind(status.map(|s| s.as_str()))
                .fetch_one(&self.pool)
                .await?;
        Ok(n)
    }

    async fn update_lead_status(&self, id: Uuid, status: LeadStatus) -> StoreResult<Option<Lead>> {
        let sql = format!(
            "UPDATE leads SET status = $2 WHERE id = $1 RETURNING {}",
            LEAD_COLUMNS
        );
        let row = sqlx::query_as::<_, LeadRow>(&sql)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Lead::from))
    }

    async fn published_service_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        self.stamps("SELECT slug, updated_at FROM services WHERE published = true")
            .await
    }

    async fn published_city_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        self.stamps("SELECT slug, updated_at FROM cities WHERE published = true")
            .await
    }

    async fn location_page_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        self.stamps("SELECT slug, updated_at FROM location_pages")
            .await
    }

    async fn published_post_stamps(&self) -> StoreResult<Vec<SlugStamp>> {
        self.stamps("SELECT slug, updated_at FROM blog_posts WHERE published = true")
            .await
    }
}

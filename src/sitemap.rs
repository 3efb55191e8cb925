//! Sitemap assembly.
//!
//! The static routes are always listed. Dynamic routes for services, cities,
//! location pages and blog posts are read together; if any of the four reads
//! fails, the whole dynamic part is dropped for that pass.

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::content::model::SlugStamp;
use crate::render::escape_html;
use crate::store::{ContentStore, StoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const STATIC_ROUTES: &[(&str, ChangeFrequency, f32)] = &[
    ("", ChangeFrequency::Weekly, 1.0),
    ("/services", ChangeFrequency::Monthly, 0.95),
    ("/flooring", ChangeFrequency::Monthly, 0.95),
    ("/portfolio", ChangeFrequency::Weekly, 0.9),
    ("/about", ChangeFrequency::Monthly, 0.9),
    ("/contact", ChangeFrequency::Monthly, 0.9),
    ("/service-areas", ChangeFrequency::Monthly, 0.9),
    ("/free-estimate", ChangeFrequency::Monthly, 0.9),
    ("/schedule-measurement", ChangeFrequency::Monthly, 0.85),
    ("/gallery", ChangeFrequency::Monthly, 0.85),
    ("/reviews", ChangeFrequency::Weekly, 0.85),
    ("/blog", ChangeFrequency::Weekly, 0.85),
    ("/warranty", ChangeFrequency::Yearly, 0.7),
    ("/policies", ChangeFrequency::Yearly, 0.6),
];

const FLOORING_TYPES: &[&str] = &[
    "site-finished-wood",
    "pre-finished-wood",
    "luxury-vinyl",
    "engineered-wood",
    "laminate",
];

/// Entries listed in every pass, stamped with `now`.
pub fn static_entries(base_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let mut entries: Vec<SitemapEntry> = STATIC_ROUTES
        .iter()
        .map(|(path, freq, priority)| SitemapEntry {
            url: format!("{}{}", base_url, path),
            last_modified: now,
            change_frequency: *freq,
            priority: *priority,
        })
        .collect();

    entries.extend(FLOORING_TYPES.iter().map(|slug| SitemapEntry {
        url: format!("{}/flooring/{}", base_url, slug),
        last_modified: now,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.85,
    }));

    entries
}

/// The four dynamic groups, read concurrently as one attempt.
pub struct DynamicRoutes {
    pub services: Vec<SlugStamp>,
    pub cities: Vec<SlugStamp>,
    pub location_pages: Vec<SlugStamp>,
    pub posts: Vec<SlugStamp>,
}

pub async fn read_dynamic(store: &dyn ContentStore) -> StoreResult<DynamicRoutes> {
    let (services, cities, location_pages, posts) = tokio::try_join!(
        store.published_service_stamps(),
        store.published_city_stamps(),
        store.location_page_stamps(),
        store.published_post_stamps(),
    )?;
    Ok(DynamicRoutes {
        services,
        cities,
        location_pages,
        posts,
    })
}

fn stamped<'a>(
    base_url: &str,
    prefix: &str,
    stamps: &'a [SlugStamp],
    freq: ChangeFrequency,
    priority: f32,
) -> impl Iterator<Item = SitemapEntry> + 'a {
    let prefix = prefix.to_string();
    let base = base_url.to_string();
    stamps.iter().map(move |s| SitemapEntry {
        url: format!("{}{}{}", base, prefix, s.slug),
        last_modified: s.updated_at,
        change_frequency: freq,
        priority,
    })
}

/// Static entries followed by the dynamic groups, when they were read.
pub fn assemble(
    base_url: &str,
    now: DateTime<Utc>,
    dynamic: Option<&DynamicRoutes>,
) -> Vec<SitemapEntry> {
    let mut entries = static_entries(base_url, now);
    if let Some(d) = dynamic {
        entries.extend(stamped(base_url, "/services/", &d.services, ChangeFrequency::Monthly, 0.9));
        entries.extend(stamped(base_url, "/service-areas/", &d.cities, ChangeFrequency::Monthly, 0.85));
        entries.extend(stamped(base_url, "/", &d.location_pages, ChangeFrequency::Monthly, 0.8));
        entries.extend(stamped(base_url, "/blog/", &d.posts, ChangeFrequency::Weekly, 0.7));
    }
    entries
}

/// Build the full sitemap against the store, falling back to static entries.
pub async fn build(store: &dyn ContentStore, config: &SiteConfig) -> Vec<SitemapEntry> {
    let dynamic = match read_dynamic(store).await {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::warn!(error = %e, "sitemap dynamic routes unavailable, listing static routes only");
            None
        }
    };
    assemble(&config.site_url, Utc::now(), dynamic.as_ref())
}

pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.2}</priority>\n  </url>\n",
            escape_html(&entry.url),
            entry.last_modified.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

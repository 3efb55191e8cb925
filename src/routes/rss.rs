use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use crate::content::model::BlogPost;
use crate::content::or_default;
use crate::render::escape_html;
use crate::AppState;

const FEED_LIMIT: i64 = 50;

fn rfc822(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
}

fn feed_xml(base_url: &str, site_title: &str, posts: &[BlogPost]) -> String {
    let mut items = String::new();
    for post in posts {
        let post_url = format!("{}/blog/{}", base_url, post.slug);
        let published = post.published_at.unwrap_or(post.created_at);
        items.push_str(&format!(
            "    <item>\n\
                   <title>{}</title>\n\
                   <link>{}</link>\n\
                   <description>{}</description>\n\
                   <pubDate>{}</pubDate>\n\
                   <guid isPermaLink=\"true\">{}</guid>\n\
                 </item>\n",
            escape_html(&post.title),
            escape_html(&post_url),
            escape_html(&post.excerpt),
            rfc822(&published),
            escape_html(&post_url),
        ));
    }

    let feed_url = format!("{}/rss.xml", base_url);
    let blog_url = format!("{}/blog", base_url);

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>{}</title>
    <link>{}</link>
    <description>Flooring tips, project guides and local news</description>
    <language>en-us</language>
    <atom:link href="{}" rel="self" type="application/rss+xml"/>
    <lastBuildDate>{}</lastBuildDate>
{}  </channel>
</rss>"#,
        escape_html(site_title),
        escape_html(&blog_url),
        escape_html(&feed_url),
        posts
            .first()
            .map(|p| rfc822(&p.published_at.unwrap_or(p.created_at)))
            .unwrap_or_default(),
        items,
    )
}

/// GET /rss.xml
pub async fn rss_feed(State(state): State<AppState>) -> Response {
    let posts = or_default(state.store.published_posts(FEED_LIMIT)).await;
    let title = format!("{} Blog", state.config.business_name);
    let xml = feed_xml(&state.config.site_url, &title, &posts);

    (
        [
            (header::CONTENT_TYPE, "application/rss+xml; charset=utf-8"),
            (
                header::CACHE_CONTROL,
                "public, max-age=3600, stale-while-revalidate=600",
            ),
        ],
        xml,
    )
        .into_response()
}

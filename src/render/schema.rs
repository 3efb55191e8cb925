//! schema.org JSON-LD builders.

use serde_json::{json, Map, Value};

use super::or_placeholder;
use crate::config::SiteConfig;
use crate::content::codec::Faq;
use crate::content::model::City;

/// LocalBusiness for a city. The geo block appears only when the city has both
/// coordinates.
pub fn local_business_for_city(config: &SiteConfig, city: &City) -> Value {
    let mut schema = local_business_base(config);
    schema.insert(
        "address".to_string(),
        json!({
            "@type": "PostalAddress",
            "addressLocality": or_placeholder(Some(city.name.as_str()), "[City]"),
            "addressRegion": or_placeholder(Some(city.state.as_str()), "[State]"),
            "postalCode": or_placeholder(city.zip_code.as_deref(), "[ZIP]"),
            "addressCountry": "US",
        }),
    );
    if let Some((latitude, longitude)) = city.coordinates() {
        schema.insert(
            "geo".to_string(),
            json!({
                "@type": "GeoCoordinates",
                "latitude": latitude,
                "longitude": longitude,
            }),
        );
    }
    schema.insert(
        "areaServed".to_string(),
        json!({ "@type": "City", "name": city.name }),
    );
    Value::Object(schema)
}

/// LocalBusiness for the home page: placeholder address and aggregate rating.
pub fn local_business_home(config: &SiteConfig) -> Value {
    let mut schema = local_business_base(config);
    schema.insert(
        "address".to_string(),
        json!({
            "@type": "PostalAddress",
            "addressLocality": "[City]",
            "addressRegion": "[State]",
            "postalCode": "[ZIP]",
            "addressCountry": "US",
        }),
    );
    schema.insert(
        "aggregateRating".to_string(),
        json!({
            "@type": "AggregateRating",
            "ratingValue": "4.9",
            "reviewCount": "500",
        }),
    );
    Value::Object(schema)
}

fn local_business_base(config: &SiteConfig) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("@context".to_string(), json!("https://schema.org"));
    schema.insert("@type".to_string(), json!("LocalBusiness"));
    schema.insert("name".to_string(), json!(config.business_name));
    schema.insert("telephone".to_string(), json!(config.business_phone));
    schema.insert("url".to_string(), json!(config.site_url));
    schema.insert("priceRange".to_string(), json!("$$"));
    schema
}

/// Service offered in an area (`[City]` when the page is not city-specific).
pub fn service(config: &SiteConfig, name: &str, area: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "serviceType": name,
        "provider": {
            "@type": "LocalBusiness",
            "name": config.business_name,
            "telephone": config.business_phone,
        },
        "areaServed": { "@type": "City", "name": area },
    })
}

/// FAQPage for a list of questions. `None` when there is nothing to mark up.
pub fn faq(faqs: &[Faq]) -> Option<Value> {
    if faqs.is_empty() {
        return None;
    }
    let entities: Vec<Value> = faqs
        .iter()
        .map(|f| {
            json!({
                "@type": "Question",
                "name": f.question,
                "acceptedAnswer": { "@type": "Answer", "text": f.answer },
            })
        })
        .collect();
    Some(json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    }))
}

//! Hardcoded content used when the store cannot be read.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

use super::codec::{Faq, ProcessStep};
use super::model::{City, Service};

pub const EPOXY_SERVICE_SLUG: &str = "epoxy-flooring";

/// Map center used by the service-areas widget (Denver metro).
pub const MAP_CENTER: (f64, f64) = (39.65, -104.95);
pub const MAP_ZOOM: u8 = 9;

/// Entry of the static services menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuService {
    pub name: &'static str,
    pub slug: &'static str,
    pub short_description: &'static str,
}

pub static MENU_SERVICES: &[MenuService] = &[
    MenuService {
        name: "Hardwood Refinishing",
        slug: "hardwood-refinishing",
        short_description: "Sand, stain and refinish worn hardwood floors to a like-new finish.",
    },
    MenuService {
        name: "Hardwood Installation",
        slug: "hardwood-installation",
        short_description: "Site-finished and pre-finished hardwood installed by certified crews.",
    },
    MenuService {
        name: "Luxury Vinyl Plank",
        slug: "luxury-vinyl",
        short_description: "Waterproof, realistic vinyl plank for kitchens, basements and rentals.",
    },
    MenuService {
        name: "Tile Installation",
        slug: "tile-installation",
        short_description: "Porcelain and ceramic tile for floors, showers and backsplashes.",
    },
    MenuService {
        name: "Epoxy Flooring",
        slug: EPOXY_SERVICE_SLUG,
        short_description: "Chemical-resistant epoxy coatings for garages and commercial spaces.",
    },
    MenuService {
        name: "Floor Repair",
        slug: "floor-repair",
        short_description: "Board replacement, water damage repair and squeak fixes.",
    },
];

/// Coordinates by city slug, for records that were saved without them.
pub static CITY_COORDINATES: &[(&str, f64, f64)] = &[
    ("denver", 39.7392, -104.9903),
    ("aurora", 39.7294, -104.8319),
    ("lakewood", 39.7047, -105.0814),
    ("littleton", 39.6133, -105.0166),
    ("centennial", 39.5807, -104.8772),
    ("englewood", 39.6478, -104.9878),
    ("arvada", 39.8028, -105.0875),
    ("highlands-ranch", 39.5539, -104.9694),
];

pub fn coordinates_for(slug: &str) -> Option<(f64, f64)> {
    CITY_COORDINATES
        .iter()
        .find(|(s, _, _)| *s == slug)
        .map(|(_, lat, lng)| (*lat, *lng))
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn fallback_city(n: u128, name: &str, slug: &str, zip: &str, neighborhoods: &[&str]) -> City {
    let coords = coordinates_for(slug);
    City {
        id: Uuid::from_u128(n),
        name: name.to_string(),
        state: "CO".to_string(),
        slug: slug.to_string(),
        zip_code: Some(zip.to_string()),
        latitude: coords.map(|c| c.0),
        longitude: coords.map(|c| c.1),
        neighborhoods: neighborhoods.iter().map(|s| s.to_string()).collect(),
        description: None,
        local_content: None,
        meta_title: None,
        meta_description: None,
        keywords: None,
        published: true,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub static FALLBACK_CITIES: Lazy<Vec<City>> = Lazy::new(|| {
    vec![
        fallback_city(1, "Denver", "denver", "80202", &["Capitol Hill", "Highlands", "Washington Park", "Cherry Creek", "Stapleton"]),
        fallback_city(2, "Aurora", "aurora", "80012", &["Southlands", "Saddle Rock", "Tallyn's Reach"]),
        fallback_city(3, "Lakewood", "lakewood", "80226", &["Belmar", "Green Mountain", "Bear Creek"]),
        fallback_city(4, "Littleton", "littleton", "80120", &["Downtown Littleton", "Ken Caryl", "Columbine"]),
        fallback_city(5, "Centennial", "centennial", "80112", &["Willow Creek", "Piney Creek"]),
        fallback_city(6, "Englewood", "englewood", "80110", &["Cherry Hills Village", "Bates-Logan"]),
        fallback_city(7, "Arvada", "arvada", "80002", &["Olde Town", "Candelas", "Ralston Creek"]),
        fallback_city(8, "Highlands Ranch", "highlands-ranch", "80129", &["Northridge", "Westridge", "Backcountry"]),
    ]
});

pub fn fallback_city_by_slug(slug: &str) -> Option<City> {
    FALLBACK_CITIES.iter().find(|c| c.slug == slug).cloned()
}

pub static FALLBACK_EPOXY_SERVICE: Lazy<Service> = Lazy::new(|| Service {
    id: Uuid::from_u128(100),
    name: "Epoxy Flooring".to_string(),
    slug: EPOXY_SERVICE_SLUG.to_string(),
    short_description: "Chemical-resistant epoxy coatings for garages and commercial spaces.".to_string(),
    description: "Professional epoxy floor coatings that resist stains, chemicals and hot tires.".to_string(),
    meta_title: None,
    meta_description: None,
    keywords: None,
    benefits: vec![
        "Resistant to oil, chemicals and hot-tire pickup".to_string(),
        "Seamless surface that is easy to clean".to_string(),
        "Bright, reflective finish that lightens the space".to_string(),
        "Decorative flake and metallic options".to_string(),
    ],
    process: vec![
        ProcessStep {
            step: 1,
            title: "Surface preparation".to_string(),
            description: "Diamond grinding opens the concrete so the coating bonds.".to_string(),
        },
        ProcessStep {
            step: 2,
            title: "Crack repair".to_string(),
            description: "Cracks and spalls are filled and ground flush.".to_string(),
        },
        ProcessStep {
            step: 3,
            title: "Coating".to_string(),
            description: "Base coat, optional flake broadcast and a clear top coat.".to_string(),
        },
    ],
    faqs: vec![
        Faq {
            question: "How long does epoxy flooring last?".to_string(),
            answer: "A properly prepared and installed epoxy floor typically lasts 10 to 20 years in a residential garage.".to_string(),
        },
        Faq {
            question: "How soon can I park on it?".to_string(),
            answer: "Foot traffic is fine after 24 hours; vehicles can return after about 72 hours.".to_string(),
        },
    ],
    published: true,
    featured: false,
    enable_faq_schema: true,
    enable_service_schema: true,
    created_at: epoch(),
    updated_at: epoch(),
});

pub fn fallback_service_by_slug(slug: &str) -> Option<Service> {
    (slug == EPOXY_SERVICE_SLUG).then(|| FALLBACK_EPOXY_SERVICE.clone())
}

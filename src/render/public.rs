//! Public marketing pages.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use super::{escape_html, line_breaks, or_placeholder, paragraphs, sanitize, schema, Page, PageMeta};
use crate::config::SiteConfig;
use crate::content::codec::split_keywords;
use crate::content::defaults::{coordinates_for, MenuService, MAP_CENTER, MAP_ZOOM};
use crate::content::model::{BlogPost, City, PostWithCity, Service};

const REFINISHING_SLUG: &str = "hardwood-refinishing";

/// What a service listing or the estimate form needs to know about a service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub name: String,
    pub slug: String,
    pub short_description: String,
}

impl From<&Service> for ServiceCard {
    fn from(s: &Service) -> Self {
        ServiceCard {
            name: s.name.clone(),
            slug: s.slug.clone(),
            short_description: s.short_description.clone(),
        }
    }
}

impl From<&MenuService> for ServiceCard {
    fn from(s: &MenuService) -> Self {
        ServiceCard {
            name: s.name.to_string(),
            slug: s.slug.to_string(),
            short_description: s.short_description.to_string(),
        }
    }
}

/// Title/description pair with the record's own overrides taking precedence.
fn meta(
    title: &str,
    title_override: Option<&str>,
    description: &str,
    description_override: Option<&str>,
    keywords: Option<&str>,
    canonical: String,
) -> PageMeta {
    let pick = |over: Option<&str>, base: &str| match over.map(str::trim) {
        Some(o) if !o.is_empty() => o.to_string(),
        _ => base.to_string(),
    };
    PageMeta {
        title: pick(title_override, title),
        description: pick(description_override, description),
        keywords: split_keywords(keywords),
        canonical: Some(canonical),
        noindex: false,
    }
}

/// "Name, ST" with placeholders for blank parts.
pub fn place_label(name: &str, state: &str) -> String {
    format!(
        "{}, {}",
        or_placeholder(Some(name), "[City]"),
        or_placeholder(Some(state), "[State]")
    )
}

pub fn city_label(city: &City) -> String {
    place_label(&city.name, &city.state)
}

/// Long-form US date, e.g. "March 4, 2024".
pub fn long_date(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}

fn cta(label: &str) -> String {
    format!(
        "<a class=\"cta-button\" href=\"/free-estimate\">{}</a>",
        escape_html(label)
    )
}

fn phone_link(config: &SiteConfig) -> String {
    format!(
        "<a class=\"cta-button-secondary\" href=\"tel:{0}\">Call {0}</a>",
        escape_html(&config.business_phone)
    )
}

fn chips(items: &[String], class: &str) -> String {
    let mut html = format!("<ul class=\"{}\">", class);
    for item in items {
        html.push_str(&format!("<li><span class=\"chip\">{}</span></li>", escape_html(item)));
    }
    html.push_str("</ul>");
    html
}

fn checklist(items: &[String]) -> String {
    let mut html = String::from("<ul class=\"checklist\">");
    for item in items {
        html.push_str(&format!("<li>{}</li>", escape_html(item)));
    }
    html.push_str("</ul>");
    html
}

pub fn home(config: &SiteConfig) -> Page {
    let body = format!(
        r#"<section class="hero">
<h1>Professional Flooring Installation &amp; Services</h1>
<p>Hardwood, luxury vinyl, tile, epoxy and refinishing from {name}. Serving [City] and surrounding areas.</p>
{cta} {phone}
</section>
<section class="why-us">
<h2>Why Choose Us</h2>
<ul class="checklist"><li>Licensed and insured crews</li><li>Free in-home estimates</li><li>Workmanship warranty on every install</li></ul>
</section>
<section class="cta-band">
<h2>Ready to Transform Your Floors?</h2>
<p>Get a free estimate today and see how we can help bring your vision to life.</p>
{cta}
</section>"#,
        name = escape_html(&config.business_name),
        cta = cta("Get Free Estimate"),
        phone = phone_link(config),
    );

    Page {
        meta: PageMeta {
            title: "Professional Flooring Installation & Services".to_string(),
            description: "Expert flooring installation and services including hardwood, vinyl, tile, epoxy, and refinishing. Free estimates available. Serving [City] and surrounding areas.".to_string(),
            keywords: [
                "flooring installation",
                "hardwood flooring",
                "vinyl flooring",
                "tile installation",
                "epoxy flooring",
                "floor refinishing",
                "flooring contractor",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            canonical: Some("/".to_string()),
            noindex: false,
        },
        structured_data: vec![schema::local_business_home(config)],
        body,
    }
}

pub fn services_index(cards: &[ServiceCard]) -> Page {
    let mut grid = String::from("<div class=\"service-grid\">");
    for card in cards {
        grid.push_str(&format!(
            "<a class=\"service-card\" href=\"/services/{slug}\"><h2>{name}</h2><p>{desc}</p><span>Learn More &rarr;</span></a>",
            slug = escape_html(&card.slug),
            name = escape_html(&card.name),
            desc = escape_html(&card.short_description),
        ));
    }
    grid.push_str("</div>");

    let body = format!(
        r#"<section>
<h1>Our Flooring Services</h1>
<p>Expert installation and services for all your flooring needs. From hardwood to epoxy, we have got you covered.</p>
</section>
<section>{grid}</section>
<section class="cta-band">
<h2>Not Sure Which Service You Need?</h2>
<p>Our experts can help you choose the perfect flooring solution for your space.</p>
{cta}
</section>"#,
        grid = grid,
        cta = cta("Get Free Consultation"),
    );

    Page {
        meta: PageMeta {
            title: "Flooring Services".to_string(),
            description: "Hardwood installation and refinishing, luxury vinyl, tile and epoxy flooring. Free estimates.".to_string(),
            keywords: Vec::new(),
            canonical: Some("/services".to_string()),
            noindex: false,
        },
        structured_data: Vec::new(),
        body,
    }
}

pub fn service_detail(config: &SiteConfig, service: &Service, estimate_services: &[ServiceCard]) -> Page {
    let refinishing = service.slug == REFINISHING_SLUG;
    let name = escape_html(&service.name);

    let (heading, tagline) = if refinishing {
        (
            "Professional Hardwood Floor Refinishing".to_string(),
            "<p class=\"tagline\">Bring Your Hardwood Floors Back to Life</p>".to_string(),
        )
    } else {
        (name.clone(), String::new())
    };
    let benefits_heading = if refinishing {
        "Benefits of Professional Refinishing".to_string()
    } else {
        format!("Benefits of {}", name)
    };
    let (process_heading, process_intro) = if refinishing {
        (
            "Our Professional Refinishing Process",
            "Here&#39;s how we deliver outstanding results with precision and care:",
        )
    } else {
        (
            "Our Installation Process",
            "We follow a proven process to ensure quality results every time",
        )
    };

    let mut steps = String::from("<ol class=\"process\">");
    for step in &service.process {
        steps.push_str(&format!(
            "<li><span class=\"step\">{}</span><h3>{}</h3><p>{}</p></li>",
            step.step,
            escape_html(&step.title),
            escape_html(&step.description)
        ));
    }
    steps.push_str("</ol>");

    let faq_section = if service.faqs.is_empty() {
        String::new()
    } else {
        let mut html = String::from("<section class=\"faqs\"><h2>Frequently Asked Questions</h2>");
        for f in &service.faqs {
            html.push_str(&format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                escape_html(&f.question),
                escape_html(&f.answer)
            ));
        }
        html.push_str("</section>");
        html
    };

    let body = format!(
        r#"<section class="service-hero">
<h1>{heading}</h1>
{tagline}
<div class="description">{description}</div>
{cta} {phone}
<aside class="estimate">
<h2>Get Your Free Flooring Estimate</h2>
<p>Fill out the form below and we&#39;ll contact you within 24 hours</p>
{form}
</aside>
</section>
<section class="benefits">
<h2>{benefits_heading}</h2>
{benefits}
</section>
<section class="process">
<h2>{process_heading}</h2>
<p>{process_intro}</p>
{steps}
</section>
<section class="why-us">
<h2>Why Choose Us for {name}?</h2>
<div><h3>Experienced Team</h3><p>Our certified installers have years of experience with {lower}</p></div>
<div><h3>Warranty Protected</h3><p>All our installations come with comprehensive warranties</p></div>
<div><h3>Quality Materials</h3><p>We only work with trusted suppliers and premium materials</p></div>
</section>
{faq_section}"#,
        heading = heading,
        tagline = tagline,
        description = paragraphs(&service.description),
        cta = cta("Get Free Estimate"),
        phone = phone_link(config),
        form = estimate_form_fields(estimate_services, Some(&service.slug)),
        benefits_heading = benefits_heading,
        benefits = checklist(&service.benefits),
        process_heading = process_heading,
        process_intro = process_intro,
        steps = steps,
        name = name,
        lower = escape_html(&service.name.to_lowercase()),
        faq_section = faq_section,
    );

    let mut structured_data = Vec::new();
    if service.enable_service_schema {
        structured_data.push(schema::service(config, &service.name, "[City]"));
    }
    if service.enable_faq_schema {
        structured_data.extend(schema::faq(&service.faqs));
    }

    Page {
        meta: meta(
            &service.name,
            service.meta_title.as_deref(),
            &service.description,
            service.meta_description.as_deref(),
            service.keywords.as_deref(),
            format!("/services/{}", service.slug),
        ),
        structured_data,
        body,
    }
}

/// Cities grouped under their upper-cased first letter, keeping input order.
pub fn group_by_letter(cities: &[City]) -> Vec<(char, Vec<&City>)> {
    let mut groups: Vec<(char, Vec<&City>)> = Vec::new();
    for city in cities {
        let letter = city
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('#');
        match groups.iter_mut().find(|(l, _)| *l == letter) {
            Some((_, list)) => list.push(city),
            None => groups.push((letter, vec![city])),
        }
    }
    groups.sort_by_key(|(l, _)| *l);
    groups
}

/// Map markers: cities with coordinates, filling gaps from the static table.
pub fn map_points(cities: &[City]) -> Vec<Value> {
    cities
        .iter()
        .filter_map(|city| {
            let known = coordinates_for(&city.slug);
            let lat = city.latitude.or(known.map(|c| c.0))?;
            let lng = city.longitude.or(known.map(|c| c.1))?;
            Some(json!({
                "name": city.name,
                "state": city.state,
                "slug": city.slug,
                "latitude": lat,
                "longitude": lng,
            }))
        })
        .collect()
}

pub fn service_areas(cities: &[City]) -> Page {
    let list = if cities.is_empty() {
        "<p>No service areas configured yet.</p>".to_string()
    } else {
        let mut html = String::from("<div class=\"city-index\">");
        for (letter, group) in group_by_letter(cities) {
            html.push_str(&format!("<div><div class=\"letter\">{}</div><ul>", letter));
            for city in group {
                html.push_str(&format!(
                    "<li><a href=\"/service-areas/{}\">{}</a></li>",
                    escape_html(&city.slug),
                    escape_html(&city_label(city))
                ));
            }
            html.push_str("</ul></div>");
        }
        html.push_str("</div>");
        html
    };

    let map_data = json!({
        "center": [MAP_CENTER.0, MAP_CENTER.1],
        "zoom": MAP_ZOOM,
        "cities": map_points(cities),
    });

    let body = format!(
        r#"<section>
<h1>Our Service Areas</h1>
<p>We proudly serve Denver and surrounding Colorado areas with professional flooring installation and services.</p>
<p class="count">{count} cities and communities</p>
</section>
<section class="areas">
<div class="map-column">
<h2>Find us on the map</h2>
<div id="service-areas-map" data-map="{map}"></div>
</div>
<div class="list-column">
<h2>Cities we serve</h2>
{list}
</div>
</section>
<section class="cta-band">
<h2>Don&#39;t See Your Area?</h2>
<p>Contact us. We may still be able to help with your project.</p>
{cta}
</section>"#,
        count = cities.len(),
        map = escape_html(&map_data.to_string()),
        list = list,
        cta = cta("Get Free Estimate"),
    );

    Page {
        meta: PageMeta {
            title: "Service Areas".to_string(),
            description: "Flooring installation and refinishing across Denver and the surrounding Colorado communities.".to_string(),
            keywords: Vec::new(),
            canonical: Some("/service-areas".to_string()),
            noindex: false,
        },
        structured_data: Vec::new(),
        body,
    }
}

pub fn city_detail(city: &City) -> Page {
    let label = city_label(city);
    let name = escape_html(or_placeholder(Some(city.name.as_str()), "[City]"));

    let description = city.description.as_deref().filter(|d| !d.trim().is_empty());
    let local = city.local_content.as_deref().filter(|d| !d.trim().is_empty());
    let about = if description.is_some() || local.is_some() {
        format!(
            "<section class=\"about-city\">{}{}</section>",
            description
                .map(|d| format!("<p>{}</p>", escape_html(d)))
                .unwrap_or_default(),
            local
                .map(|l| format!("<div class=\"local-content\">{}</div>", sanitize(l)))
                .unwrap_or_default(),
        )
    } else {
        String::new()
    };

    let neighborhoods = if city.neighborhoods.is_empty() {
        String::new()
    } else {
        format!(
            "<section><h2>Areas we serve near {}</h2>{}</section>",
            name,
            chips(&city.neighborhoods, "neighborhoods")
        )
    };

    let body = format!(
        r#"<section>
<a href="/service-areas">All service areas</a>
<h1>{label}</h1>
<p>We proudly serve {name} and surrounding areas with professional flooring installation and refinishing.</p>
</section>
{about}
{neighborhoods}
<section class="cta-band">
<h2>Get a free estimate in {name}</h2>
<p>Professional hardwood refinishing, new flooring installation, and repair services. Contact us for a free quote.</p>
{cta}
<p><a href="/flooring-installer-{slug}">Flooring installer in {name}</a></p>
</section>"#,
        label = escape_html(&label),
        name = name,
        about = about,
        neighborhoods = neighborhoods,
        cta = cta("Get Free Estimate"),
        slug = escape_html(&city.slug),
    );

    Page {
        meta: meta(
            &format!("Flooring Services in {}", label),
            city.meta_title.as_deref(),
            &format!(
                "Professional flooring installation and refinishing in {}. Free estimates.",
                label
            ),
            city.meta_description.as_deref(),
            city.keywords.as_deref(),
            format!("/service-areas/{}", city.slug),
        ),
        structured_data: Vec::new(),
        body,
    }
}

pub fn city_landing(config: &SiteConfig, city: &City, services: &[Service]) -> Page {
    let label = city_label(city);
    let name = escape_html(or_placeholder(Some(city.name.as_str()), "[City]"));
    let state = escape_html(or_placeholder(Some(city.state.as_str()), "[State]"));

    let intro = match city.description.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(d) => escape_html(d),
        None => format!(
            "Professional flooring installation and services in {} and surrounding areas. Expert installation for hardwood, vinyl, tile, epoxy, and more. Free estimates available.",
            name
        ),
    };

    let mut grid = String::from("<div class=\"service-grid\">");
    for service in services {
        grid.push_str(&format!(
            "<a class=\"service-card\" href=\"/services/{}\"><h3>{}</h3><p>{}</p></a>",
            escape_html(&service.slug),
            escape_html(&service.name),
            escape_html(&service.short_description)
        ));
    }
    grid.push_str("</div>");

    let neighborhoods = if city.neighborhoods.is_empty() {
        String::new()
    } else {
        format!(
            "<section><h2>Neighborhoods We Serve in {}</h2>{}</section>",
            name,
            chips(&city.neighborhoods, "neighborhoods")
        )
    };

    let local = city
        .local_content
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .map(|l| format!("<section class=\"local-content\">{}</section>", sanitize(l)))
        .unwrap_or_default();

    let body = format!(
        r#"<section>
<h1>Flooring Installer in {label}</h1>
<p>{intro}</p>
{cta} {phone}
</section>
<section>
<h2>Flooring Services in {name}</h2>
<p>We offer comprehensive flooring services throughout {name} and the surrounding {state} area.</p>
{grid}
</section>
{neighborhoods}
{local}
<section class="cta-band">
<h2>Ready to Start Your Project in {name}?</h2>
{cta}
</section>"#,
        label = escape_html(&label),
        intro = intro,
        cta = cta("Get Free Estimate"),
        phone = phone_link(config),
        name = name,
        state = state,
        grid = grid,
        neighborhoods = neighborhoods,
        local = local,
    );

    Page {
        meta: meta(
            &format!("Flooring Installer in {}", label),
            city.meta_title.as_deref(),
            &format!(
                "Professional flooring installation services in {}. Hardwood, vinyl, tile, epoxy, and refinishing. Free estimates available.",
                label
            ),
            city.meta_description.as_deref(),
            city.keywords.as_deref(),
            format!("/flooring-installer-{}", city.slug),
        ),
        structured_data: vec![schema::local_business_for_city(config, city)],
        body,
    }
}

pub fn epoxy_landing(config: &SiteConfig, city: &City, service: &Service) -> Page {
    let label = city_label(city);
    let raw_name = or_placeholder(Some(city.name.as_str()), "[City]");
    let name = escape_html(raw_name);
    let state = escape_html(or_placeholder(Some(city.state.as_str()), "[State]"));

    let body = format!(
        r#"<section>
<h1>Epoxy Flooring Installation in {label}</h1>
<p>Professional epoxy floor coating services in {name}. Durable, chemical-resistant floors for garages and commercial spaces.</p>
{cta}
</section>
<section>
<h2>Epoxy Flooring Services in {name}</h2>
<p>Transform your {name} garage or commercial space with durable epoxy flooring. Our expert team provides professional epoxy installation throughout {name} and surrounding {state} areas.</p>
<h3>Benefits of Epoxy Flooring</h3>
{benefits}
<h3>Serving {name} Areas</h3>
<p>We provide epoxy flooring services throughout {name}, including:</p>
{neighborhoods}
</section>
<section class="cta-band">
<h2>Ready for Epoxy Flooring in {name}?</h2>
<p>Get a free estimate for your epoxy flooring project.</p>
{cta}
</section>"#,
        label = escape_html(&label),
        name = name,
        state = state,
        cta = cta("Get Free Estimate"),
        benefits = checklist(&service.benefits),
        neighborhoods = checklist(&city.neighborhoods),
    );

    let keywords = vec![
        format!("epoxy flooring {}", raw_name),
        format!("epoxy coating {}", raw_name),
        format!("garage floor {}", raw_name),
    ];

    let mut structured_data = vec![schema::service(config, "Epoxy Flooring Installation", raw_name)];
    structured_data.extend(schema::faq(&service.faqs));

    Page {
        meta: PageMeta {
            title: format!("Epoxy Flooring Installation in {}", label),
            description: format!(
                "Professional epoxy floor coating services in {}. Durable garage and commercial epoxy flooring. Free estimates available.",
                label
            ),
            keywords,
            canonical: Some(format!("/epoxy-flooring-{}", city.slug)),
            noindex: false,
        },
        structured_data,
        body,
    }
}

pub fn blog_index(posts: &[BlogPost]) -> Page {
    let list = if posts.is_empty() {
        "<p>No blog posts yet. Check back soon!</p>".to_string()
    } else {
        let mut html = String::from("<div class=\"post-grid\">");
        for post in posts {
            let date = post
                .published_at
                .as_ref()
                .map(long_date)
                .unwrap_or_default();
            html.push_str(&format!(
                "<a class=\"post-card\" href=\"/blog/{slug}\">{category}<h2>{title}</h2><p>{excerpt}</p><time>{date}</time></a>",
                slug = escape_html(&post.slug),
                category = post
                    .category
                    .as_deref()
                    .map(|c| format!("<span class=\"badge\">{}</span>", escape_html(c)))
                    .unwrap_or_default(),
                title = escape_html(&post.title),
                excerpt = escape_html(&post.excerpt),
                date = date,
            ));
        }
        html.push_str("</div>");
        html
    };

    Page {
        meta: PageMeta {
            title: "Flooring Blog".to_string(),
            description: "Flooring tips, project guides and local news.".to_string(),
            keywords: Vec::new(),
            canonical: Some("/blog".to_string()),
            noindex: false,
        },
        structured_data: Vec::new(),
        body: format!(
            "<section><h1>Flooring Tips &amp; Insights</h1><p>Expert advice for choosing, installing and caring for your floors.</p></section>\n<section>{}</section>",
            list
        ),
    }
}

pub fn blog_detail(entry: &PostWithCity) -> Page {
    let post = &entry.post;

    let category = post
        .category
        .as_deref()
        .map(|c| format!("<span class=\"badge\">{}</span>", escape_html(c)))
        .unwrap_or_default();
    let date = post
        .published_at
        .as_ref()
        .map(long_date)
        .unwrap_or_else(|| "Not published".to_string());
    let city = entry
        .city
        .as_ref()
        .map(|c| {
            format!(
                " <span>&bull;</span> <span>{}</span>",
                escape_html(&place_label(&c.name, &c.state))
            )
        })
        .unwrap_or_default();
    let image = post
        .featured_image
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .map(|src| {
            format!(
                "<img class=\"featured\" src=\"{}\" alt=\"{}\" />",
                escape_html(src),
                escape_html(&post.title)
            )
        })
        .unwrap_or_default();
    let tags = if post.tags.is_empty() {
        String::new()
    } else {
        format!("<div class=\"tags\">{}</div>", chips(&post.tags, "tag-list"))
    };

    let body = format!(
        r#"<section>
{category}
<h1>{title}</h1>
<div class="byline"><time>{date}</time>{city}</div>
</section>
<article>
{image}
<div class="content">{content}</div>
{tags}
</article>
<section class="cta-band">
<h2>Ready to Transform Your Floors?</h2>
<p>Get a free estimate for your flooring project today.</p>
{cta}
</section>"#,
        category = category,
        title = escape_html(&post.title),
        date = escape_html(&date),
        city = city,
        image = image,
        content = line_breaks(&post.content),
        tags = tags,
        cta = cta("Get Free Estimate"),
    );

    Page {
        meta: meta(
            &post.title,
            post.meta_title.as_deref(),
            &post.excerpt,
            post.meta_description.as_deref(),
            post.keywords.as_deref(),
            format!("/blog/{}", post.slug),
        ),
        structured_data: Vec::new(),
        body,
    }
}

/// The estimate `<form>`, preselecting a service when given.
pub fn estimate_form_fields(services: &[ServiceCard], preselected: Option<&str>) -> String {
    let mut options = String::from("<option value=\"\">Select a service</option>");
    for service in services {
        let selected = if preselected == Some(service.slug.as_str()) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(&service.slug),
            selected,
            escape_html(&service.name)
        ));
    }

    format!(
        r#"<form class="estimate-form" method="post" action="/free-estimate">
<label>Name <input name="name" required /></label>
<label>Email <input name="email" type="email" /></label>
<label>Phone <input name="phone" type="tel" /></label>
<label>Service <select name="service">{options}</select></label>
<label>City <input name="city" /></label>
<label>Project details <textarea name="message"></textarea></label>
<button type="submit">Request Free Estimate</button>
</form>"#,
        options = options
    )
}

pub fn estimate_page(services: &[ServiceCard], preselected: Option<&str>, error: Option<&str>) -> Page {
    let error = error
        .map(|e| format!("<p class=\"form-error\" role=\"alert\">{}</p>", escape_html(e)))
        .unwrap_or_default();
    Page {
        meta: PageMeta {
            title: "Free Flooring Estimate".to_string(),
            description: "Request a free, no-obligation flooring estimate. We respond within 24 hours.".to_string(),
            keywords: Vec::new(),
            canonical: Some("/free-estimate".to_string()),
            noindex: false,
        },
        structured_data: Vec::new(),
        body: format!(
            "<section><h1>Get Your Free Flooring Estimate</h1><p>Fill out the form below and we&#39;ll contact you within 24 hours</p>{}{}</section>",
            error,
            estimate_form_fields(services, preselected)
        ),
    }
}

pub fn estimate_received(name: &str) -> Page {
    Page {
        meta: PageMeta {
            title: "Thank You".to_string(),
            noindex: true,
            ..PageMeta::default()
        },
        structured_data: Vec::new(),
        body: format!(
            "<section><h1>Thank you, {}!</h1><p>We received your request and will contact you within 24 hours.</p><p><a href=\"/\">Back to home</a></p></section>",
            escape_html(name.trim())
        ),
    }
}

pub fn estimate_failed(config: &SiteConfig) -> Page {
    Page {
        meta: PageMeta {
            title: "Something Went Wrong".to_string(),
            noindex: true,
            ..PageMeta::default()
        },
        structured_data: Vec::new(),
        body: format!(
            "<section><h1>Sorry, we couldn&#39;t save your request</h1><p>Please call us at <a href=\"tel:{0}\">{0}</a> and we&#39;ll set up your estimate right away.</p></section>",
            escape_html(&config.business_phone)
        ),
    }
}

pub fn not_found() -> Page {
    Page {
        meta: PageMeta {
            title: "Page Not Found".to_string(),
            noindex: true,
            ..PageMeta::default()
        },
        structured_data: Vec::new(),
        body: "<section><h1>Page Not Found</h1><p>The page you are looking for does not exist or has moved.</p><p><a href=\"/\">Back to home</a></p></section>".to_string(),
    }
}

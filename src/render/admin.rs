//! Admin back-office screens.
//!
//! Forms submit JSON through [`FORM_SCRIPT`]. Structured fields are edited one
//! entry per row (a `data-list` container of `.entry` rows, each field in its
//! own input) and sent as JSON-encoded text, the same shape the store persists.

use chrono::{DateTime, Utc};

use super::{escape_html, Page, PageMeta};
use crate::content::codec::{Faq, ProcessStep};
use crate::content::model::{BlogPost, City, Lead, LeadStats, LeadStatus, Service};

/// Everything the dashboard shows. `Default` is the zeroed dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub services: i64,
    pub cities: i64,
    pub published_posts: i64,
    pub leads: i64,
    pub new_leads: i64,
    pub recent_leads: Vec<Lead>,
}

const FORM_SCRIPT: &str = r#"<script>
(function () {
  var form = document.getElementById('admin-form');
  if (!form) return;
  form.querySelectorAll('[data-normalize]').forEach(function (el) {
    el.addEventListener('input', function () {
      el.value = el.dataset.normalize === 'slug'
        ? el.value.toLowerCase().replace(/\s+/g, '-')
        : el.value.toUpperCase();
    });
  });
  form.querySelectorAll('[data-list]').forEach(function (list) {
    list.addEventListener('click', function (e) {
      if (e.target.matches('[data-add]')) {
        var rows = list.querySelectorAll('.entry');
        var row = rows[rows.length - 1].cloneNode(true);
        row.querySelectorAll('input, textarea').forEach(function (el) { el.value = ''; });
        e.target.before(row);
      } else if (e.target.matches('[data-remove]')) {
        var entry = e.target.closest('.entry');
        if (list.querySelectorAll('.entry').length > 1) entry.remove();
        else entry.querySelectorAll('input, textarea').forEach(function (el) { el.value = ''; });
      }
    });
  });
  function collect(list) {
    var items = [];
    list.querySelectorAll('.entry').forEach(function (row) {
      function field(name) {
        var el = row.querySelector('[data-field="' + name + '"]');
        return el ? el.value.trim() : '';
      }
      var shape = list.dataset.shape;
      if (shape === 'steps') {
        if (field('title')) items.push({ step: items.length + 1, title: field('title'), description: field('description') });
      } else if (shape === 'faqs') {
        if (field('question')) items.push({ question: field('question'), answer: field('answer') });
      } else if (field('value')) {
        items.push(field('value'));
      }
    });
    return JSON.stringify(items);
  }
  form.addEventListener('submit', async function (e) {
    e.preventDefault();
    var body = {};
    Array.prototype.forEach.call(form.elements, function (el) {
      if (!el.name) return;
      var kind = el.dataset.kind;
      if (el.type === 'checkbox') body[el.name] = el.checked;
      else if (kind === 'number') body[el.name] = el.value.trim() === '' ? null : parseFloat(el.value);
      else if (kind === 'nullable') body[el.name] = el.value === '' ? null : el.value;
      else body[el.name] = el.value;
    });
    form.querySelectorAll('[data-list]').forEach(function (list) {
      body[list.dataset.list] = collect(list);
    });
    try {
      var res = await fetch(form.dataset.endpoint, {
        method: form.dataset.method,
        headers: { 'Content-Type': 'application/json' },
        credentials: 'same-origin',
        body: JSON.stringify(body)
      });
      if (res.ok) window.location.href = form.dataset.redirect;
      else alert('Error saving ' + form.dataset.label);
    } catch (err) {
      alert('Error saving ' + form.dataset.label);
    }
  });
})();
</script>"#;

const LOGOUT_SCRIPT: &str = r#"<script>
document.getElementById('logout').addEventListener('click', async function () {
  await fetch('/api/admin/logout', { method: 'POST', credentials: 'same-origin' });
  window.location.href = '/admin/login';
});
</script>"#;

const LIST_SCRIPT: &str = r#"<script>
document.querySelectorAll('[data-delete]').forEach(function (btn) {
  btn.addEventListener('click', async function () {
    if (!confirm('Delete this item?')) return;
    var res = await fetch(btn.dataset.delete, { method: 'DELETE', credentials: 'same-origin' });
    if (res.ok) window.location.reload();
    else alert('Error deleting item');
  });
});
document.querySelectorAll('[data-lead]').forEach(function (sel) {
  sel.addEventListener('change', async function () {
    var res = await fetch('/api/admin/leads/' + sel.dataset.lead, {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      credentials: 'same-origin',
      body: JSON.stringify({ status: sel.value })
    });
    if (res.ok) window.location.reload();
    else alert('Error saving lead');
  });
});
</script>"#;

fn admin_page(title: &str, content: String) -> Page {
    Page {
        meta: PageMeta {
            title: format!("{} | Admin", title),
            noindex: true,
            ..PageMeta::default()
        },
        structured_data: Vec::new(),
        body: format!(
            r#"<nav class="admin-nav"><a href="/admin">Dashboard</a> <a href="/admin/services">Services</a> <a href="/admin/cities">Cities</a> <a href="/admin/blog">Blog</a> <a href="/admin/leads">Leads</a>
<button type="button" id="logout" class="logout">Log out</button></nav>
<div class="admin-content">
{}
</div>
{}"#,
            content, LOGOUT_SCRIPT
        ),
    }
}

fn short_date(dt: &DateTime<Utc>) -> String {
    dt.format("%-m/%-d/%Y").to_string()
}

fn publish_badge(published: bool) -> &'static str {
    if published {
        "<span class=\"badge badge-published\">Published</span>"
    } else {
        "<span class=\"badge badge-draft\">Draft</span>"
    }
}

fn status_badge(status: LeadStatus) -> String {
    format!(
        "<span class=\"badge status-{}\">{}</span>",
        status.as_str().to_lowercase(),
        status.as_str()
    )
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn opt(value: &Option<String>) -> String {
    escape_html(value.as_deref().unwrap_or(""))
}

pub fn login_page() -> Page {
    let body = r#"<section class="login">
<h1>Admin Login</h1>
<form id="login-form">
<label>Email <input name="email" type="email" required /></label>
<label>Password <input name="password" type="password" required /></label>
<button type="submit">Sign In</button>
</form>
<p id="login-error" class="form-error" hidden>Invalid email or password</p>
</section>
<script>
document.getElementById('login-form').addEventListener('submit', async function (e) {
  e.preventDefault();
  var f = e.target;
  var res = await fetch('/api/admin/login', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    credentials: 'same-origin',
    body: JSON.stringify({ email: f.email.value, password: f.password.value })
  });
  if (res.ok) window.location.href = '/admin';
  else document.getElementById('login-error').hidden = false;
});
</script>"#;

    Page {
        meta: PageMeta {
            title: "Admin Login".to_string(),
            noindex: true,
            ..PageMeta::default()
        },
        structured_data: Vec::new(),
        body: body.to_string(),
    }
}

fn leads_table(leads: &[Lead], editable: bool, empty: &str) -> String {
    if leads.is_empty() {
        return format!("<div class=\"empty\">{}</div>", empty);
    }
    let mut html = String::from(
        "<table><thead><tr><th>Name</th><th>Email</th><th>Phone</th><th>Service</th><th>City</th><th>Status</th><th>Date</th></tr></thead><tbody>",
    );
    for lead in leads {
        let status = if editable {
            let mut select = format!("<select data-lead=\"{}\">", lead.id);
            for s in LeadStatus::ALL {
                select.push_str(&format!(
                    "<option value=\"{}\"{}>{}</option>",
                    s.as_str(),
                    if s == lead.status { " selected" } else { "" },
                    s.label()
                ));
            }
            select.push_str("</select>");
            format!("{} {}", status_badge(lead.status), select)
        } else {
            status_badge(lead.status)
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&lead.name),
            escape_html(&lead.email),
            escape_html(&lead.phone),
            escape_html(lead.service.as_deref().unwrap_or("-")),
            escape_html(lead.city.as_deref().unwrap_or("-")),
            status,
            short_date(&lead.created_at),
        ));
    }
    html.push_str("</tbody></table>");
    html
}

pub fn dashboard(stats: &DashboardStats) -> Page {
    let content = format!(
        r#"<h1>Dashboard</h1>
<div class="stats">
<div class="stat"><p>Services</p><p class="value">{services}</p><a href="/admin/services">Manage &rarr;</a></div>
<div class="stat"><p>Cities</p><p class="value">{cities}</p><a href="/admin/cities">Manage &rarr;</a></div>
<div class="stat"><p>Blog Posts</p><p class="value">{posts}</p><a href="/admin/blog">Manage &rarr;</a></div>
<div class="stat"><p>New Leads</p><p class="value">{new_leads}</p><p class="sub">of {leads} total</p><a href="/admin/leads">View All &rarr;</a></div>
</div>
<section class="recent-leads">
<h2>Recent Leads</h2>
{table}
</section>"#,
        services = stats.services,
        cities = stats.cities,
        posts = stats.published_posts,
        new_leads = stats.new_leads,
        leads = stats.leads,
        table = leads_table(&stats.recent_leads, false, "No leads yet"),
    );
    admin_page("Dashboard", content)
}

pub fn services_list(services: &[Service]) -> Page {
    let rows = if services.is_empty() {
        "<div class=\"empty\">No services yet. Create your first service!</div>".to_string()
    } else {
        let mut html = String::from(
            "<table><thead><tr><th>Name</th><th>Slug</th><th>Status</th><th>Featured</th><th>Actions</th></tr></thead><tbody>",
        );
        for s in services {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/admin/services/{id}/edit\">Edit</a> <button data-delete=\"/api/admin/services/{id}\">Delete</button></td></tr>",
                escape_html(&s.name),
                escape_html(&s.slug),
                publish_badge(s.published),
                if s.featured { "Yes" } else { "No" },
                id = s.id,
            ));
        }
        html.push_str("</tbody></table>");
        html
    };
    admin_page(
        "Services",
        format!(
            "<div class=\"header\"><h1>Services</h1><a class=\"button\" href=\"/admin/services/new\">Add New Service</a></div>\n{}\n{}",
            rows, LIST_SCRIPT
        ),
    )
}

pub fn cities_list(cities: &[City]) -> Page {
    let rows = if cities.is_empty() {
        "<div class=\"empty\">No cities yet. Add your first city!</div>".to_string()
    } else {
        let mut html = String::from(
            "<table><thead><tr><th>Name</th><th>State</th><th>Slug</th><th>Status</th><th>Actions</th></tr></thead><tbody>",
        );
        for c in cities {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/admin/cities/{id}/edit\">Edit</a> <button data-delete=\"/api/admin/cities/{id}\">Delete</button></td></tr>",
                escape_html(&c.name),
                escape_html(&c.state),
                escape_html(&c.slug),
                publish_badge(c.published),
                id = c.id,
            ));
        }
        html.push_str("</tbody></table>");
        html
    };
    admin_page(
        "Cities",
        format!(
            "<div class=\"header\"><h1>Cities &amp; Locations</h1><a class=\"button\" href=\"/admin/cities/new\">Add New City</a></div>\n{}\n{}",
            rows, LIST_SCRIPT
        ),
    )
}

pub fn posts_list(posts: &[BlogPost]) -> Page {
    let rows = if posts.is_empty() {
        "<div class=\"empty\">No blog posts yet. Create your first post!</div>".to_string()
    } else {
        let mut html = String::from(
            "<table><thead><tr><th>Title</th><th>Category</th><th>Status</th><th>Published</th><th>Actions</th></tr></thead><tbody>",
        );
        for p in posts {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/admin/blog/{id}/edit\">Edit</a> <button data-delete=\"/api/admin/blog/{id}\">Delete</button></td></tr>",
                escape_html(&p.title),
                escape_html(p.category.as_deref().unwrap_or("-")),
                publish_badge(p.published),
                p.published_at.as_ref().map(short_date).unwrap_or_else(|| "-".to_string()),
                id = p.id,
            ));
        }
        html.push_str("</tbody></table>");
        html
    };
    admin_page(
        "Blog Posts",
        format!(
            "<div class=\"header\"><h1>Blog Posts</h1><a class=\"button\" href=\"/admin/blog/new\">New Post</a></div>\n{}\n{}",
            rows, LIST_SCRIPT
        ),
    )
}

pub fn leads_page(leads: &[Lead], stats: &LeadStats, filter: Option<LeadStatus>) -> Page {
    let mut tabs = format!(
        "<a href=\"/admin/leads\" class=\"tab{}\">All ({})</a>",
        if filter.is_none() { " active" } else { "" },
        stats.total
    );
    for status in LeadStatus::ALL {
        let count = match status {
            LeadStatus::New => stats.new,
            LeadStatus::Contacted => stats.contacted,
            LeadStatus::Qualified => stats.qualified,
            LeadStatus::Converted => stats.converted,
        };
        tabs.push_str(&format!(
            " <a href=\"/admin/leads?status={}\" class=\"tab{}\">{} ({})</a>",
            status.as_str(),
            if filter == Some(status) { " active" } else { "" },
            status.label(),
            count
        ));
    }

    let empty = if filter.is_some() {
        "No leads found"
    } else {
        "No leads yet"
    };

    admin_page(
        "Leads",
        format!(
            "<h1>Leads</h1>\n<div class=\"tabs\">{}</div>\n{}\n{}",
            tabs,
            leads_table(leads, true, empty),
            LIST_SCRIPT
        ),
    )
}

fn form_open(kind: &str, label: &str, id: Option<String>) -> String {
    let (endpoint, method) = match id {
        Some(id) => (format!("/api/admin/{}/{}", kind, id), "PUT"),
        None => (format!("/api/admin/{}", kind), "POST"),
    };
    format!(
        "<form id=\"admin-form\" data-endpoint=\"{}\" data-method=\"{}\" data-redirect=\"/admin/{}\" data-label=\"{}\">",
        endpoint, method, kind, label
    )
}

fn seo_fields(
    meta_title: &Option<String>,
    meta_description: &Option<String>,
    keywords: &Option<String>,
) -> String {
    format!(
        r#"<fieldset><legend>SEO</legend>
<label>Meta title <input name="metaTitle" value="{}" /></label>
<label>Meta description <textarea name="metaDescription">{}</textarea></label>
<label>Keywords (comma separated) <input name="keywords" value="{}" /></label>
</fieldset>"#,
        opt(meta_title),
        opt(meta_description),
        opt(keywords)
    )
}

/// One editable row; `fields` are `(data-field, value, multiline)`.
fn entry_row(fields: &[(&str, &str, bool)]) -> String {
    let mut row = String::from("<div class=\"entry\">");
    for (name, value, multiline) in fields {
        if *multiline {
            row.push_str(&format!(
                "<textarea data-field=\"{}\" placeholder=\"{}\">{}</textarea>",
                name,
                name,
                escape_html(value)
            ));
        } else {
            row.push_str(&format!(
                "<input data-field=\"{}\" placeholder=\"{}\" value=\"{}\" />",
                name,
                name,
                escape_html(value)
            ));
        }
    }
    row.push_str("<button type=\"button\" data-remove>Remove</button></div>");
    row
}

/// Repeating editor: one row per entry plus a blank row to fill in.
fn list_editor(name: &str, shape: &str, label: &str, rows: Vec<String>, blank: String) -> String {
    format!(
        "<fieldset data-list=\"{}\" data-shape=\"{}\"><legend>{}</legend>{}{}<button type=\"button\" data-add>Add</button></fieldset>",
        name,
        shape,
        label,
        rows.concat(),
        blank
    )
}

fn strings_editor(name: &str, label: &str, items: &[String]) -> String {
    let rows = items.iter().map(|v| entry_row(&[("value", v, false)])).collect();
    list_editor(name, "strings", label, rows, entry_row(&[("value", "", false)]))
}

fn steps_editor(steps: &[ProcessStep]) -> String {
    let rows = steps
        .iter()
        .map(|s| entry_row(&[("title", &s.title, false), ("description", &s.description, true)]))
        .collect();
    let blank = entry_row(&[("title", "", false), ("description", "", true)]);
    list_editor("process", "steps", "Process steps", rows, blank)
}

fn faqs_editor(faqs: &[Faq]) -> String {
    let rows = faqs
        .iter()
        .map(|f| entry_row(&[("question", &f.question, false), ("answer", &f.answer, true)]))
        .collect();
    let blank = entry_row(&[("question", "", false), ("answer", "", true)]);
    list_editor("faqs", "faqs", "FAQs", rows, blank)
}

pub fn service_form(service: Option<&Service>) -> Page {
    let title = if service.is_some() { "Edit Service" } else { "New Service" };
    let s = service;
    let text = |f: fn(&Service) -> &str| escape_html(s.map(f).unwrap_or(""));

    let content = format!(
        r#"<h1>{title}</h1>
{open}
<label>Name <input name="name" required value="{name}" /></label>
<label>Slug <input name="slug" required data-normalize="slug" value="{slug}" /></label>
<label>Short description <input name="shortDescription" required value="{short}" /></label>
<label>Description <textarea name="description" rows="8" required>{description}</textarea></label>
{benefits}
{process}
{faqs}
{seo}
<label><input type="checkbox" name="published"{published} /> Published</label>
<label><input type="checkbox" name="featured"{featured} /> Featured</label>
<label><input type="checkbox" name="enableFAQSchema"{faq_schema} /> Enable FAQ schema</label>
<label><input type="checkbox" name="enableServiceSchema"{service_schema} /> Enable service schema</label>
<button type="submit">Save Service</button> <a href="/admin/services">Cancel</a>
</form>
{script}"#,
        title = title,
        open = form_open("services", "service", s.map(|s| s.id.to_string())),
        name = text(|s| s.name.as_str()),
        slug = text(|s| s.slug.as_str()),
        short = text(|s| s.short_description.as_str()),
        description = text(|s| s.description.as_str()),
        benefits = strings_editor("benefits", "Benefits", s.map(|s| s.benefits.as_slice()).unwrap_or(&[])),
        process = steps_editor(s.map(|s| s.process.as_slice()).unwrap_or(&[])),
        faqs = faqs_editor(s.map(|s| s.faqs.as_slice()).unwrap_or(&[])),
        seo = match s {
            Some(s) => seo_fields(&s.meta_title, &s.meta_description, &s.keywords),
            None => seo_fields(&None, &None, &None),
        },
        published = checked(s.map(|s| s.published).unwrap_or(true)),
        featured = checked(s.map(|s| s.featured).unwrap_or(false)),
        faq_schema = checked(s.map(|s| s.enable_faq_schema).unwrap_or(true)),
        service_schema = checked(s.map(|s| s.enable_service_schema).unwrap_or(true)),
        script = FORM_SCRIPT,
    );
    admin_page(title, content)
}

pub fn city_form(city: Option<&City>) -> Page {
    let title = if city.is_some() { "Edit City" } else { "New City" };
    let c = city;
    let text = |f: fn(&City) -> &str| escape_html(c.map(f).unwrap_or(""));
    let coord = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();

    let content = format!(
        r#"<h1>{title}</h1>
{open}
<label>Name <input name="name" required value="{name}" /></label>
<label>State <input name="state" required maxlength="2" data-normalize="upper" value="{state}" /></label>
<label>Slug <input name="slug" required data-normalize="slug" value="{slug}" /></label>
<label>ZIP code <input name="zipCode" value="{zip}" /></label>
<label>Latitude <input name="latitude" data-kind="number" value="{lat}" /></label>
<label>Longitude <input name="longitude" data-kind="number" value="{lng}" /></label>
{neighborhoods}
<label>Description <textarea name="description">{description}</textarea></label>
<label>Local content (HTML) <textarea name="localContent" rows="8">{local}</textarea></label>
{seo}
<label><input type="checkbox" name="published"{published} /> Published</label>
<button type="submit">Save City</button> <a href="/admin/cities">Cancel</a>
</form>
{script}"#,
        title = title,
        open = form_open("cities", "city", c.map(|c| c.id.to_string())),
        name = text(|c| c.name.as_str()),
        state = text(|c| c.state.as_str()),
        slug = text(|c| c.slug.as_str()),
        zip = c.map(|c| opt(&c.zip_code)).unwrap_or_default(),
        lat = coord(c.and_then(|c| c.latitude)),
        lng = coord(c.and_then(|c| c.longitude)),
        neighborhoods = strings_editor(
            "neighborhoods",
            "Neighborhoods",
            c.map(|c| c.neighborhoods.as_slice()).unwrap_or(&[]),
        ),
        description = c.map(|c| opt(&c.description)).unwrap_or_default(),
        local = c.map(|c| opt(&c.local_content)).unwrap_or_default(),
        seo = match c {
            Some(c) => seo_fields(&c.meta_title, &c.meta_description, &c.keywords),
            None => seo_fields(&None, &None, &None),
        },
        published = checked(c.map(|c| c.published).unwrap_or(true)),
        script = FORM_SCRIPT,
    );
    admin_page(title, content)
}

pub fn post_form(post: Option<&BlogPost>, cities: &[City]) -> Page {
    let title = if post.is_some() { "Edit Post" } else { "New Post" };
    let p = post;
    let text = |f: fn(&BlogPost) -> &str| escape_html(p.map(f).unwrap_or(""));

    let current_city = p.and_then(|p| p.city_id);
    let mut city_options = String::from("<option value=\"\">No city</option>");
    for city in cities {
        city_options.push_str(&format!(
            "<option value=\"{}\"{}>{}, {}</option>",
            city.id,
            if current_city == Some(city.id) { " selected" } else { "" },
            escape_html(&city.name),
            escape_html(&city.state)
        ));
    }

    let content = format!(
        r#"<h1>{title}</h1>
{open}
<label>Title <input name="title" required value="{title_value}" /></label>
<label>Slug <input name="slug" required data-normalize="slug" value="{slug}" /></label>
<label>Excerpt <textarea name="excerpt" required>{excerpt}</textarea></label>
<label>Content <textarea name="content" rows="14" required>{content}</textarea></label>
<label>Featured image URL <input name="featuredImage" value="{image}" /></label>
<label>Category <input name="category" value="{category}" /></label>
{tags}
<label>City <select name="cityId" data-kind="nullable">{cities}</select></label>
{seo}
<label><input type="checkbox" name="published"{published} /> Published</label>
<button type="submit">Save Post</button> <a href="/admin/blog">Cancel</a>
</form>
{script}"#,
        title = title,
        open = form_open("blog", "blog post", p.map(|p| p.id.to_string())),
        title_value = text(|p| p.title.as_str()),
        slug = text(|p| p.slug.as_str()),
        excerpt = text(|p| p.excerpt.as_str()),
        content = text(|p| p.content.as_str()),
        image = p.map(|p| opt(&p.featured_image)).unwrap_or_default(),
        category = p.map(|p| opt(&p.category)).unwrap_or_default(),
        tags = strings_editor("tags", "Tags", p.map(|p| p.tags.as_slice()).unwrap_or(&[])),
        cities = city_options,
        seo = match p {
            Some(p) => seo_fields(&p.meta_title, &p.meta_description, &p.keywords),
            None => seo_fields(&None, &None, &None),
        },
        published = checked(p.map(|p| p.published).unwrap_or(false)),
        script = FORM_SCRIPT,
    );
    admin_page(title, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{sample_city, sample_lead, sample_post, sample_service};

    #[test]
    fn test_zeroed_dashboard_shows_empty_state() {
        let page = dashboard(&DashboardStats::default());
        assert!(page.body.contains("No leads yet"));
        assert!(page.body.contains("of 0 total"));
        assert!(page.meta.noindex);
    }

    #[test]
    fn test_dashboard_lists_recent_leads() {
        let stats = DashboardStats {
            leads: 1,
            new_leads: 1,
            recent_leads: vec![sample_lead("Maria", LeadStatus::New)],
            ..DashboardStats::default()
        };
        let page = dashboard(&stats);
        assert!(page.body.contains("Maria"));
        assert!(!page.body.contains("No leads yet"));
    }

    #[test]
    fn test_list_zero_states() {
        assert!(cities_list(&[]).body.contains("No cities yet. Add your first city!"));
        assert!(services_list(&[]).body.contains("No services yet"));
        assert!(posts_list(&[]).body.contains("No blog posts yet"));
    }

    #[test]
    fn test_list_badges() {
        let page = services_list(&[
            sample_service("a", true),
            sample_service("b", false),
        ]);
        assert!(page.body.contains("Published"));
        assert!(page.body.contains("Draft"));
    }

    #[test]
    fn test_leads_page_filter_tab_and_empty_copy() {
        let page = leads_page(&[], &LeadStats::default(), Some(LeadStatus::Contacted));
        assert!(page.body.contains("No leads found"));
        assert!(page.body.contains("status=CONTACTED\" class=\"tab active\""));
    }

    #[test]
    fn test_forms_post_or_put() {
        let new_form = service_form(None);
        assert!(new_form.body.contains("data-endpoint=\"/api/admin/services\" data-method=\"POST\""));

        let city = sample_city("lakewood", true);
        let edit = city_form(Some(&city));
        assert!(edit
            .body
            .contains(&format!("data-endpoint=\"/api/admin/cities/{}\" data-method=\"PUT\"", city.id)));
        assert!(edit.body.contains("data-list=\"neighborhoods\" data-shape=\"strings\""));
        assert!(edit.body.contains("value=\"Belmar\""));
        assert!(edit.body.contains("value=\"Green Mountain\""));
        assert!(edit.body.contains("Error saving"));
    }

    #[test]
    fn test_post_form_selects_city() {
        let city = sample_city("lakewood", true);
        let mut post = sample_post("stain", true);
        post.city_id = Some(city.id);
        let page = post_form(Some(&post), &[city.clone()]);
        assert!(page.body.contains(&format!("<option value=\"{}\" selected>", city.id)));
    }

    #[test]
    fn test_faq_with_newlines_and_pipe_is_one_entry() {
        let mut service = sample_service("tile", true);
        service.faqs = vec![Faq {
            question: "Tile | stone?".to_string(),
            answer: "Yes.\nBoth, with sealing.".to_string(),
        }];
        let page = service_form(Some(&service));
        let faqs = page
            .body
            .split("data-list=\"faqs\"")
            .nth(1)
            .and_then(|rest| rest.split("</fieldset>").next())
            .unwrap_or_default();
        // one saved entry plus the blank row
        assert_eq!(faqs.matches("class=\"entry\"").count(), 2);
        assert!(faqs.contains("value=\"Tile | stone?\""));
        assert!(faqs.contains(
            "<textarea data-field=\"answer\" placeholder=\"answer\">Yes.\nBoth, with sealing.</textarea>"
        ));
    }

    #[test]
    fn test_admin_page_logs_out_without_leaving_for_json() {
        let page = dashboard(&DashboardStats::default());
        assert!(!page.body.contains("action=\"/api/admin/logout\""));
        assert!(page.body.contains("id=\"logout\""));
        assert!(page.body.contains("window.location.href = '/admin/login'"));
    }
}

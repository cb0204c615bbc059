use serde_json::Value;

use crate::designs::common::{build_post_card, CardStyle};
use crate::render::{field, html_escape, page_href, PageLinks};

const INTRO: [&str; 2] = [
    "Grassroot Ideas is a storytelling and research platform that spotlights breakthrough innovations emerging from developing countries. I explore how communities across Asia, Africa, and Latin America are solving complex challenges in healthcare, education, finance, and more using creativity, constraint, and local insight.",
    "By sharing overlooked success stories, Grassroot Ideas sparks fresh thinking, expands global playbooks, and shifts how we view innovation. Whether you are a policymaker, builder, investor, or curious mind, it shows what’s working on the ground, and why it matters globally.",
];

/// Render the Grassroot Ideas listing. `posts` is already filtered and
/// sorted; `filters` is the button row with exactly one active entry.
pub fn render_body(context: &Value) -> String {
    let settings = context.get("settings").cloned().unwrap_or_default();
    let links = PageLinks::from_context(context);

    let mut html = String::from("<section class=\"blog-intro\"><h1>Grassroot Ideas</h1>");
    for para in INTRO {
        html.push_str(&format!("<p>{}</p>", html_escape(para)));
    }
    html.push_str(&build_filter_bar(context.get("filters")));
    html.push_str("</section>");

    html.push_str("<section class=\"blog-posts\">");
    match context.get("posts") {
        Some(Value::Array(posts)) if !posts.is_empty() => {
            html.push_str("<div class=\"card-grid\">");
            for post in posts {
                html.push_str(&build_post_card(post, &settings, &links, CardStyle::Detailed));
            }
            html.push_str("</div>");
        }
        _ => html.push_str("<p class=\"empty-state\">No posts in this category yet.</p>"),
    }
    html.push_str("</section>");
    html
}

fn build_filter_bar(filters: Option<&Value>) -> String {
    let items = match filters {
        Some(Value::Array(items)) => items,
        _ => return String::new(),
    };
    let mut html = String::from("<div class=\"filter-bar\">");
    for f in items {
        let slug = field(f, "slug");
        let active = f.get("active").and_then(|v| v.as_bool()).unwrap_or(false);
        // "All" is the bare listing
        let href = if slug == "all" {
            "/blog".to_string()
        } else {
            page_href("/blog", &[("filter", slug)])
        };
        html.push_str(&format!(
            "<a href=\"{href}\" class=\"filter-btn {slug}{active}\"{current}>{label}</a>",
            href = html_escape(&href),
            slug = html_escape(slug),
            active = if active { " active" } else { "" },
            current = if active { " aria-current=\"true\"" } else { "" },
            label = html_escape(field(f, "label")),
        ));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_bar_marks_active_button() {
        let filters = json!([
            { "slug": "all", "label": "All", "active": false },
            { "slug": "energy", "label": "Energy", "active": true },
        ]);
        let html = build_filter_bar(Some(&filters));
        assert!(html.contains("<a href=\"/blog\" class=\"filter-btn all\">All</a>"));
        assert!(html.contains("href=\"/blog?filter=energy\" class=\"filter-btn energy active\""));
    }

    #[test]
    fn empty_listing_shows_message() {
        let ctx = json!({ "page": { "path": "/blog", "filter": "energy" }, "posts": [] });
        let html = render_body(&ctx);
        assert!(html.contains("<h1>Grassroot Ideas</h1>"));
        assert!(html.contains("empty-state"));
        assert!(!html.contains("post-card"));
    }
}

use serde_json::Value;

use crate::designs::common::{
    build_logo_banner, build_newsletter, build_post_card, build_project_card, CardStyle,
};
use crate::render::{field, html_escape, PageLinks};

/// Render the home page: hero, about summary, featured posts, featured
/// projects, logo banner and newsletter.
pub fn render_body(context: &Value) -> String {
    let settings = context.get("settings").cloned().unwrap_or_default();
    let links = PageLinks::from_context(context);
    let s = |key: &str| field(&settings, key);

    let mut html = format!(
        r#"<section class="hero">
    <div class="hero-photo"><img src="{photo}" alt="{name}" width="192" height="192"></div>
    <div class="hero-text">
        <h1>Hi, I'm {name}.</h1>
        <p class="tagline">{tagline}</p>
        <div class="cta-row">
            <a href="{linkedin}" target="_blank" rel="noopener noreferrer" class="pill">Find me on LinkedIn</a>
            <a href="/blog" class="pill">Explore Grassroot Ideas</a>
        </div>
    </div>
</section>
<section class="about-summary">
    <div>
        <h2>About Me</h2>
        <p>{about}</p>
    </div>
    <a href="/about" class="pill">Learn More</a>
</section>"#,
        photo = html_escape(s("profile_image")),
        name = html_escape(s("site_name")),
        tagline = html_escape(s("tagline")),
        linkedin = html_escape(s("linkedin_url")),
        about = html_escape(s("about_summary")),
    );

    html.push_str(
        "<section class=\"featured-posts\">\
         <div class=\"section-head\"><h2>Featured Blog Posts</h2><a href=\"/blog\">See all</a></div>\
         <div class=\"card-grid\">",
    );
    if let Some(Value::Array(posts)) = context.get("posts") {
        for post in posts {
            html.push_str(&build_post_card(post, &settings, &links, CardStyle::Compact));
        }
    }
    html.push_str("</div></section>");

    html.push_str(
        "<section class=\"featured-projects\">\
         <div class=\"section-head\"><h2>Featured Projects</h2><a href=\"/projects\">See all</a></div>\
         <div class=\"project-grid\">",
    );
    if let Some(Value::Array(projects)) = context.get("projects") {
        for project in projects {
            let href = format!("/projects#{}", field(project, "anchor"));
            html.push_str(&build_project_card(project, Some(&href)));
        }
    }
    html.push_str("</div></section>");

    html.push_str(&build_logo_banner(context.get("logos")));
    html.push_str(&build_newsletter(&settings));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn featured_cards_open_modal_on_home() {
        let ctx = json!({
            "settings": { "site_name": "Aimaan Shergill" },
            "page": { "path": "/" },
            "posts": [{ "key": "taobao", "title": "Tao Bao Villages", "published": "2025-06-28" }],
            "projects": [{ "anchor": "gpt", "title": "GPT", "summary": "", "tools": [] }],
        });
        let html = render_body(&ctx);
        assert!(html.contains("Hi, I'm Aimaan Shergill."));
        assert!(html.contains("href=\"/?post=taobao#post-overlay\""));
        assert!(html.contains("href=\"/projects#gpt\""));
        assert!(!html.contains("category-label"));
    }
}

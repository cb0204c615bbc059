use serde_json::Value;

use crate::render::{field, format_date, html_escape, PageLinks};

/// Which card layout a page uses for posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardStyle {
    /// Home page: title, description, "Read more".
    Compact,
    /// Blog listing: adds category label and date.
    Detailed,
}

/// Build one post card. `post` is a serialized `PostSummary`.
pub(crate) fn build_post_card(
    post: &Value,
    settings: &Value,
    links: &PageLinks,
    style: CardStyle,
) -> String {
    let s = |key: &str| field(post, key);
    let key = s("key");
    let title = s("title");

    let meta_html = match style {
        CardStyle::Compact => String::new(),
        CardStyle::Detailed => {
            let category = s("category");
            let label = crate::models::category::Category::from_slug(category)
                .map(|c| c.label())
                .unwrap_or(category);
            format!(
                "<span class=\"category-label {cat}\">{label}</span>\
                 <time class=\"card-date\" datetime=\"{raw}\">{date}</time>",
                cat = html_escape(category),
                label = html_escape(label),
                raw = html_escape(s("published")),
                date = html_escape(&format_date(s("published"), settings)),
            )
        }
    };

    format!(
        "<article class=\"post-card\" id=\"card-{key}\">\
         <img src=\"{image}\" alt=\"{title}\" width=\"400\" height=\"200\">\
         <h3>{title}</h3>\
         <p>{description}</p>\
         <div class=\"card-meta\">{meta_html}\
         <a href=\"{href}\" class=\"read-more\">Read more</a>\
         </div>\
         </article>",
        key = html_escape(key),
        image = html_escape(s("image")),
        title = html_escape(title),
        description = html_escape(s("description")),
        meta_html = meta_html,
        href = html_escape(&links.open_post(key)),
    )
}

/// Build a project card. `href` is where the card links, if anywhere.
pub(crate) fn build_project_card(project: &Value, href: Option<&str>) -> String {
    let s = |key: &str| field(project, key);
    let inner = format!(
        "<h3>{}</h3><p>{}</p>{}",
        html_escape(s("title")),
        html_escape(s("summary")),
        build_tool_chips(project.get("tools")),
    );
    match href {
        Some(h) => format!(
            "<a href=\"{}\" class=\"project-card\">{}</a>",
            html_escape(h),
            inner
        ),
        None => format!(
            "<section class=\"project-card\" id=\"{}\">{}</section>",
            html_escape(s("anchor")),
            inner
        ),
    }
}

fn build_tool_chips(tools: Option<&Value>) -> String {
    let chips: Vec<String> = match tools {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|t| t.as_str())
            .map(|t| format!("<span class=\"chip\">{}</span>", html_escape(t)))
            .collect(),
        _ => return String::new(),
    };
    if chips.is_empty() {
        return String::new();
    }
    format!("<div class=\"chips\">{}</div>", chips.join(""))
}

/// Newsletter sign-up. Posts straight to the external forms endpoint.
pub(crate) fn build_newsletter(settings: &Value) -> String {
    let endpoint = settings
        .get("forms_endpoint")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    format!(
        r#"<section class="newsletter">
    <h2>Newsletter</h2>
    <p>Get insights on strategy, innovation, and grassroots ideas. No spam, ever.</p>
    <form action="{endpoint}" method="POST">
        <input type="email" name="email" placeholder="Your email" required>
        <button type="submit">Subscribe</button>
    </form>
</section>"#,
        endpoint = html_escape(endpoint),
    )
}

/// Horizontally scrolling logo strip. `logos` is the doubled banner track,
/// each entry carrying `src`, `alt` and its height `class`.
pub(crate) fn build_logo_banner(logos: Option<&Value>) -> String {
    let items = match logos {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return String::new(),
    };
    let mut html = String::from("<div class=\"logo-banner\"><div class=\"logo-track\">");
    for logo in items {
        let s = |key: &str| field(logo, key);
        let size = match s("class") {
            "" => "logo-sm",
            class => class,
        };
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"{}\" draggable=\"false\">",
            html_escape(s("src")),
            html_escape(s("alt")),
            html_escape(size)
        ));
    }
    html.push_str("</div></div>");
    html
}

/// LinkedIn + e-mail icon links.
pub(crate) fn build_social_links(settings: &Value) -> String {
    let s = |key: &str| field(settings, key);
    let mut html = String::new();
    if !s("linkedin_url").is_empty() {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn"><svg width="28" height="28" fill="currentColor" viewBox="0 0 24 24"><path d="M19 0h-14c-2.76 0-5 2.24-5 5v14c0 2.76 2.24 5 5 5h14c2.76 0 5-2.24 5-5v-14c0-2.76-2.24-5-5-5zm-11 19h-3v-10h3v10zm-1.5-11.28c-.97 0-1.75-.79-1.75-1.75s.78-1.75 1.75-1.75 1.75.79 1.75 1.75-.78 1.75-1.75 1.75zm15.5 11.28h-3v-5.6c0-1.34-.03-3.07-1.87-3.07-1.87 0-2.16 1.46-2.16 2.97v5.7h-3v-10h2.89v1.36h.04c.4-.75 1.38-1.54 2.84-1.54 3.04 0 3.6 2 3.6 4.59v5.59z"/></svg></a>"#,
            html_escape(s("linkedin_url"))
        ));
    }
    if !s("contact_email").is_empty() {
        html.push_str(&format!(
            r#"<a href="mailto:{}" aria-label="Email"><svg width="28" height="28" fill="currentColor" viewBox="0 0 24 24"><path d="M12 13.065l-11.985-7.065v14h23.97v-14l-11.985 7.065zm11.985-9.065h-23.97l11.985 7.065 11.985-7.065z"/></svg></a>"#,
            html_escape(s("contact_email"))
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn links() -> PageLinks {
        PageLinks::from_context(&json!({ "page": { "path": "/blog", "filter": "finance" } }))
    }

    fn mpesa() -> Value {
        json!({
            "key": "mpesa",
            "title": "M-Pesa",
            "image": "/static/stock/mpesa.jpg",
            "description": "Mobile money",
            "category": "finance",
            "published": "2025-06-23",
        })
    }

    #[test]
    fn detailed_card_shows_label_and_date() {
        let html = build_post_card(&mpesa(), &json!({}), &links(), CardStyle::Detailed);
        assert!(html.contains("category-label finance"));
        assert!(html.contains(">Finance<"));
        assert!(html.contains("Jun 23, 2025"));
        assert!(html.contains("href=\"/blog?filter=finance&amp;post=mpesa#post-overlay\""));
    }

    #[test]
    fn compact_card_has_no_meta() {
        let html = build_post_card(&mpesa(), &json!({}), &links(), CardStyle::Compact);
        assert!(!html.contains("category-label"));
        assert!(html.contains("Read more"));
    }

    #[test]
    fn project_card_links_or_anchors() {
        let p = json!({ "anchor": "gpt", "title": "GPT", "summary": "s", "tools": ["Excel"] });
        assert!(build_project_card(&p, Some("/projects#gpt")).starts_with("<a href=\"/projects#gpt\""));
        let standalone = build_project_card(&p, None);
        assert!(standalone.contains("id=\"gpt\""));
        assert!(standalone.contains("<span class=\"chip\">Excel</span>"));
    }

    #[test]
    fn newsletter_posts_to_endpoint() {
        let html = build_newsletter(&json!({ "forms_endpoint": "https://forms.example/f/1" }));
        assert!(html.contains("action=\"https://forms.example/f/1\""));
        assert!(html.contains("name=\"email\""));
    }

    #[test]
    fn empty_banner_renders_nothing() {
        assert_eq!(build_logo_banner(None), "");
        assert_eq!(build_logo_banner(Some(&json!([]))), "");
    }
}

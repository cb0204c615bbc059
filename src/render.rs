use serde_json::Value;

use crate::designs;
use crate::nav::{self, MenuState, NAV_LINKS};

/// Renders a full page: the page body chosen by `template_type`, wrapped in
/// the site shell (head, navigation, post overlay, footer).
pub fn render_page(template_type: &str, context: &Value) -> String {
    let settings = context.get("settings").cloned().unwrap_or_default();

    let body_html = match template_type {
        "home" => designs::home::render_body(context),
        "blog" => designs::blog::render_body(context),
        "about" => designs::about::render_body(context),
        "projects" => designs::projects::render_body(context),
        "contact" => designs::contact::render_body(context),
        _ => render_404(context),
    };

    let sg = |key: &str, def: &str| -> String {
        settings.get(key).and_then(|v| v.as_str()).unwrap_or(def).to_string()
    };

    let seo_meta = context
        .get("seo")
        .and_then(|s| s.as_str())
        .unwrap_or("")
        .to_string();
    let jsonld = context
        .get("jsonld")
        .and_then(|s| s.as_str())
        .unwrap_or("")
        .to_string();

    let links = PageLinks::from_context(context);
    let header_html = build_header(&settings, &links);
    let modal_html = build_modal(context, &links);
    let feed_link = if settings.get("rss_enabled").and_then(|v| v.as_bool()).unwrap_or(false) {
        format!(
            r#"<link rel="alternate" type="application/rss+xml" title="{}" href="/feed">"#,
            html_escape(&format!("{} · Grassroot Ideas", sg("site_name", "")))
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="color-scheme" content="light">
    {seo_meta}
    <link rel="icon" type="image/png" href="{favicon}">
    {feed_link}
    {jsonld}
    <style>
        {base_css}
    </style>
</head>
<body class="{body_class}">
    {header_html}
    <main class="content page-{template_type}">
        {body_html}
    </main>
    {modal_html}
    <footer class="site-footer">
        <p>&copy; {year} {site_name}</p>
    </footer>
</body>
</html>"#,
        seo_meta = seo_meta,
        favicon = html_escape(&sg("favicon", "/static/favicon.png")),
        feed_link = feed_link,
        jsonld = jsonld,
        base_css = DEFAULT_CSS,
        body_class = if modal_html.is_empty() { "" } else { "modal-open" },
        header_html = header_html,
        template_type = template_type,
        body_html = body_html,
        modal_html = modal_html,
        year = chrono::Utc::now().format("%Y"),
        site_name = html_escape(&sg("site_name", "")),
    )
}

/// Where the page's stateful links point. Built from the `page` object every
/// handler puts into the context: `{path, filter, post, menu}`.
pub(crate) struct PageLinks {
    pub path: String,
    pub filter: Option<String>,
    pub post: Option<String>,
    pub menu: MenuState,
}

impl PageLinks {
    pub fn from_context(context: &Value) -> Self {
        let page = context.get("page");
        let get = |key: &str| -> Option<String> {
            page.and_then(|p| p.get(key))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        };
        PageLinks {
            path: get("path").unwrap_or_else(|| "/".to_string()),
            filter: get("filter").filter(|f| f != "all"),
            post: get("post"),
            menu: if page
                .and_then(|p| p.get("menu"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
            {
                MenuState::Expanded
            } else {
                MenuState::Collapsed
            },
        }
    }

    /// The hamburger button: same page, same filter and post, menu flipped.
    pub fn menu_toggle(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if let Some(f) = &self.filter {
            pairs.push(("filter", f.as_str()));
        }
        if let Some(p) = &self.post {
            pairs.push(("post", p.as_str()));
        }
        if let Some(m) = self.menu.toggle().query_value() {
            pairs.push(("menu", m));
        }
        page_href(&self.path, &pairs)
    }

    /// "Read more" on a card. Keeps the active filter; the menu collapses.
    pub fn open_post(&self, key: &str) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if let Some(f) = &self.filter {
            pairs.push(("filter", f.as_str()));
        }
        pairs.push(("post", key));
        format!("{}#post-overlay", page_href(&self.path, &pairs))
    }

    /// The overlay's close button: same page and filter, no post.
    pub fn close_post(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if let Some(f) = &self.filter {
            pairs.push(("filter", f.as_str()));
        }
        page_href(&self.path, &pairs)
    }
}

/// Join a path with query pairs, form-encoding the values.
pub(crate) fn page_href(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish();
    format!("{}?{}", path, query)
}

fn build_header(settings: &Value, links: &PageLinks) -> String {
    let sg = |key: &str, def: &str| -> String {
        settings.get(key).and_then(|v| v.as_str()).unwrap_or(def).to_string()
    };
    let site_name = sg("site_name", "");

    let link_list = |class: &str| -> String {
        NAV_LINKS
            .iter()
            .map(|link| {
                let current = if nav::is_current(link, &links.path) {
                    " aria-current=\"page\""
                } else {
                    ""
                };
                let href = match links.menu.select(link).query_value() {
                    Some(m) => page_href(link.href, &[("menu", m)]),
                    None => link.href.to_string(),
                };
                format!(
                    "<a href=\"{}\" class=\"{}\"{}>{}</a>",
                    html_escape(&href),
                    class,
                    current,
                    link.name
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mobile_menu = if links.menu.is_expanded() {
        format!(
            "<div class=\"mobile-menu\"><div class=\"mobile-links\">{}</div></div>",
            link_list("nav-link mobile-link")
        )
    } else {
        String::new()
    };

    format!(
        r#"<nav class="site-nav">
    <div class="nav-inner">
        <a href="/" class="brand"><img src="{brand_image}" alt="{site_name} Logo" width="32" height="32" class="brand-image">{site_name}</a>
        <div class="nav-links">{desktop_links}</div>
        <a href="{toggle}" class="menu-toggle" aria-label="Open menu" aria-expanded="{expanded}">
            <svg width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24"><path stroke-linecap="round" d="M4 6h16M4 12h16M4 18h16"/></svg>
        </a>
    </div>
    {mobile_menu}
</nav>"#,
        brand_image = html_escape(&sg("brand_image", "")),
        site_name = html_escape(&site_name),
        desktop_links = link_list("nav-link"),
        toggle = html_escape(&links.menu_toggle()),
        expanded = links.menu.is_expanded(),
        mobile_menu = mobile_menu,
    )
}

/// The post overlay. Empty when no post is open.
fn build_modal(context: &Value, links: &PageLinks) -> String {
    let detail = match context.get("modal") {
        Some(d) if d.is_object() => d,
        _ => return String::new(),
    };

    let body = match detail.get("kind").and_then(|v| v.as_str()) {
        Some("full") => render_case_study(detail),
        _ => format!(
            "<p class=\"post-text\">{}</p>",
            html_escape(detail.get("text").and_then(|v| v.as_str()).unwrap_or(""))
        ),
    };

    format!(
        r#"<div id="post-overlay" class="modal-backdrop" role="dialog" aria-modal="true">
    <div class="modal">
        <a href="{close}" class="modal-close" aria-label="Close modal">&times;</a>
        <div class="post-content">{body}</div>
    </div>
</div>"#,
        close = html_escape(&links.close_post()),
        body = body,
    )
}

fn render_case_study(detail: &Value) -> String {
    let s = |key: &str| field(detail, key);
    let title = s("title");

    let mut html = format!(
        "<img src=\"{}\" alt=\"{}\" width=\"800\" height=\"400\" class=\"post-hero\">\
         <h2 class=\"post-title\"><span role=\"img\" aria-label=\"{}\">{}</span> {}</h2>\
         <div class=\"post-badges\"><span class=\"badge badge-kind\">Case Study</span><span class=\"badge badge-topic\">{}</span></div>",
        html_escape(s("image")),
        html_escape(title),
        html_escape(s("icon_label")),
        s("icon"),
        html_escape(title),
        html_escape(s("topic")),
    );

    if let Some(dateline) = detail.get("dateline").and_then(|v| v.as_str()) {
        html.push_str(&format!("<span class=\"post-dateline\">{}</span>", html_escape(dateline)));
    }

    if let Some(Value::Array(blocks)) = detail.get("blocks") {
        for block in blocks {
            let text = block.get("text").and_then(|v| v.as_str()).unwrap_or("");
            match block.get("type").and_then(|v| v.as_str()) {
                Some("heading") => html.push_str(&format!("<h3>{}</h3>", html_escape(text))),
                Some("paragraph") => {
                    html.push_str(&format!("<p class=\"post-text\">{}</p>", html_escape(text)))
                }
                Some("list") => {
                    html.push_str("<ul class=\"post-list\">");
                    if let Some(Value::Array(items)) = block.get("items") {
                        for item in items {
                            html.push_str(&format!(
                                "<li>{}</li>",
                                html_escape(item.as_str().unwrap_or(""))
                            ));
                        }
                    }
                    html.push_str("</ul>");
                }
                _ => {}
            }
        }
    }

    html
}

pub fn render_404(_context: &Value) -> String {
    r#"<div class="error-page">
    <h1>404</h1>
    <p>Page not found.</p>
    <a href="/">← Back to home</a>
</div>"#
        .to_string()
}

/// Format an ISO calendar date (`2025-06-18`) with the configured `date_format`.
pub(crate) fn format_date(raw: &str, settings: &Value) -> String {
    let fmt = settings
        .get("date_format")
        .and_then(|v| v.as_str())
        .unwrap_or("%b %-d, %Y");
    match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(d) => d.format(fmt).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// A string field of a context object, or `""`.
pub(crate) fn field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const DEFAULT_CSS: &str = r#"
:root {
    --color-accent: #2563eb;
    --color-text: #374151;
    --color-heading: #111827;
    --color-border: #e2e8f0;
    --color-muted: #6b7280;
    --max-width: 64rem;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; color: var(--color-text); background: #fff; line-height: 1.6; }
a { color: var(--color-accent); text-decoration: none; }
a:hover { text-decoration: underline; }
h1, h2, h3 { color: var(--color-heading); line-height: 1.25; }

.site-nav { position: sticky; top: 0; z-index: 50; background: rgba(255,255,255,.85); backdrop-filter: blur(6px); border-bottom: 1px solid var(--color-border); }
.nav-inner { max-width: var(--max-width); margin: 0 auto; display: flex; align-items: center; justify-content: space-between; padding: 12px 16px; }
.brand { display: flex; align-items: center; gap: 8px; font-weight: 700; font-size: 1.25rem; }
.brand-image { border-radius: 50%; }
.nav-links { display: flex; gap: 24px; }
.nav-link { color: var(--color-text); font-weight: 500; }
.nav-link[aria-current="page"] { color: var(--color-accent); }
.menu-toggle { display: none; padding: 8px; color: var(--color-text); }
.mobile-menu { border-top: 1px solid var(--color-border); padding: 0 16px 16px; }
.mobile-links { display: flex; flex-direction: column; gap: 12px; margin-top: 8px; }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .menu-toggle { display: block; }
}
@media (min-width: 769px) {
    .mobile-menu { display: none; }
}

.content { max-width: var(--max-width); margin: 0 auto; padding: 40px 16px; display: flex; flex-direction: column; gap: 64px; }
.page-blog, .page-about { max-width: 56rem; gap: 40px; }
.page-contact { max-width: 42rem; gap: 40px; }

.hero { display: flex; align-items: center; gap: 48px; flex-wrap: wrap; }
.hero-photo { width: 192px; height: 192px; border-radius: 50%; overflow: hidden; background: #e5e7eb; flex-shrink: 0; }
.hero-photo img { width: 100%; height: 100%; object-fit: cover; }
.hero-text { flex: 1; min-width: 240px; }
.hero-text h1 { font-size: 2.25rem; margin: 0 0 8px; }
.cta-row { display: flex; gap: 16px; flex-wrap: wrap; }
.pill { display: inline-block; padding: 8px 24px; border-radius: 999px; border: 1px solid var(--color-accent); font-weight: 600; }
.pill:hover { background: var(--color-accent); color: #fff; text-decoration: none; }

.section-head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px; }
.section-head h2 { margin: 0; }
.about-summary { display: flex; gap: 24px; align-items: center; padding: 24px; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,.08); flex-wrap: wrap; }
.about-summary div { flex: 1; min-width: 240px; }

.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px; }
.post-card { background: #fff; color: #0f172a; border: 1px solid var(--color-border); border-radius: 16px; padding: 16px; display: flex; flex-direction: column; gap: 8px; box-shadow: 0 1px 2px rgba(0,0,0,.05); transition: box-shadow .2s, transform .2s; }
.post-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,.08); transform: translateY(-2px); }
.post-card img { width: 100%; height: 128px; object-fit: cover; border-radius: 4px; }
.post-card h3 { margin: 0; font-size: 1.125rem; }
.post-card p { margin: 0; font-size: .875rem; }
.card-meta { margin-top: auto; padding-top: 8px; display: flex; flex-direction: column; gap: 6px; font-size: .875rem; }
.card-date { font-size: .75rem; color: var(--color-muted); }
.category-label { font-size: .75rem; font-weight: 600; }
.empty-state { color: var(--color-muted); }

.filter-bar { display: flex; flex-wrap: wrap; gap: 8px; }
.filter-btn { padding: 4px 14px; border-radius: 999px; border: 1px solid var(--color-border); color: var(--color-text); font-size: .875rem; }
.filter-btn.active { background: var(--color-accent); border-color: var(--color-accent); color: #fff; }

.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 24px; }
.project-card { display: flex; flex-direction: column; gap: 8px; background: #fff; color: #0f172a; border: 1px solid var(--color-border); border-radius: 16px; padding: 20px; }
.project-card h3 { margin: 0; font-size: 1.125rem; }
.project-card p { margin: 0; font-size: .875rem; color: #4b5563; }
.chips { margin-top: auto; padding-top: 12px; display: flex; flex-wrap: wrap; gap: 8px; }
.chip { font-size: .75rem; padding: 4px 10px; border-radius: 999px; border: 1px solid var(--color-border); background: #f8fafc; color: #475569; }

.logo-banner { overflow: hidden; padding: 24px 0; }
.logo-track { display: flex; gap: 40px; align-items: center; white-space: nowrap; animation: logo-scroll 40s linear infinite; }
.logo-track img { filter: grayscale(1); transition: filter .3s; }
.logo-track img:hover { filter: none; }
.logo-sm { height: 40px; }
.logo-md { height: 56px; }
.logo-lg { height: 80px; }
@keyframes logo-scroll { 0% { transform: translateX(0); } 100% { transform: translateX(-50%); } }

.newsletter { background: rgba(37,99,235,.08); border-radius: 12px; padding: 24px; display: flex; flex-direction: column; align-items: center; text-align: center; }
.newsletter form { display: flex; gap: 12px; width: 100%; max-width: 28rem; flex-wrap: wrap; }
.newsletter input { flex: 1; padding: 8px 16px; border: 1px solid #d1d5db; border-radius: 4px; }
.newsletter button, .contact-submit { padding: 8px 24px; border: 0; border-radius: 4px; background: var(--color-accent); color: #fff; font-weight: 600; cursor: pointer; }

.contact-form { display: flex; flex-direction: column; gap: 16px; padding: 24px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.contact-form input, .contact-form textarea { padding: 8px 16px; border: 1px solid #d1d5db; border-radius: 4px; font: inherit; }
.contact-actions { display: flex; justify-content: flex-end; }
.contact-social { display: flex; gap: 24px; justify-content: center; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0,0,0,0); }

.modal-backdrop { position: fixed; inset: 0; z-index: 40; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,.1); backdrop-filter: blur(4px); }
.modal { position: relative; z-index: 50; background: #fff; color: #0f172a; max-width: 48rem; width: 100%; margin: 0 16px; max-height: 90vh; overflow-y: auto; padding: 8px 24px 24px; border-radius: 16px; border: 1px solid var(--color-border); box-shadow: 0 10px 30px rgba(0,0,0,.15); }
.modal-close { position: absolute; top: 8px; left: 8px; font-size: 1.875rem; color: #000; line-height: 1; }
.modal-close:hover { color: var(--color-accent); text-decoration: none; }
.post-content, .post-content * { color: #111827; }
.post-hero { width: 100%; height: auto; border-radius: 6px; margin: 40px 0 16px; }
.post-title { font-size: 1.5rem; display: flex; align-items: center; gap: 8px; margin: 0 0 8px; }
.post-badges { margin-bottom: 16px; }
.badge { display: inline-block; font-size: .75rem; font-weight: 600; padding: 4px 8px; border-radius: 4px; margin-right: 8px; }
.badge-kind { background: #dbeafe; }
.badge-topic { background: #dcfce7; }
.post-dateline { display: block; font-size: .75rem; margin-bottom: 8px; }
.post-content h3 { font-size: 1.125rem; margin: 16px 0 4px; }
.post-text, .post-list { font-size: .875rem; }
.post-list { padding-left: 24px; }

.site-footer { text-align: center; padding: 24px; font-size: .875rem; color: var(--color-muted); border-top: 1px solid var(--color-border); }
.error-page { text-align: center; padding: 80px 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_date_uses_short_month() {
        let settings = json!({ "date_format": "%b %-d, %Y" });
        assert_eq!(format_date("2025-06-18", &settings), "Jun 18, 2025");
        assert_eq!(format_date("2025-07-07", &settings), "Jul 7, 2025");
    }

    #[test]
    fn format_date_passes_through_garbage() {
        assert_eq!(format_date("soon", &json!({})), "soon");
    }

    #[test]
    fn page_href_encodes_pairs() {
        assert_eq!(page_href("/blog", &[]), "/blog");
        assert_eq!(
            page_href("/blog", &[("filter", "finance"), ("post", "mpesa")]),
            "/blog?filter=finance&post=mpesa"
        );
        assert_eq!(page_href("/", &[("post", "a b")]), "/?post=a+b");
    }

    #[test]
    fn links_keep_filter_and_drop_menu() {
        let ctx = json!({ "page": { "path": "/blog", "filter": "healthcare", "post": null, "menu": true } });
        let links = PageLinks::from_context(&ctx);
        assert_eq!(links.menu_toggle(), "/blog?filter=healthcare");
        assert_eq!(links.open_post("zipline"), "/blog?filter=healthcare&post=zipline#post-overlay");
        assert_eq!(links.close_post(), "/blog?filter=healthcare");
    }

    #[test]
    fn all_filter_is_not_carried() {
        let ctx = json!({ "page": { "path": "/blog", "filter": "all", "menu": false } });
        let links = PageLinks::from_context(&ctx);
        assert_eq!(links.menu_toggle(), "/blog?menu=open");
        assert_eq!(links.close_post(), "/blog");
    }

    #[test]
    fn no_modal_without_detail() {
        let ctx = json!({ "page": { "path": "/" }, "modal": null });
        assert_eq!(build_modal(&ctx, &PageLinks::from_context(&ctx)), "");
    }

    #[test]
    fn placeholder_modal_renders_text() {
        let ctx = json!({
            "page": { "path": "/blog" },
            "modal": { "kind": "placeholder", "text": "(Full post content will go here.)" }
        });
        let html = build_modal(&ctx, &PageLinks::from_context(&ctx));
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("(Full post content will go here.)"));
        assert!(html.contains("href=\"/blog\""));
    }

    #[test]
    fn html_escape_covers_markup() {
        assert_eq!(html_escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}

use serde_json::Value;

use crate::render::{field, html_escape};

const FOCUS_AREAS: [(&str, &str); 3] = [
    ("Strategy & Corporate Development", "Go-to-market planning, M&A screening and investor strategy."),
    ("Data & Research", "Market sizing, policy analysis and decision tools built on real data."),
    ("Grassroots Innovation", "Case studies of ideas that scaled from emerging markets."),
];

pub fn render_body(context: &Value) -> String {
    let settings = context.get("settings").cloned().unwrap_or_default();
    let s = |key: &str| field(&settings, key);

    let areas: String = FOCUS_AREAS
        .iter()
        .map(|(title, text)| {
            format!(
                "<li><strong>{}</strong><p>{}</p></li>",
                html_escape(title),
                html_escape(text)
            )
        })
        .collect();

    format!(
        r#"<section class="about-bio">
    <h1>About</h1>
    <p>{about}</p>
</section>
<section class="about-focus">
    <h2>What I work on</h2>
    <ul class="focus-list">{areas}</ul>
</section>
<section class="cta-row">
    <a href="/projects" class="pill">See my projects</a>
    <a href="/contact" class="pill">Get in touch</a>
</section>"#,
        about = html_escape(s("about_summary")),
        areas = areas,
    )
}

use serde_json::json;

use crate::config::SiteConfig;
use crate::models::post::PostSummary;

/// Build JSON-LD structured data for an open case study.
pub fn build_post_jsonld(config: &SiteConfig, post: &PostSummary) -> String {
    let base = config.base_url();
    let ld = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.description,
        "url": format!("{}/blog?post={}", base, post.key.slug()),
        "image": format!("{}{}", base, post.image),
        "datePublished": post.published.format("%Y-%m-%d").to_string(),
        "author": { "@type": "Person", "name": config.site_name },
        "publisher": { "@type": "Person", "name": config.site_name },
    });
    // A literal "</" would end the script element early
    let body = ld.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{}</script>", body)
}

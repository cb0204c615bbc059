use crate::config::SiteConfig;

use super::html_escape;

/// Build meta tags HTML string for a page. `title` of `None` means the site
/// title alone.
pub fn build_meta(
    config: &SiteConfig,
    title: Option<&str>,
    description: Option<&str>,
    image: Option<&str>,
    path: &str,
) -> String {
    let page_title = match title {
        Some(t) => format!("{} | {}", t, config.site_name),
        None => config.site_title.clone(),
    };
    let page_desc = description.unwrap_or(&config.site_description);
    let canonical = format!("{}{}", config.base_url(), path);

    let mut meta = format!(
        r#"<title>{}</title>
<meta name="description" content="{}">
<link rel="canonical" href="{}">"#,
        html_escape(&page_title),
        html_escape(page_desc),
        html_escape(&canonical),
    );

    if config.seo_open_graph {
        meta.push_str(&format!(
            r#"
<meta property="og:title" content="{}">
<meta property="og:description" content="{}">
<meta property="og:url" content="{}">
<meta property="og:site_name" content="{}">
<meta property="og:type" content="{}">"#,
            html_escape(&page_title),
            html_escape(page_desc),
            html_escape(&canonical),
            html_escape(&config.site_name),
            if image.is_some() { "article" } else { "website" },
        ));
        if let Some(img) = image {
            meta.push_str(&format!(
                "\n<meta property=\"og:image\" content=\"{}{}\">",
                html_escape(config.base_url()),
                html_escape(img)
            ));
        }
    }

    if config.seo_twitter_cards {
        meta.push_str(&format!(
            r#"
<meta name="twitter:card" content="{}">
<meta name="twitter:title" content="{}">
<meta name="twitter:description" content="{}">"#,
            if image.is_some() { "summary_large_image" } else { "summary" },
            html_escape(&page_title),
            html_escape(page_desc),
        ));
    }

    meta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_and_canonical() {
        let cfg = SiteConfig {
            site_url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        };
        let meta = build_meta(&cfg, Some("Contact"), None, None, "/contact");
        assert!(meta.contains("<title>Contact | Aimaan Shergill</title>"));
        assert!(meta.contains("href=\"https://example.com/contact\""));
        assert!(meta.contains("og:type\" content=\"website\""));
    }

    #[test]
    fn toggles_disable_social_tags() {
        let cfg = SiteConfig {
            seo_open_graph: false,
            seo_twitter_cards: false,
            ..SiteConfig::default()
        };
        let meta = build_meta(&cfg, None, None, Some("/static/stock/mpesa.jpg"), "/");
        assert!(!meta.contains("og:"));
        assert!(!meta.contains("twitter:"));
    }
}

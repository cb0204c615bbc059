use crate::config::SiteConfig;
use crate::models::post;
use crate::nav::NAV_LINKS;

/// Generate sitemap.xml content.
/// Returns None if sitemap_enabled is false.
pub fn generate_sitemap(config: &SiteConfig) -> Option<String> {
    if !config.sitemap_enabled {
        return None;
    }
    let site_url = config.base_url();

    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    for link in NAV_LINKS.iter() {
        let priority = if link.href == "/" { "1.0" } else { "0.8" };
        xml.push_str(&format!(
            "  <url><loc>{}{}</loc><changefreq>weekly</changefreq><priority>{}</priority></url>\n",
            site_url, link.href, priority
        ));
    }

    for p in post::catalog() {
        xml.push_str(&format!(
            "  <url><loc>{}/blog?post={}</loc><lastmod>{}</lastmod><priority>0.6</priority></url>\n",
            site_url,
            p.key.slug(),
            p.published.format("%Y-%m-%d")
        ));
    }

    xml.push_str("</urlset>");
    Some(xml)
}

/// Generate robots.txt content, pointing at the sitemap when one is served.
pub fn generate_robots(config: &SiteConfig) -> String {
    let mut content = config.robots_txt.clone();
    if config.sitemap_enabled {
        content.push_str(&format!("\nSitemap: {}/sitemap.xml", config.base_url()));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_lists_pages_and_posts() {
        let xml = generate_sitemap(&SiteConfig::default()).unwrap();
        assert!(xml.contains("<loc>http://localhost:8000/projects</loc>"));
        assert!(xml.contains("<loc>http://localhost:8000/blog?post=grameen</loc><lastmod>2025-06-18</lastmod>"));
        assert_eq!(xml.matches("<url>").count(), NAV_LINKS.len() + post::catalog().len());
    }

    #[test]
    fn disabled_sitemap_is_not_advertised() {
        let cfg = SiteConfig {
            sitemap_enabled: false,
            ..SiteConfig::default()
        };
        assert!(generate_sitemap(&cfg).is_none());
        assert_eq!(generate_robots(&cfg), "User-agent: *\nAllow: /");
    }
}

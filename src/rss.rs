use chrono::{NaiveDate, TimeZone};
use ::rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use crate::config::SiteConfig;
use crate::filter;
use crate::models::category::FilterSelection;
use crate::models::post;

/// Generate the RSS 2.0 feed for the Grassroot Ideas case studies, newest first.
pub fn generate_feed(config: &SiteConfig) -> String {
    let site_url = config.base_url();
    let tz: chrono_tz::Tz = config.timezone.parse().unwrap_or(chrono_tz::UTC);

    // RSS wants RFC 2822; posts are published at local midnight
    let format_rfc2822 = |d: NaiveDate| -> String {
        match d.and_hms_opt(0, 0, 0).map(|ndt| tz.from_local_datetime(&ndt).earliest()) {
            Some(Some(local)) => local.to_rfc2822(),
            _ => d.format("%a, %d %b %Y 00:00:00 +0000").to_string(),
        }
    };

    let posts = filter::apply(post::catalog(), FilterSelection::All);

    let items: Vec<Item> = posts
        .iter()
        .map(|p| {
            let link = format!("{}/blog?post={}", site_url, p.key.slug());
            ItemBuilder::default()
                .title(Some(p.title.to_string()))
                .link(Some(link.clone()))
                .guid(Some(GuidBuilder::default().value(link).permalink(true).build()))
                .pub_date(Some(format_rfc2822(p.published)))
                .description(Some(p.description.to_string()))
                .categories(vec![CategoryBuilder::default()
                    .name(p.category.label())
                    .build()])
                .build()
        })
        .collect();

    let last_build = posts.first().map(|p| format_rfc2822(p.published));

    ChannelBuilder::default()
        .title(format!("{} · Grassroot Ideas", config.site_name))
        .link(format!("{}/blog", site_url))
        .description(config.site_description.clone())
        .language(Some("en".to_string()))
        .last_build_date(last_build)
        .items(items)
        .build()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_lists_posts_newest_first() {
        let xml = generate_feed(&SiteConfig::default());
        let zipline = xml.find("<title>Zipline</title>").unwrap();
        let grameen = xml.find("<title>Grameen Bank</title>").unwrap();
        assert!(zipline < grameen);
        assert!(xml.contains("http://localhost:8000/blog?post=mpesa"));
        assert!(xml.contains("Jul 2025 00:00:00 +0000"));
    }

    #[test]
    fn pub_date_follows_timezone() {
        let cfg = SiteConfig {
            timezone: "Asia/Kolkata".to_string(),
            ..SiteConfig::default()
        };
        let xml = generate_feed(&cfg);
        assert!(xml.contains("18 Jun 2025 00:00:00 +0530"));
    }
}

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

/// Default location of the site config, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "site.toml";

/// Site-wide settings. Every field has a default, so a partial (or absent)
/// `site.toml` is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub site_title: String,
    pub site_description: String,
    pub site_url: String,
    pub tagline: String,
    pub about_summary: String,
    pub linkedin_url: String,
    pub contact_email: String,
    pub forms_endpoint: String,
    pub favicon: String,
    pub brand_image: String,
    pub profile_image: String,
    pub date_format: String,
    pub timezone: String,
    pub static_dir: String,
    pub seo_open_graph: bool,
    pub seo_twitter_cards: bool,
    pub sitemap_enabled: bool,
    pub rss_enabled: bool,
    pub robots_txt: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Aimaan Shergill".to_string(),
            site_title: "Hi, I'm Aimaan!".to_string(),
            site_description: "Personal website of Aimaan Shergill – strategy, data, and innovation.".to_string(),
            site_url: "http://localhost:8000".to_string(),
            tagline: "I help businesses grow through strategy, data, and innovation.".to_string(),
            about_summary: "I’m a Strategy & Corporate Development analyst at RapidSOS, working across GTM, M&A, and investor strategy. I’ve supported projects in public safety, healthcare, and infrastructure across North America, the Middle East, and South Asia.".to_string(),
            linkedin_url: "https://www.linkedin.com/in/aimaanshergill/".to_string(),
            contact_email: "aimaan.shergill@gmail.com".to_string(),
            forms_endpoint: "https://formspree.io/f/xjkrzney".to_string(),
            favicon: "/static/favicon.png".to_string(),
            brand_image: "/static/aimaan.png".to_string(),
            profile_image: "/static/profile.jpg".to_string(),
            date_format: "%b %-d, %Y".to_string(),
            timezone: "UTC".to_string(),
            static_dir: "website/static".to_string(),
            seo_open_graph: true,
            seo_twitter_cards: true,
            sitemap_enabled: true,
            rss_enabled: true,
            robots_txt: "User-agent: *\nAllow: /".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load from `GRASSROOT_CONFIG` if set, else `site.toml`.
    pub fn from_env() -> Result<Self, String> {
        let path = std::env::var("GRASSROOT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(&path)
    }

    /// Read and validate a config file. A missing file yields the defaults.
    pub fn load(path: &str) -> Result<Self, String> {
        if !Path::new(path).exists() {
            info!("No config at {}, using defaults", path);
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        let config = Self::parse(&raw).map_err(|e| format!("{}: {}", path, e))?;
        info!("Loaded site config from {}", path);
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        let config: SiteConfig = toml::from_str(raw).map_err(|e| format!("Invalid config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        check_http_url("site_url", &self.site_url)?;
        check_http_url("forms_endpoint", &self.forms_endpoint)?;
        check_http_url("linkedin_url", &self.linkedin_url)?;
        self.timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| format!("Unknown timezone: {}", self.timezone))?;
        if self.date_format.trim().is_empty() {
            return Err("date_format must not be empty".to_string());
        }
        Ok(())
    }

    /// `site_url` without a trailing slash, for joining with absolute paths.
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

fn check_http_url(field: &str, value: &str) -> Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("Invalid {}: {}", field, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("Invalid {}: unsupported scheme {}", field, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = SiteConfig::parse("site_name = \"Someone Else\"\nrss_enabled = false\n").unwrap();
        assert_eq!(cfg.site_name, "Someone Else");
        assert!(!cfg.rss_enabled);
        assert_eq!(cfg.forms_endpoint, SiteConfig::default().forms_endpoint);
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = SiteConfig::parse("forms_endpoint = \"ftp://example.com/f\"").unwrap_err();
        assert!(err.contains("forms_endpoint"));
    }

    #[test]
    fn rejects_unknown_timezone() {
        let err = SiteConfig::parse("timezone = \"Mars/Olympus\"").unwrap_err();
        assert!(err.contains("timezone"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(SiteConfig::parse("site_name = ").is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let cfg = SiteConfig::load("definitely/not/here/site.toml").unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let cfg = SiteConfig {
            site_url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(cfg.base_url(), "https://example.com");
    }
}

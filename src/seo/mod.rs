pub mod jsonld;
pub mod meta;
pub mod sitemap;

pub use jsonld::build_post_jsonld;
pub use meta::build_meta;
pub use sitemap::{generate_robots, generate_sitemap};

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

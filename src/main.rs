#[macro_use]
extern crate rocket;

use rocket::fs::{FileServer, Options};
use rocket::{Build, Rocket};

mod boot;
mod config;
mod designs;
mod filter;
mod modal;
mod models;
mod nav;
mod render;
mod routes;
mod rss;
mod seo;


use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::response::content::RawHtml;

use config::SiteConfig;

pub struct StaticCache;

#[rocket::async_trait]
impl Fairing for StaticCache {
    fn info(&self) -> Info {
        Info { name: "Static Asset Caching", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        if req.uri().path().starts_with("/static/") {
            res.set_header(Header::new("Cache-Control", "public, max-age=86400"));
        } else if res.content_type().map_or(false, |ct| ct.is_html()) {
            res.set_header(Header::new("Cache-Control", "no-cache"));
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the server around an already-loaded config. The static
/// directory may not exist yet; `boot::run` creates it on a real launch.
pub fn build_rocket(config: SiteConfig) -> Rocket<Build> {
    let static_dir = config.static_dir.clone();
    rocket::build()
        .manage(config)
        .attach(StaticCache)
        .mount("/static", FileServer::new(static_dir, Options::default() | Options::Missing))
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = match SiteConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = boot::run(&config) {
        log::error!("{}. Aborting.", e);
        std::process::exit(1);
    }

    build_rocket(config)
}

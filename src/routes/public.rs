use rocket::response::content::{RawHtml, RawXml};
use rocket::State;
use serde_json::{json, Value};

use crate::config::SiteConfig;
use crate::filter;
use crate::modal::ModalState;
use crate::models::category::FilterSelection;
use crate::models::post::{self, PostSummary};
use crate::models::{detail, logo, project};
use crate::nav::MenuState;
use crate::render;
use crate::seo;

/// Per-request UI state decoded from the query string.
struct PageState {
    path: &'static str,
    filter: FilterSelection,
    modal: ModalState,
    menu: MenuState,
}

impl PageState {
    fn new(path: &'static str, menu: Option<&str>) -> Self {
        PageState {
            path,
            filter: FilterSelection::All,
            modal: ModalState::Closed,
            menu: MenuState::from_query(menu),
        }
    }
}

/// The context every page shares: settings, page state, SEO tags and the
/// overlay's detail (null when closed).
fn base_context(config: &SiteConfig, state: &PageState, title: Option<&str>) -> Value {
    let open = state.modal.selected().and_then(post::find);

    let (seo_meta, jsonld) = match open {
        Some(p) => (
            seo::build_meta(config, Some(p.title), Some(p.description), Some(p.image), state.path),
            seo::build_post_jsonld(config, p),
        ),
        None => (seo::build_meta(config, title, None, None, state.path), String::new()),
    };
    let modal = match state.modal.selected() {
        Some(key) => {
            let body = detail::resolve(key.slug());
            if body.is_placeholder() {
                log::warn!("No case study written for {}", key.slug());
            }
            json!(body)
        }
        None => Value::Null,
    };

    json!({
        "settings": config,
        "page": {
            "path": state.path,
            "filter": state.filter.slug(),
            "post": state.modal.selected().map(|k| k.slug()),
            "menu": state.menu.is_expanded(),
        },
        "seo": seo_meta,
        "jsonld": jsonld,
        "modal": modal,
    })
}

fn insert(context: &mut Value, key: &str, value: Value) {
    if let Some(map) = context.as_object_mut() {
        map.insert(key.to_string(), value);
    }
}

fn posts_json(posts: &[&PostSummary]) -> Value {
    json!(posts)
}

// ── Home ───────────────────────────────────────────────

#[get("/?<post>&<menu>")]
pub fn home(config: &State<SiteConfig>, post: Option<&str>, menu: Option<&str>) -> RawHtml<String> {
    let featured = post::featured();
    let mut state = PageState::new("/", menu);
    state.modal = ModalState::from_query(post, &featured);

    let logos: Vec<Value> = logo::banner_track()
        .iter()
        .map(|l| json!({ "src": l.src, "alt": l.alt, "class": l.size.css_class() }))
        .collect();

    let mut context = base_context(config, &state, None);
    insert(&mut context, "posts", posts_json(&featured));
    insert(&mut context, "projects", json!(project::projects()));
    insert(&mut context, "logos", Value::Array(logos));

    RawHtml(render::render_page("home", &context))
}

// ── Blog ───────────────────────────────────────────────

#[get("/blog?<filter>&<post>&<menu>")]
pub fn blog(
    config: &State<SiteConfig>,
    filter: Option<&str>,
    post: Option<&str>,
    menu: Option<&str>,
) -> RawHtml<String> {
    let mut state = PageState::new("/blog", menu);
    state.filter = FilterSelection::from_query(filter);
    let visible = filter::apply(post::catalog(), state.filter);
    state.modal = ModalState::from_query(post, &visible);

    let mut context = base_context(config, &state, Some("Grassroot Ideas"));
    insert(&mut context, "posts", posts_json(&visible));
    insert(&mut context, "filters", json!(filter::options(state.filter)));

    RawHtml(render::render_page("blog", &context))
}

// ── About / Projects / Contact ─────────────────────────

#[get("/about?<menu>")]
pub fn about(config: &State<SiteConfig>, menu: Option<&str>) -> RawHtml<String> {
    let state = PageState::new("/about", menu);
    let context = base_context(config, &state, Some("About"));
    RawHtml(render::render_page("about", &context))
}

#[get("/projects?<menu>")]
pub fn projects(config: &State<SiteConfig>, menu: Option<&str>) -> RawHtml<String> {
    let state = PageState::new("/projects", menu);
    let mut context = base_context(config, &state, Some("Projects"));
    insert(&mut context, "projects", json!(project::projects()));
    RawHtml(render::render_page("projects", &context))
}

#[get("/contact?<menu>")]
pub fn contact(config: &State<SiteConfig>, menu: Option<&str>) -> RawHtml<String> {
    let state = PageState::new("/contact", menu);
    let context = base_context(config, &state, Some("Contact"));
    RawHtml(render::render_page("contact", &context))
}

// ── RSS Feed ───────────────────────────────────────────

#[get("/feed")]
pub fn rss_feed(config: &State<SiteConfig>) -> Option<RawXml<String>> {
    if !config.rss_enabled {
        return None;
    }
    Some(RawXml(crate::rss::generate_feed(config)))
}

// ── Sitemap ────────────────────────────────────────────

#[get("/sitemap.xml")]
pub fn sitemap(config: &State<SiteConfig>) -> Option<RawXml<String>> {
    seo::generate_sitemap(config).map(RawXml)
}

// ── Robots.txt ─────────────────────────────────────────

#[get("/robots.txt")]
pub fn robots(config: &State<SiteConfig>) -> String {
    seo::generate_robots(config)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![home, blog, about, projects, contact, rss_feed, sitemap, robots]
}

use chrono::NaiveDate;
use serde::Serialize;

use super::category::Category;

/// Identifier of one Grassroot Ideas case study. Doubles as the `?post=` value.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostKey {
    Grameen,
    Zipline,
    Narayana,
    Taobao,
    Mpesa,
}

impl PostKey {
    pub const ALL: [PostKey; 5] = [
        PostKey::Grameen,
        PostKey::Zipline,
        PostKey::Narayana,
        PostKey::Taobao,
        PostKey::Mpesa,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PostKey::Grameen => "grameen",
            PostKey::Zipline => "zipline",
            PostKey::Narayana => "narayana",
            PostKey::Taobao => "taobao",
            PostKey::Mpesa => "mpesa",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

/// Card data for one case study.
#[derive(Debug, Serialize, Clone)]
pub struct PostSummary {
    pub key: PostKey,
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub published: NaiveDate,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid catalog date"),
    }
}

/// The blog catalog, in authoring order. Listing order is decided by the filter.
pub static CATALOG: [PostSummary; 5] = [
    PostSummary {
        key: PostKey::Grameen,
        title: "Grameen Bank",
        image: "/static/stock/grameen.jpg",
        description: "Pioneering micro-loans for the poor, Grameen Bank sparked a global micro-finance revolution and proved the unbanked are just underserved.",
        category: Category::Finance,
        published: date(2025, 6, 18),
    },
    PostSummary {
        key: PostKey::Zipline,
        title: "Zipline",
        image: "/static/stock/zipline.jpg",
        description: "Drones delivering life-saving medical supplies to remote areas, transforming logistics and public health in Africa and beyond.",
        category: Category::Healthcare,
        published: date(2025, 7, 7),
    },
    PostSummary {
        key: PostKey::Narayana,
        title: "Narayana Health",
        image: "/static/stock/narayana-health.jpg",
        description: "World-class cardiac care at a fraction of the cost, making healthcare accessible for millions in India",
        category: Category::Healthcare,
        published: date(2025, 7, 2),
    },
    PostSummary {
        key: PostKey::Taobao,
        title: "Tao Bao Villages",
        image: "/static/stock/taobao-village.jpg",
        description: "Rural e-commerce hubs in China empowering small villages to connect to the global digital economy",
        category: Category::Ecommerce,
        published: date(2025, 6, 28),
    },
    PostSummary {
        key: PostKey::Mpesa,
        title: "M-Pesa",
        image: "/static/stock/mpesa.jpg",
        description: "Mobile money transforming financial inclusion and everyday life for millions across Africa",
        category: Category::Finance,
        published: date(2025, 6, 23),
    },
];

/// Posts shown on the home page, in display order.
pub const FEATURED: [PostKey; 3] = [PostKey::Narayana, PostKey::Taobao, PostKey::Mpesa];

pub fn catalog() -> &'static [PostSummary] {
    &CATALOG
}

pub fn find(key: PostKey) -> Option<&'static PostSummary> {
    CATALOG.iter().find(|p| p.key == key)
}

pub fn featured() -> Vec<&'static PostSummary> {
    FEATURED.iter().filter_map(|k| find(*k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_keys_are_unique() {
        let keys: HashSet<PostKey> = CATALOG.iter().map(|p| p.key).collect();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn every_key_has_a_summary() {
        for key in PostKey::ALL {
            assert!(find(key).is_some(), "{} missing from catalog", key.slug());
        }
    }

    #[test]
    fn key_slugs_round_trip() {
        for key in PostKey::ALL {
            assert_eq!(PostKey::from_slug(key.slug()), Some(key));
        }
        assert_eq!(PostKey::from_slug("kiva"), None);
        assert_eq!(PostKey::from_slug("MPESA"), None);
    }

    #[test]
    fn featured_posts_resolve_in_order() {
        let titles: Vec<&str> = featured().iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Narayana Health", "Tao Bao Villages", "M-Pesa"]);
    }

    #[test]
    fn summary_serializes_slug_and_iso_date() {
        let v = serde_json::to_value(find(PostKey::Zipline).unwrap()).unwrap();
        assert_eq!(v["key"], "zipline");
        assert_eq!(v["category"], "healthcare");
        assert_eq!(v["published"], "2025-07-07");
    }
}

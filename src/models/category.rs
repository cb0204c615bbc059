use serde::{Deserialize, Serialize};

/// Topic a case study is filed under.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ecommerce,
    Energy,
    Finance,
    Healthcare,
    Technology,
    Other,
}

impl Category {
    /// All categories in filter-bar order.
    pub const ALL: [Category; 6] = [
        Category::Ecommerce,
        Category::Energy,
        Category::Finance,
        Category::Healthcare,
        Category::Technology,
        Category::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Ecommerce => "ecommerce",
            Category::Energy => "energy",
            Category::Finance => "finance",
            Category::Healthcare => "healthcare",
            Category::Technology => "technology",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Ecommerce => "E-Commerce",
            Category::Energy => "Energy",
            Category::Finance => "Finance",
            Category::Healthcare => "Healthcare",
            Category::Technology => "Technology",
            Category::Other => "Other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// The active category filter on the blog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Only(Category),
}

impl FilterSelection {
    pub fn slug(self) -> &'static str {
        match self {
            FilterSelection::All => "all",
            FilterSelection::Only(c) => c.slug(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterSelection::All => "All",
            FilterSelection::Only(c) => c.label(),
        }
    }

    /// Parse a `?filter=` value. Missing or unrecognised values select `All`.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => FilterSelection::All,
            Some(slug) => match Category::from_slug(slug) {
                Some(c) => FilterSelection::Only(c),
                None => {
                    log::debug!("Ignoring unknown blog filter {:?}", slug);
                    FilterSelection::All
                }
            },
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Only(c) => c == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_slug(c.slug()), Some(c));
        }
        assert_eq!(Category::from_slug("sports"), None);
    }

    #[test]
    fn ecommerce_label_is_hyphenated() {
        assert_eq!(Category::Ecommerce.label(), "E-Commerce");
    }

    #[test]
    fn filter_from_query_defaults_to_all() {
        assert_eq!(FilterSelection::from_query(None), FilterSelection::All);
        assert_eq!(FilterSelection::from_query(Some("")), FilterSelection::All);
        assert_eq!(FilterSelection::from_query(Some("all")), FilterSelection::All);
        assert_eq!(FilterSelection::from_query(Some("nonsense")), FilterSelection::All);
        assert_eq!(
            FilterSelection::from_query(Some("energy")),
            FilterSelection::Only(Category::Energy)
        );
    }

    #[test]
    fn all_matches_everything() {
        for c in Category::ALL {
            assert!(FilterSelection::All.matches(c));
        }
        assert!(!FilterSelection::Only(Category::Finance).matches(Category::Energy));
    }
}

use serde::Serialize;

/// Site-wide navigation targets, in header order.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", href: "/" },
    NavLink { name: "About", href: "/about" },
    NavLink { name: "Blog", href: "/blog" },
    NavLink { name: "Projects", href: "/projects" },
    NavLink { name: "Contact", href: "/contact" },
];

/// Mobile menu state. Lives only in the `?menu=` parameter of the current URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        }
    }

    /// Following any menu link collapses the menu.
    pub fn select(self, _link: &NavLink) -> Self {
        MenuState::Collapsed
    }

    pub fn is_expanded(self) -> bool {
        self == MenuState::Expanded
    }

    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("open") => MenuState::Expanded,
            _ => MenuState::Collapsed,
        }
    }

    pub fn query_value(self) -> Option<&'static str> {
        match self {
            MenuState::Collapsed => None,
            MenuState::Expanded => Some("open"),
        }
    }
}

/// Whether `link` is the page at `path`.
pub fn is_current(link: &NavLink, path: &str) -> bool {
    link.href == path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_flips_back() {
        let s = MenuState::default();
        assert_eq!(s, MenuState::Collapsed);
        assert_eq!(s.toggle(), MenuState::Expanded);
        assert_eq!(s.toggle().toggle(), MenuState::Collapsed);
    }

    #[test]
    fn selecting_a_link_collapses() {
        for link in &NAV_LINKS {
            assert_eq!(MenuState::Expanded.select(link), MenuState::Collapsed);
            assert_eq!(MenuState::Collapsed.select(link), MenuState::Collapsed);
        }
    }

    #[test]
    fn query_round_trip() {
        for s in [MenuState::Collapsed, MenuState::Expanded] {
            assert_eq!(MenuState::from_query(s.query_value()), s);
        }
        assert_eq!(MenuState::from_query(Some("yes")), MenuState::Collapsed);
    }

    #[test]
    fn routes_cover_every_page() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/", "/about", "/blog", "/projects", "/contact"]);
        assert!(is_current(&NAV_LINKS[2], "/blog"));
    }
}

//! Site navigation table.

/// A top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Navbar entries in display order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        path: "/",
    },
    NavLink {
        label: "About",
        path: "/about",
    },
    NavLink {
        label: "Magmist",
        path: "/products",
    },
    NavLink {
        label: "Team",
        path: "/team",
    },
    NavLink {
        label: "Contact",
        path: "/contact",
    },
];

/// Footer quick links. Same routes, with the product styled as a wordmark.
pub const QUICK_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        path: "/",
    },
    NavLink {
        label: "About",
        path: "/about",
    },
    NavLink {
        label: "Mag | mist",
        path: "/products",
    },
    NavLink {
        label: "Team",
        path: "/team",
    },
    NavLink {
        label: "Contact",
        path: "/contact",
    },
];

/// Whether `path` is the page being shown. Exact match only.
#[must_use]
pub fn is_active(current: &str, path: &str) -> bool {
    current == path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_is_exact_match() {
        assert!(is_active("/", "/"));
        assert!(is_active("/team", "/team"));
        assert!(!is_active("/team", "/"));
        assert!(!is_active("/team/", "/team"));
        assert!(!is_active("/products/1", "/products"));
    }

    #[test]
    fn exactly_one_link_active_per_route() {
        for link in NAV_LINKS {
            let active = NAV_LINKS
                .iter()
                .filter(|other| is_active(link.path, other.path))
                .count();
            assert_eq!(active, 1, "{}", link.path);
        }
    }

    #[test]
    fn quick_links_cover_nav_routes() {
        let nav: Vec<_> = NAV_LINKS.iter().map(|l| l.path).collect();
        let quick: Vec<_> = QUICK_LINKS.iter().map(|l| l.path).collect();
        assert_eq!(nav, quick);
    }
}

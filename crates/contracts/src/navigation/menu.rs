//! Static navigation tree of the site.
//!
//! The tree is at most two levels deep: top-level entries, each with an
//! optional list of leaf children. Child labels may carry a price annotation
//! of the form `"<title> - KES <amount>"`.

use std::iter;

const PRICE_SEPARATOR: &str = " - KES ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub children: &'static [MenuEntry],
}

impl MenuEntry {
    pub const fn link(label: &'static str, route: &'static str) -> Self {
        Self {
            label,
            route,
            children: &[],
        }
    }

    pub const fn group(
        label: &'static str,
        route: &'static str,
        children: &'static [MenuEntry],
    ) -> Self {
        Self {
            label,
            route,
            children,
        }
    }

    /// Only entries with at least one child can be expanded.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Label without the price annotation.
    pub fn title(&self) -> &'static str {
        self.label
            .rsplit_once(PRICE_SEPARATOR)
            .map(|(title, _)| title)
            .unwrap_or(self.label)
    }

    /// Price in Kenyan shillings, if the label carries one.
    pub fn price_kes(&self) -> Option<u32> {
        self.label
            .rsplit_once(PRICE_SEPARATOR)
            .and_then(|(_, amount)| amount.trim().parse().ok())
    }
}

const HAIR_DRESSING: &[MenuEntry] = &[
    MenuEntry::link("Braids - KES 300", "/hairdressing/braids"),
    MenuEntry::link("Knotless Braids - KES 500", "/hairdressing/knotless"),
    MenuEntry::link("Weaving - KES 500", "/hairdressing/weaving"),
    MenuEntry::link("Wash & Blow Dry - KES 200", "/hairdressing/wash-blow"),
    MenuEntry::link("Twist Out - KES 400", "/hairdressing/twist"),
];

const NAIL_CARE: &[MenuEntry] = &[
    MenuEntry::link("Pedicure + Polish - KES 400", "/nailcare/pedicure-polish"),
    MenuEntry::link("Pedicure + Gel Polish - KES 500", "/nailcare/pedicure-gel"),
    MenuEntry::link("Manicure + Polish - KES 250", "/nailcare/manicure-polish"),
    MenuEntry::link("Manicure + Gel Polish - KES 350", "/nailcare/manicure-gel"),
    MenuEntry::link("Polish - KES 100", "/nailcare/polish"),
    MenuEntry::link("Gel Polish - KES 200", "/nailcare/gel-polish"),
    MenuEntry::link("Tip Polish - KES 300", "/nailcare/tip-polish"),
    MenuEntry::link("Tip Gel - KES 500", "/nailcare/tip-gel"),
    MenuEntry::link("Stick-on Polish - KES 300", "/nailcare/stick-polish"),
    MenuEntry::link("Stick-on Gel - KES 400", "/nailcare/stick-gel"),
    MenuEntry::link("Eyebrows Tattoo - KES 200", "/nailcare/eyebrows"),
];

pub const NAVIGATION: &[MenuEntry] = &[
    MenuEntry::link("Home", "/"),
    MenuEntry::group("Hair Dressing", "/hairdressing", HAIR_DRESSING),
    MenuEntry::group("Nail Care", "/nailcare", NAIL_CARE),
    MenuEntry::link("Dreadlocks", "/dreadlocks"),
    MenuEntry::link("Trench Coats", "/coats"),
    MenuEntry::link("Book Now", "/booking"),
    MenuEntry::link("Contact", "/contact"),
    MenuEntry::link("About Us", "/about"),
];

/// Every entry of the tree, parents before their children.
pub fn all_entries() -> impl Iterator<Item = &'static MenuEntry> {
    NAVIGATION
        .iter()
        .flat_map(|entry| iter::once(entry).chain(entry.children.iter()))
}

pub fn find_by_route(route: &str) -> Option<&'static MenuEntry> {
    all_entries().find(|entry| entry.route == route)
}

/// Case-insensitive substring match over every label. A blank query
/// matches nothing.
pub fn search_services(query: &str) -> Vec<&'static MenuEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    all_entries()
        .filter(|entry| entry.label.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_depth_is_at_most_two() {
        for entry in NAVIGATION {
            for child in entry.children {
                assert!(!child.has_children(), "{} is nested too deep", child.label);
            }
        }
    }

    #[test]
    fn test_routes_are_unique() {
        let mut routes: Vec<_> = all_entries().map(|e| e.route).collect();
        let total = routes.len();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), total);
    }

    #[test]
    fn test_price_annotation() {
        let braids = find_by_route("/hairdressing/braids").unwrap();
        assert_eq!(braids.title(), "Braids");
        assert_eq!(braids.price_kes(), Some(300));

        let wash = find_by_route("/hairdressing/wash-blow").unwrap();
        assert_eq!(wash.title(), "Wash & Blow Dry");
        assert_eq!(wash.price_kes(), Some(200));

        let home = find_by_route("/").unwrap();
        assert_eq!(home.title(), "Home");
        assert_eq!(home.price_kes(), None);
    }

    #[test]
    fn test_find_by_route_covers_children() {
        assert_eq!(find_by_route("/nailcare").unwrap().children.len(), 11);
        assert_eq!(
            find_by_route("/nailcare/eyebrows").unwrap().label,
            "Eyebrows Tattoo - KES 200"
        );
        assert!(find_by_route("/nailcare?x=1").is_none());
        assert!(find_by_route("/missing").is_none());
    }

    #[test]
    fn test_search_services() {
        let labels: Vec<_> = search_services("  BRAIDS ").iter().map(|e| e.title()).collect();
        assert_eq!(labels, vec!["Braids", "Knotless Braids"]);

        assert_eq!(search_services("gel").len(), 5);
        assert!(search_services("   ").is_empty());
        assert!(search_services("perm").is_empty());
    }
}

//! Open/closed state of the site navigation.
//!
//! Desktop dropdowns follow pointer and focus, mobile dropdowns follow taps,
//! and the mobile menu itself has its own flag. Desktop and mobile state live
//! in separate maps. No dropdown ever closes another one.

use contracts::navigation::MenuEntry;

use super::menu_state::{DropdownKey, MenuOpenState};

#[derive(Clone, Debug)]
pub struct NavigationModel {
    entries: &'static [MenuEntry],
    menu_open: bool,
    desktop: MenuOpenState,
    mobile: MenuOpenState,
}

impl NavigationModel {
    pub fn new(entries: &'static [MenuEntry]) -> Self {
        Self {
            entries,
            menu_open: false,
            desktop: MenuOpenState::new(),
            mobile: MenuOpenState::new(),
        }
    }

    pub fn entries(&self) -> &'static [MenuEntry] {
        self.entries
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        log::debug!("mobile menu open: {}", self.menu_open);
        self.menu_open
    }

    pub fn toggle_mobile(&mut self, entry: &MenuEntry) -> bool {
        let key = mobile_key(entry);
        let expanded = self.mobile.toggle(&key);
        log::debug!("{} expanded: {}", key, expanded);
        expanded
    }

    pub fn is_mobile_expanded(&self, entry: &MenuEntry) -> bool {
        entry.has_children() && self.mobile.is_expanded(&mobile_key(entry))
    }

    /// Also used for keyboard focus entering the dropdown.
    pub fn pointer_enter(&mut self, entry: &MenuEntry) {
        self.desktop.set(&desktop_key(entry), true);
    }

    pub fn pointer_leave(&mut self, entry: &MenuEntry) {
        self.desktop.set(&desktop_key(entry), false);
    }

    pub fn is_desktop_revealed(&self, entry: &MenuEntry) -> bool {
        entry.has_children() && self.desktop.is_expanded(&desktop_key(entry))
    }

    /// A leaf link was followed: close the mobile menu and collapse its
    /// dropdowns. Desktop panels keep following pointer and focus.
    pub fn select_leaf(&mut self) {
        self.menu_open = false;
        self.mobile.collapse_all();
        log::debug!("leaf selected, mobile menu collapsed");
    }
}

fn desktop_key(entry: &MenuEntry) -> String {
    DropdownKey::Desktop(entry.label.to_string()).to_string()
}

fn mobile_key(entry: &MenuEntry) -> String {
    DropdownKey::Mobile(entry.label.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::{find_by_route, NAVIGATION};

    fn hair() -> &'static MenuEntry {
        find_by_route("/hairdressing").unwrap()
    }

    fn nails() -> &'static MenuEntry {
        find_by_route("/nailcare").unwrap()
    }

    fn home() -> &'static MenuEntry {
        find_by_route("/").unwrap()
    }

    #[test]
    fn test_initially_collapsed() {
        let model = NavigationModel::new(NAVIGATION);
        assert!(!model.is_menu_open());
        for entry in model.entries() {
            assert!(!model.is_mobile_expanded(entry));
            assert!(!model.is_desktop_revealed(entry));
        }
    }

    #[test]
    fn test_mobile_toggle_twice_returns_to_collapsed() {
        let mut model = NavigationModel::new(NAVIGATION);
        assert!(model.toggle_mobile(hair()));
        assert!(model.is_mobile_expanded(hair()));
        assert!(!model.toggle_mobile(hair()));
        assert!(!model.is_mobile_expanded(hair()));
    }

    #[test]
    fn test_mobile_toggles_are_independent() {
        let mut model = NavigationModel::new(NAVIGATION);
        model.toggle_mobile(hair());
        model.toggle_mobile(nails());
        assert!(model.is_mobile_expanded(hair()));
        assert!(model.is_mobile_expanded(nails()));

        model.toggle_mobile(hair());
        assert!(!model.is_mobile_expanded(hair()));
        assert!(model.is_mobile_expanded(nails()));
    }

    #[test]
    fn test_entry_without_children_never_expands() {
        let mut model = NavigationModel::new(NAVIGATION);
        model.toggle_mobile(home());
        model.pointer_enter(home());
        assert!(!model.is_mobile_expanded(home()));
        assert!(!model.is_desktop_revealed(home()));
    }

    #[test]
    fn test_desktop_and_mobile_state_are_separate() {
        let mut model = NavigationModel::new(NAVIGATION);
        model.pointer_enter(hair());
        assert!(model.is_desktop_revealed(hair()));
        assert!(!model.is_mobile_expanded(hair()));

        model.pointer_leave(hair());
        model.toggle_mobile(hair());
        assert!(!model.is_desktop_revealed(hair()));
        assert!(model.is_mobile_expanded(hair()));
    }

    #[test]
    fn test_desktop_hover_has_no_mutual_exclusion() {
        let mut model = NavigationModel::new(NAVIGATION);
        model.pointer_enter(hair());
        model.pointer_enter(nails());
        assert!(model.is_desktop_revealed(hair()));
        assert!(model.is_desktop_revealed(nails()));

        model.pointer_leave(nails());
        assert!(!model.is_desktop_revealed(nails()));
    }

    #[test]
    fn test_select_leaf_collapses_mobile_menu() {
        let mut model = NavigationModel::new(NAVIGATION);
        model.toggle_menu();
        model.toggle_mobile(hair());
        model.toggle_mobile(nails());

        model.select_leaf();
        assert!(!model.is_menu_open());
        assert!(!model.is_mobile_expanded(hair()));
        assert!(!model.is_mobile_expanded(nails()));
    }

    #[test]
    fn test_select_leaf_keeps_desktop_panel_under_pointer() {
        let mut model = NavigationModel::new(NAVIGATION);
        model.pointer_enter(hair());

        model.select_leaf();
        assert!(model.is_desktop_revealed(hair()));

        model.pointer_leave(hair());
        assert!(!model.is_desktop_revealed(hair()));
    }

    #[test]
    fn test_select_leaf_with_nothing_expanded() {
        let mut model = NavigationModel::new(NAVIGATION);
        assert!(model.toggle_menu());
        model.select_leaf();
        assert!(!model.is_menu_open());
    }
}

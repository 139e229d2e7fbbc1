use contracts::navigation::{MenuEntry, NavigationIntent, NAVIGATION};
use leptos::prelude::*;

use crate::layout::header::navigation_model::NavigationModel;
use crate::layout::header::search::{SearchDispatcher, SearchDraft};
use crate::layout::scroll::watcher::{ScrollRequest, ScrollWatcher};
use crate::shared::config::ShellConfig;

/// Local UI state of one mounted page shell.
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub navigation: RwSignal<NavigationModel>,
    pub search_draft: RwSignal<SearchDraft>,
    pub show_scroll_top: RwSignal<bool>,
    scroll_watcher: StoredValue<ScrollWatcher>,
    search: StoredValue<SearchDispatcher>,
}

impl ShellContext {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            navigation: RwSignal::new(NavigationModel::new(NAVIGATION)),
            search_draft: RwSignal::new(SearchDraft::default()),
            show_scroll_top: RwSignal::new(false),
            scroll_watcher: StoredValue::new(ScrollWatcher::new(config.scroll.top_button_threshold)),
            search: StoredValue::new(SearchDispatcher::new(
                config.routes.search.as_str(),
                config.routes.search_param.as_str(),
            )),
        }
    }

    pub fn toggle_menu(&self) {
        self.navigation.update(|nav| {
            nav.toggle_menu();
        });
    }

    pub fn toggle_mobile(&self, entry: &'static MenuEntry) {
        self.navigation.update(|nav| {
            nav.toggle_mobile(entry);
        });
    }

    pub fn reveal_desktop(&self, entry: &'static MenuEntry) {
        self.navigation.update(|nav| nav.pointer_enter(entry));
    }

    pub fn hide_desktop(&self, entry: &'static MenuEntry) {
        self.navigation.update(|nav| nav.pointer_leave(entry));
    }

    pub fn select_leaf(&self) {
        self.navigation.update(|nav| nav.select_leaf());
    }

    pub fn set_search_text(&self, text: String) {
        self.search_draft.update(|draft| draft.set(text));
    }

    /// Subscribers of the draft are only notified when the submit went
    /// through and cleared it.
    pub fn submit_search(&self) -> Option<NavigationIntent> {
        let dispatcher = self.search.get_value();
        self.search_draft
            .try_maybe_update(|draft| {
                let intent = dispatcher.submit(draft);
                (intent.is_some(), intent)
            })
            .flatten()
    }

    pub fn observe_offset(&self, offset_y: f64) {
        let mut flipped = None;
        self.scroll_watcher
            .update_value(|watcher| flipped = watcher.observe_offset(offset_y));
        if let Some(visible) = flipped {
            self.show_scroll_top.set(visible);
        }
    }

    pub fn observe_path(&self, path: &str) -> Option<ScrollRequest> {
        let mut request = None;
        self.scroll_watcher
            .update_value(|watcher| request = watcher.observe_path(path));
        request
    }

    pub fn scroll_to_top_request(&self) -> ScrollRequest {
        self.scroll_watcher.with_value(|watcher| watcher.scroll_to_top())
    }
}

pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().expect("ShellContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_leaves_draft_alone() {
        Owner::new().with(|| {
            let shell = ShellContext::new(&ShellConfig::default());
            shell.set_search_text("   ".to_string());

            assert_eq!(shell.submit_search(), None);
            assert_eq!(shell.search_draft.with_untracked(|d| d.as_str().to_string()), "   ");
        });
    }

    #[test]
    fn test_search_submit_clears_draft() {
        Owner::new().with(|| {
            let shell = ShellContext::new(&ShellConfig::default());
            shell.set_search_text("  gel polish ".to_string());

            let intent = shell.submit_search().unwrap();
            assert_eq!(intent.href(), "/search?q=gel%20polish");
            assert!(shell.search_draft.with_untracked(|d| d.is_empty()));
        });
    }

    #[test]
    fn test_scroll_signal_follows_threshold() {
        Owner::new().with(|| {
            let shell = ShellContext::new(&ShellConfig::default());
            shell.observe_offset(120.0);
            assert!(!shell.show_scroll_top.get_untracked());

            shell.observe_offset(301.0);
            assert!(shell.show_scroll_top.get_untracked());

            shell.observe_offset(300.0);
            assert!(!shell.show_scroll_top.get_untracked());
        });
    }
}

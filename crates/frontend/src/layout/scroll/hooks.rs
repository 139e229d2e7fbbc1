use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::watcher::{ScrollBehavior, ScrollRequest};
use crate::layout::global_context::ShellContext;

pub fn apply_scroll(request: ScrollRequest) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match request.behavior {
        ScrollBehavior::Instant => window.scroll_to_with_x_and_y(0.0, request.top),
        ScrollBehavior::Smooth => {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(request.top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Jump to the top whenever the route path changes. Query-only changes leave
/// `pathname` untouched and do not trigger.
pub fn use_route_scroll_reset(shell: ShellContext) {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        let path = pathname.get();
        if let Some(request) = shell.observe_path(&path) {
            log::debug!("route changed to {}, resetting scroll", path);
            apply_scroll(request);
        }
    });
}

/// Keep `show_scroll_top` in sync with the window offset while the shell is
/// mounted.
pub fn use_scroll_signal(shell: ShellContext) {
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        shell.observe_offset(offset);
    });

    on_cleanup(move || handle.remove());
}

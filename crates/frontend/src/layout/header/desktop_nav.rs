use contracts::navigation::MenuEntry;
use leptos::prelude::*;

use crate::layout::global_context::{use_shell, ShellContext};
use crate::shared::icons;

/// One top-level entry: a plain link, or a trigger whose panel opens while
/// the pointer or keyboard focus is inside it.
#[component]
pub fn DesktopNavEntry(entry: &'static MenuEntry) -> impl IntoView {
    let shell = use_shell();

    if !entry.has_children() {
        return view! {
            <a href=entry.route class="desktop-nav__link" on:click=move |_| shell.select_leaf()>
                <span>{entry.label}</span>
            </a>
        }
        .into_any();
    }

    let is_open = move || shell.navigation.with(|nav| nav.is_desktop_revealed(entry));

    view! {
        <div
            class="desktop-nav__category"
            on:mouseenter=move |_| shell.reveal_desktop(entry)
            on:mouseleave=move |_| shell.hide_desktop(entry)
            on:focusin=move |_| shell.reveal_desktop(entry)
            on:focusout=move |_| shell.hide_desktop(entry)
        >
            <button
                class="desktop-nav__trigger"
                class:desktop-nav__trigger--active=is_open
                aria-haspopup="true"
                aria-expanded=move || is_open().to_string()
            >
                <span>{entry.label}</span>
                <span class="desktop-nav__chevron" class:desktop-nav__chevron--open=is_open>
                    {icons::icon("chevron-down")}
                </span>
            </button>

            <div class="desktop-nav__panel" class:desktop-nav__panel--open=is_open>
                {entry.children.iter().map(|child| leaf_link(shell, child)).collect_view()}
            </div>
        </div>
    }
    .into_any()
}

fn leaf_link(shell: ShellContext, child: &'static MenuEntry) -> impl IntoView {
    view! {
        <a href=child.route class="desktop-nav__item" on:click=move |_| shell.select_leaf()>
            {child.label}
        </a>
    }
}

#[component]
pub fn DesktopNav() -> impl IntoView {
    let entries = use_shell().navigation.with_untracked(|nav| nav.entries());

    view! {
        <nav class="desktop-nav">
            {entries.iter().map(|entry| view! { <DesktopNavEntry entry=entry /> }).collect_view()}
        </nav>
    }
}

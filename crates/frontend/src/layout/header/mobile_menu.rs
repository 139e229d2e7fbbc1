use contracts::navigation::MenuEntry;
use leptos::prelude::*;

use super::search_box::SearchBox;
use crate::layout::global_context::use_shell;
use crate::shared::icons;

/// Accordion entry of the mobile menu. The chevron opens the dropdown, which
/// stays open until tapped again or a link is followed.
#[component]
fn MobileMenuEntry(entry: &'static MenuEntry) -> impl IntoView {
    let shell = use_shell();

    if !entry.has_children() {
        return view! {
            <div class="mobile-menu__entry">
                <a href=entry.route class="mobile-menu__link" on:click=move |_| shell.select_leaf()>
                    {entry.label}
                </a>
            </div>
        }
        .into_any();
    }

    let is_expanded = move || shell.navigation.with(|nav| nav.is_mobile_expanded(entry));

    view! {
        <div class="mobile-menu__entry">
            <div class="mobile-menu__row">
                <span class="mobile-menu__label">{entry.label}</span>
                <button
                    class="mobile-menu__toggle"
                    aria-expanded=move || is_expanded().to_string()
                    on:click=move |_| shell.toggle_mobile(entry)
                >
                    <span class="mobile-menu__chevron" class:mobile-menu__chevron--open=is_expanded>
                        {icons::icon("chevron-down")}
                    </span>
                </button>
            </div>
            <Show when=is_expanded>
                <div class="mobile-menu__children">
                    {entry.children.iter().map(|child| view! {
                        <a href=child.route class="mobile-menu__child" on:click=move |_| shell.select_leaf()>
                            {child.label}
                        </a>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
pub fn MobileMenu() -> impl IntoView {
    let shell = use_shell();
    let entries = shell.navigation.with_untracked(|nav| nav.entries());

    view! {
        <Show when=move || shell.navigation.with(|nav| nav.is_menu_open())>
            <div class="mobile-menu">
                <SearchBox class="mobile-menu__search" />
                {entries.iter().map(|entry| view! { <MobileMenuEntry entry=entry /> }).collect_view()}
            </div>
        </Show>
    }
}

/// Hamburger button that opens and closes the mobile menu.
#[component]
pub fn MobileMenuButton() -> impl IntoView {
    let shell = use_shell();
    let is_open = move || shell.navigation.with(|nav| nav.is_menu_open());

    view! {
        <button
            class="mobile-menu__button"
            aria-expanded=move || is_open().to_string()
            on:click=move |_| shell.toggle_menu()
        >
            {move || if is_open() { icons::icon("x") } else { icons::icon("menu") }}
        </button>
    }
}

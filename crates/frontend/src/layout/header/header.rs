use contracts::site;
use leptos::prelude::*;

use super::desktop_nav::DesktopNav;
use super::mobile_menu::{MobileMenu, MobileMenuButton};
use super::search_box::SearchBox;
use crate::layout::global_context::use_shell;
use crate::shared::config::use_shell_config;
use crate::system::session::{AccountMenu, CartLink};

#[component]
pub fn Header() -> impl IntoView {
    let shell = use_shell();
    let home = use_shell_config().routes.home;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a href=home class="header__brand" on:click=move |_| shell.select_leaf()>
                    <div class="header__logo">
                        <span>{site::BRAND_INITIAL}</span>
                    </div>
                    <div>
                        <h1 class="header__title">{site::BRAND_NAME}</h1>
                        <p class="header__tagline">{site::BRAND_TAGLINE}</p>
                    </div>
                </a>

                <DesktopNav />

                <div class="header__actions">
                    <SearchBox class="header__search" />
                    <CartLink />
                    <AccountMenu />
                    <MobileMenuButton />
                </div>
            </div>

            <MobileMenu />
        </header>
    }
}

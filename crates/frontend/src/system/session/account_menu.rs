use contracts::system::auth::SessionProjection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::view::{AccountControl, SessionView};
use crate::shared::config::use_shell_config;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use crate::system::cart::use_cart;

/// Login link when signed out; identity and logout when signed in.
#[component]
pub fn AccountMenu() -> impl IntoView {
    let auth = use_auth();
    let cart = use_cart();
    let login_route = use_shell_config().routes.login;
    let navigate = use_navigate();

    let auth_state = auth.state;
    let projection: Memo<SessionProjection> =
        Memo::new(move |_| SessionView::project(&auth_state.get(), cart.len()));
    let is_open = RwSignal::new(false);

    let logout = {
        let login_route = login_route.clone();
        move |_: leptos::ev::MouseEvent| {
            let auth = auth.clone();
            let navigate = navigate.clone();
            let login_route = login_route.clone();
            is_open.set(false);
            spawn_local(async move {
                let result = auth.logout().await;
                if let Some(intent) = SessionView::logout_outcome(result, &login_route) {
                    navigate(&intent.href(), Default::default());
                }
            });
        }
    };

    move || match SessionView::account_control(&projection.get(), &login_route) {
        AccountControl::LoginLink { route } => view! {
            <a href=route class="account__login" title="Login">
                {icon("user")}
            </a>
        }
        .into_any(),
        AccountControl::SignedIn { identity } => {
            let logout = logout.clone();
            view! {
                <div
                    class="account"
                    on:mouseenter=move |_| is_open.set(true)
                    on:mouseleave=move |_| is_open.set(false)
                    on:focusin=move |_| is_open.set(true)
                    on:focusout=move |_| is_open.set(false)
                >
                    <button class="account__trigger" aria-haspopup="true" aria-expanded=move || is_open.get().to_string()>
                        {icon("user")}
                        {icon("chevron-down")}
                    </button>
                    <div class="account__panel" class:account__panel--open=move || is_open.get()>
                        <div class="account__identity">{identity}</div>
                        <button class="account__logout" on:click=logout>
                            {icon("log-out")}
                            <span>"Logout"</span>
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

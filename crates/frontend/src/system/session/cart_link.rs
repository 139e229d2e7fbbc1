use leptos::prelude::*;

use super::view::SessionView;
use crate::shared::config::use_shell_config;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use crate::system::cart::use_cart;

#[component]
pub fn CartLink() -> impl IntoView {
    let cart = use_cart();
    let auth_state = use_auth().state;
    let cart_route = use_shell_config().routes.cart;

    let badge = Memo::new(move |_| {
        let projection = SessionView::project(&auth_state.get(), cart.len());
        SessionView::cart_badge(&projection)
    });

    view! {
        <a href=cart_route class="cart-link" title="Cart">
            {icon("shopping-cart")}
            {move || badge.get().map(|count| view! { <span class="cart-link__badge">{count}</span> })}
        </a>
    }
}

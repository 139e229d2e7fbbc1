use leptos::prelude::*;

use crate::system::cart::use_cart;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

    view! {
        <section class="page cart">
            <h2>"Your cart"</h2>
            <Show
                when=move || !cart.is_empty()
                fallback=|| view! { <p class="cart__empty">"Your cart is empty."</p> }
            >
                <ul class="cart__items">
                    <For
                        each=move || cart.items.get().into_iter().enumerate()
                        key=|(index, item)| (*index, item.route.clone())
                        children=move |(_, item)| {
                            let route = item.route.clone();
                            view! {
                                <li class="cart__item">
                                    <a href=item.route.clone()>{item.label.clone()}</a>
                                    <button class="cart__remove" on:click=move |_| cart.remove(&route)>
                                        "Remove"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <button class="btn-secondary" on:click=move |_| cart.clear()>"Clear cart"</button>
            </Show>
        </section>
    }
}

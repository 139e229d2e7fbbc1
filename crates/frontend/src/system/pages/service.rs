use contracts::navigation::{find_by_route, MenuEntry};
use contracts::system::cart::CartItem;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::system::cart::use_cart;

/// Renders whatever menu entry matches the current path.
#[component]
pub fn ServicePage() -> impl IntoView {
    let pathname = use_location().pathname;

    move || match find_by_route(&pathname.get()) {
        Some(entry) => view! { <ServiceDetails entry=entry /> }.into_any(),
        None => view! {
            <section class="page page--not-found">
                <h2>"Page not found"</h2>
                <p>"The page you are looking for does not exist."</p>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn ServiceDetails(entry: &'static MenuEntry) -> impl IntoView {
    let cart = use_cart();

    view! {
        <section class="page service">
            <h2>{entry.title()}</h2>
            {entry.price_kes().map(|price| view! {
                <p class="service__price">{format!("KES {}", price)}</p>
                <button
                    class="btn-primary"
                    on:click=move |_| cart.add(CartItem {
                        route: entry.route.to_string(),
                        label: entry.label.to_string(),
                    })
                >
                    "Add to cart"
                </button>
            })}
            {entry.has_children().then(|| view! {
                <ul class="service__children">
                    {entry.children.iter().map(|child| view! {
                        <li><a href=child.route>{child.label}</a></li>
                    }).collect_view()}
                </ul>
            })}
        </section>
    }
}

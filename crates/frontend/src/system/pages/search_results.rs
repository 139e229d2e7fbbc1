use contracts::navigation::search_services;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::shared::config::use_shell_config;

#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let param = use_shell_config().routes.search_param;
    let query = use_query_map();
    let text = Memo::new(move |_| query.with(|q| q.get(&param)).unwrap_or_default());

    view! {
        <section class="page search-results">
            <h2>"Search results for \"" {move || text.get()} "\""</h2>
            {move || {
                let matches = search_services(&text.get());
                if matches.is_empty() {
                    view! { <p class="search-results__empty">"No services match your search."</p> }.into_any()
                } else {
                    view! {
                        <ul class="search-results__list">
                            {matches.into_iter().map(|entry| view! {
                                <li><a href=entry.route>{entry.label}</a></li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </section>
    }
}

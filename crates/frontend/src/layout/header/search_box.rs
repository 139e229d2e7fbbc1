use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::use_shell;
use crate::shared::icons::icon;

/// Search form bound to the shell's draft. Submission never reloads the page.
#[component]
pub fn SearchBox(#[prop(optional)] class: &'static str) -> impl IntoView {
    let shell = use_shell();
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(intent) = shell.submit_search() {
            navigate(&intent.href(), Default::default());
        }
    };

    view! {
        <form class=format!("search-box {}", class) on:submit=on_submit>
            <span class="search-box__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-box__input"
                placeholder="Search services..."
                prop:value=move || shell.search_draft.with(|draft| draft.as_str().to_string())
                on:input=move |ev| shell.set_search_text(event_target_value(&ev))
            />
        </form>
    }
}

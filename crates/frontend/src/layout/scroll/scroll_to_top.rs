use leptos::prelude::*;

use super::hooks::apply_scroll;
use crate::layout::global_context::use_shell;
use crate::shared::icons::icon;

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let shell = use_shell();

    view! {
        <Show when=move || shell.show_scroll_top.get()>
            <button
                class="scroll-to-top"
                title="Back to top"
                on:click=move |_| apply_scroll(shell.scroll_to_top_request())
            >
                {icon("chevron-up")}
            </button>
        </Show>
    }
}

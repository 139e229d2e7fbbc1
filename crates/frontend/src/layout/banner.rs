use contracts::site;
use leptos::prelude::*;

#[component]
pub fn AnnouncementBanner() -> impl IntoView {
    view! {
        <div class="banner banner--announcement">
            <div class="banner__text">{site::ANNOUNCEMENT}</div>
        </div>
    }
}

#[component]
pub fn HoursBanner() -> impl IntoView {
    view! {
        <div class="banner banner--hours">
            <p class="banner__text">{site::WORKING_HOURS}</p>
        </div>
    }
}

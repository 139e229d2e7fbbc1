use chrono::Datelike;
use contracts::site;
use leptos::prelude::*;

fn list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="footer__list">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__grid">
                <div class="footer__column">
                    <h3 class="footer__heading">{site::ABOUT_TITLE}</h3>
                    <p class="footer__text">{site::ABOUT}</p>
                    <p class="footer__meta">{site::LOCATION}</p>
                    <p class="footer__meta">{site::AVAILABILITY}</p>
                </div>
                <div class="footer__column">
                    <h3 class="footer__heading">"Services"</h3>
                    {list(site::SERVICES)}
                </div>
                <div class="footer__column">
                    <h3 class="footer__heading">"Service Areas"</h3>
                    {list(site::SERVICE_AREAS)}
                </div>
            </div>
            <div class="footer__bottom">
                <p>{site::copyright(year)}</p>
            </div>
        </footer>
    }
}

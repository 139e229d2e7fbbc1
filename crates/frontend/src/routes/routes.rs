use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::PageShell;
use crate::system::pages::{CartPage, LoginPage, SearchResultsPage, ServicePage};

/// Fixed routes are matched here; every other path is resolved against the
/// navigation tree by `ServicePage`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <PageShell>
                <Routes fallback=|| view! { <ServicePage /> }>
                    <Route path=path!("/search") view=SearchResultsPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/cart") view=CartPage />
                </Routes>
            </PageShell>
        </Router>
    }
}

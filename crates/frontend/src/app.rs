use std::sync::Arc;

use crate::routes::routes::AppRoutes;
use crate::shared::config::ShellConfig;
use crate::system::auth::{AuthContext, MemoryAuthBackend};
use crate::system::cart::CartContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ShellConfig::load());

    // Collaborators the page shell depends on, injected via context.
    provide_context(AuthContext::new(Arc::new(MemoryAuthBackend)));
    provide_context(CartContext::new());

    view! {
        <AppRoutes />
    }
}

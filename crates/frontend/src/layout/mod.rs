pub mod banner;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod scroll;

use leptos::prelude::*;

use banner::{AnnouncementBanner, HoursBanner};
use footer::Footer;
use global_context::ShellContext;
use header::Header;
use scroll::{use_route_scroll_reset, use_scroll_signal, ScrollToTopButton};

use crate::shared::config::use_shell_config;

/// Page shell shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |           AnnouncementBanner             |
/// +------------------------------------------+
/// |  Header (brand, nav, search, cart, user) |
/// |  MobileMenu (when open)                  |
/// +------------------------------------------+
/// |              HoursBanner                 |
/// +------------------------------------------+
/// |               children                   |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
///                        [ScrollToTopButton]
/// ```
///
/// Must be mounted inside the router: the scroll reset follows the current
/// route path.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let shell = ShellContext::new(&use_shell_config());
    provide_context(shell);

    use_route_scroll_reset(shell);
    use_scroll_signal(shell);

    view! {
        <div class="page-shell">
            <AnnouncementBanner />
            <Header />
            <HoursBanner />
            <main class="page-shell__main">
                {children()}
            </main>
            <Footer />
            <ScrollToTopButton />
        </div>
    }
}

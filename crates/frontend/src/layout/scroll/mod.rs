pub mod hooks;
pub mod scroll_to_top;
pub mod watcher;

pub use hooks::{use_route_scroll_reset, use_scroll_signal};
pub use scroll_to_top::ScrollToTopButton;

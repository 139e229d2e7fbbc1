pub mod intent;
pub mod menu;

pub use intent::NavigationIntent;
pub use menu::{all_entries, find_by_route, search_services, MenuEntry, NAVIGATION};

pub mod desktop_nav;
pub mod header;
pub mod menu_state;
pub mod mobile_menu;
pub mod navigation_model;
pub mod search;
pub mod search_box;

pub use header::Header;

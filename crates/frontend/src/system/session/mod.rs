pub mod account_menu;
pub mod cart_link;
pub mod view;

pub use account_menu::AccountMenu;
pub use cart_link::CartLink;
pub use view::{AccountControl, SessionView};

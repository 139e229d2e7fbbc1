pub mod context;

pub use context::{use_cart, CartContext};

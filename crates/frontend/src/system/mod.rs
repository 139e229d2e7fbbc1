pub mod auth;
pub mod cart;
pub mod pages;
pub mod session;

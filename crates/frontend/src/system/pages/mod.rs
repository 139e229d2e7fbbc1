pub mod cart;
pub mod login;
pub mod search_results;
pub mod service;

pub use cart::CartPage;
pub use login::LoginPage;
pub use search_results::SearchResultsPage;
pub use service::ServicePage;

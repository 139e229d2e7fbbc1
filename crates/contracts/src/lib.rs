pub mod navigation;
pub mod site;
pub mod system;

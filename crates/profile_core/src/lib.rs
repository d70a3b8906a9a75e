pub mod core_api;
pub mod error;
pub mod layout;
pub mod profile;

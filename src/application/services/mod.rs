//! Application services orchestrating domain operations.

pub mod click_service;
pub mod link_service;

pub use click_service::ClickService;
pub use link_service::LinkService;

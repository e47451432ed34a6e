//! HTTP request handlers.

pub mod health;
pub mod links;
pub mod login;
pub mod redirect;

pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler, list_links_handler};
pub use login::{login_handler, logout_handler};
pub use redirect::redirect_handler;

//! Shared helpers: slug generation, client IP extraction, origin detection,
//! and storage timestamp conversions.

pub mod client_ip;
pub mod origin;
pub mod slug;
pub mod timefmt;

//! Core business entities.

pub mod click;
pub mod link;

pub use click::{LinkStats, NewClick};
pub use link::{Link, LinkWithStats, NewLink};

//! UI Components
//!
//! Reusable Leptos components for the blog shell.

pub mod footer;
pub mod loading;
pub mod nav;
pub mod post_card;

pub use footer::Footer;
pub use loading::Loading;
pub use nav::{Header, NavLink, NAV_LINKS};
pub use post_card::PostCard;

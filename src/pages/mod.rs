//! Pages
//!
//! Top-level views swapped in and out of the main column.

pub mod home;
pub mod post_detail;

pub use home::Home;
pub use post_detail::PostDetail;

//! State Management
//!
//! Global view state, the theme service, and the startup post loader.

pub mod global;
pub mod loader;
pub mod theme;

pub use global::{provide_global_state, GlobalState, Post};
pub use theme::{provide_theme, ThemeService};

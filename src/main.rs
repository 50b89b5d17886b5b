//! Mind Chit
//!
//! Single-page psychology blog built with Leptos (WASM).
//!
//! # Features
//!
//! - Static hero article plus a grid of psychology posts
//! - Post detail view with back navigation
//! - Dark/light theme persisted across sessions
//! - Responsive header with a mobile menu
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The post list is read once at startup from a hosted document
//! store over HTTP; everything else is local UI state.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

//! API Client
//!
//! HTTP access to the hosted document store.

pub mod client;

pub use client::*;

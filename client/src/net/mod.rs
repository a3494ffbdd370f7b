//! Networking modules for the portfolio REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the three server endpoints behind small async helpers and
//! `types` defines the shared wire schema. Everything browser-specific is
//! behind the `hydrate` feature; SSR/native builds get inert stubs.

pub mod api;
pub mod types;

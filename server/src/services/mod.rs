//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the upstream-provider logic so route handlers can
//! stay focused on validation and response shaping.

pub mod assistant;
pub mod mail;

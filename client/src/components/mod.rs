//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod chat_widget;
pub mod code_viewer;
pub mod contact_form;
pub mod diagram_viewer;
pub mod footer;
pub mod particle_field;
pub mod screenshot_carousel;
pub mod site_nav;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `markdown` and `particles` are pure and tested natively; `browser` and
//! `diagram_input` isolate the `web_sys` calls (scrolling, textarea autosize,
//! event coordinate mapping) so component code stays mostly free of feature
//! gates.

pub mod browser;
pub mod diagram_input;
pub mod markdown;
pub mod particles;

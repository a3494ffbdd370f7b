//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat widget is the only stateful surface that outlives a single page,
//! so its state machine lives here as a plain struct behind an `RwSignal`.
//! Components mutate it through reducer-style methods and execute whatever
//! side-effect requests those methods return.

pub mod widget;

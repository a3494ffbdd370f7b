//! Interaction core for the architecture diagram viewer.
//!
//! This crate holds everything about the diagram that can be computed without
//! a browser: the graph data model, the pan/zoom camera, the mouse/touch
//! gesture state machine, and the selection/emphasis view-model. The Leptos
//! component layer is responsible only for wiring DOM events into
//! [`view::DiagramCore`] and painting the state it reads back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`graph`] | Components, connections, and tolerant edge resolution |
//! | [`camera`] | Clamped zoom and pan offset state |
//! | [`input`] | Gesture state machine and touch math |
//! | [`view`] | Top-level [`view::DiagramCore`] driven by DOM events |
//! | [`consts`] | Shared numeric constants (zoom limits, breakpoint) |

pub mod camera;
pub mod consts;
pub mod graph;
pub mod input;
pub mod view;

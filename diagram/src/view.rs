//! Top-level viewer state driven by DOM events.
//!
//! DESIGN
//! ======
//! `DiagramCore` is the single mutable object behind an interactive diagram.
//! The component layer translates raw browser events (wheel, mouse, touch,
//! clicks, resizes) into method calls here and renders whatever the core
//! reports afterwards. Nothing in this module touches the DOM, so the whole
//! interaction surface is unit-testable on the native target.
//!
//! Selection drives an emphasis model rather than a filter: with a node
//! selected, that node is `Active`, its direct neighbors stay `Normal`, and
//! everything else is `Dimmed`; edges touching the selection are
//! `Highlighted` while the rest are `Dimmed`. With no selection everything
//! is `Normal`.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::camera::{Camera, Point};
use crate::consts::MOBILE_BREAKPOINT_PX;
use crate::graph::{DiagramComponent, DiagramGraph, ResolvedEdge};
use crate::input::{Gesture, touch_distance};

/// Visual weight of a node under the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEmphasis {
    /// The selected node itself.
    Active,
    /// Full opacity (no selection, or a direct neighbor of the selection).
    Normal,
    /// Reduced opacity; unrelated to the current selection.
    Dimmed,
}

/// Visual weight of an edge under the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEmphasis {
    /// Touches the selected node.
    Highlighted,
    /// Full opacity (no selection).
    Normal,
    /// Reduced opacity; does not touch the selection.
    Dimmed,
}

/// A resolved edge paired with its current emphasis.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub edge: ResolvedEdge<'a>,
    pub emphasis: EdgeEmphasis,
}

/// Viewer state: the graph plus camera, gesture, and selection.
#[derive(Debug, Clone, Default)]
pub struct DiagramCore {
    pub graph: DiagramGraph,
    pub camera: Camera,
    pub gesture: Gesture,
    selected: Option<String>,
    viewport_width: f64,
}

impl DiagramCore {
    #[must_use]
    pub fn new(graph: DiagramGraph) -> Self {
        Self { graph, ..Self::default() }
    }

    // --- Wheel / mouse ---

    /// Wheel zoom anchored at the pointer position.
    pub fn on_wheel(&mut self, pointer: Point, delta_y: f64) {
        self.camera.zoom_at(pointer, delta_y);
    }

    /// Begin a mouse pan.
    pub fn on_pointer_down(&mut self, screen: Point) {
        self.gesture = Gesture::Dragging { last_screen: screen };
    }

    /// Continue a mouse pan; no-op outside a drag.
    pub fn on_pointer_move(&mut self, screen: Point) {
        if let Gesture::Dragging { last_screen } = self.gesture {
            self.camera.pan_by(screen.x - last_screen.x, screen.y - last_screen.y);
            self.gesture = Gesture::Dragging { last_screen: screen };
        }
    }

    /// End any mouse gesture.
    pub fn on_pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    // --- Touch ---

    /// Seed the gesture from the current touch points.
    pub fn on_touch_start(&mut self, touches: &[Point]) {
        self.gesture = seed_gesture(touches);
    }

    /// Apply a touch move: single-finger pan or two-finger pinch.
    ///
    /// If the finger count no longer matches the tracked gesture (a finger
    /// landed or lifted without a start/end event reaching us), the gesture
    /// is re-seeded from the current points and this event applies nothing.
    pub fn on_touch_move(&mut self, touches: &[Point]) {
        match (self.gesture, touches) {
            (Gesture::Dragging { last_screen }, [touch]) => {
                self.camera.pan_by(touch.x - last_screen.x, touch.y - last_screen.y);
                self.gesture = Gesture::Dragging { last_screen: *touch };
            }
            (Gesture::Pinching { last_distance }, [a, b, ..]) => {
                let distance = touch_distance(*a, *b);
                if last_distance > 0.0 {
                    self.camera.pinch_scale(distance / last_distance);
                }
                self.gesture = Gesture::Pinching { last_distance: distance };
            }
            _ => self.gesture = seed_gesture(touches),
        }
    }

    /// A finger lifted; re-seed from whatever touches remain.
    pub fn on_touch_end(&mut self, remaining: &[Point]) {
        self.gesture = seed_gesture(remaining);
    }

    // --- Selection ---

    /// Toggle selection of a node: clicking the selected node deselects it.
    pub fn on_node_click(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    /// The currently selected node id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The currently selected component, if the selection resolves.
    #[must_use]
    pub fn selected_component(&self) -> Option<&DiagramComponent> {
        self.selected.as_deref().and_then(|id| self.graph.component(id))
    }

    // --- View control ---

    /// Snap scale and offset back to defaults. Takes effect immediately and
    /// clears any in-progress gesture. Selection is untouched.
    pub fn reset_view(&mut self) {
        self.camera.reset();
        self.gesture = Gesture::Idle;
    }

    /// Record the viewport width; crossing the mobile breakpoint in either
    /// direction resets the camera. The first measurement only records.
    pub fn set_viewport_width(&mut self, width: f64) {
        let crossed = self.viewport_width > 0.0
            && (self.viewport_width < MOBILE_BREAKPOINT_PX) != (width < MOBILE_BREAKPOINT_PX);
        self.viewport_width = width;
        if crossed {
            self.camera.reset();
        }
    }

    /// Whether the last recorded viewport width is below the mobile breakpoint.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.viewport_width > 0.0 && self.viewport_width < MOBILE_BREAKPOINT_PX
    }

    // --- Render queries ---

    /// Emphasis for a node id under the current selection.
    #[must_use]
    pub fn node_emphasis(&self, id: &str) -> NodeEmphasis {
        match self.selected.as_deref() {
            None => NodeEmphasis::Normal,
            Some(sel) if sel == id => NodeEmphasis::Active,
            Some(sel) if self.graph.are_connected(sel, id) => NodeEmphasis::Normal,
            Some(_) => NodeEmphasis::Dimmed,
        }
    }

    /// Resolved edges tagged with their emphasis under the current selection.
    #[must_use]
    pub fn edges(&self) -> Vec<EdgeView<'_>> {
        let selected = self.selected.as_deref();
        self.graph
            .resolve_edges()
            .into_iter()
            .map(|edge| {
                let emphasis = match selected {
                    None => EdgeEmphasis::Normal,
                    Some(sel) if edge.connection.from == sel || edge.connection.to == sel => {
                        EdgeEmphasis::Highlighted
                    }
                    Some(_) => EdgeEmphasis::Dimmed,
                };
                EdgeView { edge, emphasis }
            })
            .collect()
    }
}

fn seed_gesture(touches: &[Point]) -> Gesture {
    match touches {
        [] => Gesture::Idle,
        [touch] => Gesture::Dragging { last_screen: *touch },
        [a, b, ..] => Gesture::Pinching { last_distance: touch_distance(*a, *b) },
    }
}

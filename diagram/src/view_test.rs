#![allow(clippy::float_cmp)]

use super::*;
use crate::graph::{Connection, EdgeStyle};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn node(id: &str) -> DiagramComponent {
    DiagramComponent {
        id: id.to_string(),
        label: id.to_string(),
        x: 50.0,
        y: 50.0,
        color: "#888".to_string(),
        description: String::new(),
    }
}

fn edge(from: &str, to: &str) -> Connection {
    Connection {
        from: from.to_string(),
        to: to.to_string(),
        label: String::new(),
        style: EdgeStyle::Solid,
        color: None,
    }
}

/// web -- api -- db, with worker attached to api and an orphan node.
fn core() -> DiagramCore {
    DiagramCore::new(DiagramGraph {
        components: vec![node("web"), node("api"), node("db"), node("worker"), node("orphan")],
        connections: vec![edge("web", "api"), edge("api", "db"), edge("api", "worker")],
    })
}

// --- wheel ---

#[test]
fn wheel_zooms_and_clamps() {
    let mut c = core();
    c.on_wheel(Point::new(0.0, 0.0), -100.0);
    assert!(approx_eq(c.camera.scale, 1.1));
    c.on_wheel(Point::new(0.0, 0.0), -100_000.0);
    assert_eq!(c.camera.scale, 2.5);
}

// --- mouse drag ---

#[test]
fn drag_pans_by_pointer_delta() {
    let mut c = core();
    c.on_pointer_down(Point::new(100.0, 100.0));
    c.on_pointer_move(Point::new(130.0, 90.0));
    assert!(approx_eq(c.camera.offset_x, 30.0));
    assert!(approx_eq(c.camera.offset_y, -10.0));
}

#[test]
fn drag_accumulates_across_moves() {
    let mut c = core();
    c.on_pointer_down(Point::new(0.0, 0.0));
    c.on_pointer_move(Point::new(10.0, 0.0));
    c.on_pointer_move(Point::new(25.0, 5.0));
    assert!(approx_eq(c.camera.offset_x, 25.0));
    assert!(approx_eq(c.camera.offset_y, 5.0));
}

#[test]
fn move_without_down_is_ignored() {
    let mut c = core();
    c.on_pointer_move(Point::new(500.0, 500.0));
    assert_eq!(c.camera.offset_x, 0.0);
    assert_eq!(c.camera.offset_y, 0.0);
}

#[test]
fn move_after_up_is_ignored() {
    let mut c = core();
    c.on_pointer_down(Point::new(0.0, 0.0));
    c.on_pointer_up();
    c.on_pointer_move(Point::new(50.0, 50.0));
    assert_eq!(c.camera.offset_x, 0.0);
}

// --- touch ---

#[test]
fn single_touch_drags() {
    let mut c = core();
    c.on_touch_start(&[Point::new(10.0, 10.0)]);
    c.on_touch_move(&[Point::new(22.0, 16.0)]);
    assert!(approx_eq(c.camera.offset_x, 12.0));
    assert!(approx_eq(c.camera.offset_y, 6.0));
}

#[test]
fn two_touches_pinch_scale_by_distance_ratio() {
    let mut c = core();
    c.on_touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    c.on_touch_move(&[Point::new(0.0, 0.0), Point::new(150.0, 0.0)]);
    assert!(approx_eq(c.camera.scale, 1.5));
}

#[test]
fn pinch_does_not_move_offset() {
    let mut c = core();
    c.camera.pan_by(40.0, -20.0);
    c.on_touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    c.on_touch_move(&[Point::new(0.0, 0.0), Point::new(200.0, 0.0)]);
    assert!(approx_eq(c.camera.offset_x, 40.0));
    assert!(approx_eq(c.camera.offset_y, -20.0));
}

#[test]
fn pinch_clamps_at_max_scale() {
    let mut c = core();
    c.on_touch_start(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    c.on_touch_move(&[Point::new(0.0, 0.0), Point::new(1000.0, 0.0)]);
    assert_eq!(c.camera.scale, 2.5);
}

#[test]
fn second_finger_switches_drag_to_pinch() {
    let mut c = core();
    c.on_touch_start(&[Point::new(0.0, 0.0)]);
    // Finger count changed without an event boundary: re-seed, apply nothing.
    c.on_touch_move(&[Point::new(0.0, 0.0), Point::new(80.0, 0.0)]);
    assert_eq!(c.camera.scale, 1.0);
    c.on_touch_move(&[Point::new(0.0, 0.0), Point::new(160.0, 0.0)]);
    assert!(approx_eq(c.camera.scale, 2.0));
}

#[test]
fn lifting_to_one_finger_resumes_drag() {
    let mut c = core();
    c.on_touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    c.on_touch_end(&[Point::new(100.0, 0.0)]);
    c.on_touch_move(&[Point::new(110.0, 4.0)]);
    assert!(approx_eq(c.camera.offset_x, 10.0));
    assert!(approx_eq(c.camera.offset_y, 4.0));
}

#[test]
fn all_fingers_up_goes_idle() {
    let mut c = core();
    c.on_touch_start(&[Point::new(0.0, 0.0)]);
    c.on_touch_end(&[]);
    assert!(matches!(c.gesture, Gesture::Idle));
}

// --- selection ---

#[test]
fn click_selects_node() {
    let mut c = core();
    c.on_node_click("api");
    assert_eq!(c.selected(), Some("api"));
}

#[test]
fn click_same_node_deselects() {
    let mut c = core();
    c.on_node_click("api");
    c.on_node_click("api");
    assert_eq!(c.selected(), None);
}

#[test]
fn click_other_node_moves_selection() {
    let mut c = core();
    c.on_node_click("api");
    c.on_node_click("db");
    assert_eq!(c.selected(), Some("db"));
}

#[test]
fn selected_component_resolves() {
    let mut c = core();
    c.on_node_click("db");
    assert_eq!(c.selected_component().map(|n| n.id.as_str()), Some("db"));
}

#[test]
fn selected_component_tolerates_unknown_id() {
    let mut c = core();
    c.on_node_click("nonexistent");
    assert_eq!(c.selected(), Some("nonexistent"));
    assert!(c.selected_component().is_none());
}

// --- emphasis ---

#[test]
fn no_selection_everything_normal() {
    let c = core();
    assert_eq!(c.node_emphasis("web"), NodeEmphasis::Normal);
    assert_eq!(c.node_emphasis("orphan"), NodeEmphasis::Normal);
    assert!(c.edges().iter().all(|e| e.emphasis == EdgeEmphasis::Normal));
}

#[test]
fn selected_node_is_active() {
    let mut c = core();
    c.on_node_click("api");
    assert_eq!(c.node_emphasis("api"), NodeEmphasis::Active);
}

#[test]
fn neighbors_of_selection_stay_normal() {
    let mut c = core();
    c.on_node_click("api");
    assert_eq!(c.node_emphasis("web"), NodeEmphasis::Normal);
    assert_eq!(c.node_emphasis("db"), NodeEmphasis::Normal);
    assert_eq!(c.node_emphasis("worker"), NodeEmphasis::Normal);
}

#[test]
fn unrelated_nodes_are_dimmed() {
    let mut c = core();
    c.on_node_click("web");
    assert_eq!(c.node_emphasis("db"), NodeEmphasis::Dimmed);
    assert_eq!(c.node_emphasis("orphan"), NodeEmphasis::Dimmed);
}

#[test]
fn edges_touching_selection_highlighted_rest_dimmed() {
    let mut c = core();
    c.on_node_click("api");
    for view in c.edges() {
        assert_eq!(view.emphasis, EdgeEmphasis::Highlighted);
    }
    c.on_node_click("api");
    c.on_node_click("web");
    let views = c.edges();
    assert_eq!(views[0].emphasis, EdgeEmphasis::Highlighted);
    assert_eq!(views[1].emphasis, EdgeEmphasis::Dimmed);
    assert_eq!(views[2].emphasis, EdgeEmphasis::Dimmed);
}

// --- dangling connections ---

#[test]
fn dangling_connection_renders_nothing_and_never_panics() {
    let mut c = core();
    c.graph.connections.push(edge("api", "missing"));
    c.on_node_click("api");
    assert_eq!(c.edges().len(), 3);
}

// --- reset / breakpoint ---

#[test]
fn reset_view_restores_camera_and_clears_gesture() {
    let mut c = core();
    c.on_wheel(Point::new(30.0, 30.0), -400.0);
    c.on_pointer_down(Point::new(0.0, 0.0));
    c.reset_view();
    assert_eq!(c.camera.scale, 1.0);
    assert_eq!(c.camera.offset_x, 0.0);
    assert!(matches!(c.gesture, Gesture::Idle));
}

#[test]
fn reset_view_keeps_selection() {
    let mut c = core();
    c.on_node_click("db");
    c.reset_view();
    assert_eq!(c.selected(), Some("db"));
}

#[test]
fn first_viewport_measurement_only_records() {
    let mut c = core();
    c.on_wheel(Point::new(0.0, 0.0), -100.0);
    c.set_viewport_width(1280.0);
    assert!(approx_eq(c.camera.scale, 1.1));
    assert!(!c.is_mobile());
}

#[test]
fn crossing_breakpoint_resets_camera() {
    let mut c = core();
    c.set_viewport_width(1280.0);
    c.on_wheel(Point::new(50.0, 50.0), -300.0);
    c.set_viewport_width(390.0);
    assert_eq!(c.camera.scale, 1.0);
    assert_eq!(c.camera.offset_x, 0.0);
    assert!(c.is_mobile());
}

#[test]
fn resize_on_same_side_keeps_camera() {
    let mut c = core();
    c.set_viewport_width(1280.0);
    c.on_wheel(Point::new(0.0, 0.0), -100.0);
    c.set_viewport_width(1024.0);
    assert!(approx_eq(c.camera.scale, 1.1));
}

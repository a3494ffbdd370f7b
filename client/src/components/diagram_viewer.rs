//! Interactive architecture diagram viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a project's [`DiagramGraph`] as absolutely-positioned nodes over
//! an SVG edge layer, both inside a stage transformed by the camera in
//! [`DiagramCore`]. Every interaction (wheel, drag, pinch, node clicks,
//! viewport resizes) is forwarded to the core; this component only maps
//! browser events to core calls and renders the state it reports.

#[cfg(test)]
#[path = "diagram_viewer_test.rs"]
mod diagram_viewer_test;

use diagram::camera::Camera;
use diagram::graph::{DiagramGraph, EdgeStyle};
use diagram::view::{DiagramCore, EdgeEmphasis, NodeEmphasis};
use leptos::prelude::*;

/// Interval between viewport width samples; a changed width is applied once
/// it holds across two consecutive samples, coalescing resize bursts.
#[cfg(feature = "hydrate")]
const RESIZE_POLL_MS: u64 = 250;

/// Edge stroke used when a connection has no color of its own.
const DEFAULT_EDGE_COLOR: &str = "#94a3b8";

/// CSS transform for the stage under the given camera.
fn stage_transform(camera: &Camera) -> String {
    format!("translate({}px, {}px) scale({})", camera.offset_x, camera.offset_y, camera.scale)
}

/// Human-readable zoom readout, e.g. `125%`.
fn scale_label(scale: f64) -> String {
    format!("{:.0}%", scale * 100.0)
}

fn node_class(emphasis: NodeEmphasis) -> &'static str {
    match emphasis {
        NodeEmphasis::Active => "diagram-viewer__node diagram-viewer__node--active",
        NodeEmphasis::Normal => "diagram-viewer__node",
        NodeEmphasis::Dimmed => "diagram-viewer__node diagram-viewer__node--dimmed",
    }
}

fn edge_class(emphasis: EdgeEmphasis) -> &'static str {
    match emphasis {
        EdgeEmphasis::Highlighted => "diagram-viewer__edge diagram-viewer__edge--highlighted",
        EdgeEmphasis::Normal => "diagram-viewer__edge",
        EdgeEmphasis::Dimmed => "diagram-viewer__edge diagram-viewer__edge--dimmed",
    }
}

fn label_class(emphasis: EdgeEmphasis) -> &'static str {
    match emphasis {
        EdgeEmphasis::Highlighted => {
            "diagram-viewer__edge-label diagram-viewer__edge-label--highlighted"
        }
        EdgeEmphasis::Normal => "diagram-viewer__edge-label",
        EdgeEmphasis::Dimmed => "diagram-viewer__edge-label diagram-viewer__edge-label--dimmed",
    }
}

fn edge_dash(style: EdgeStyle) -> Option<&'static str> {
    match style {
        EdgeStyle::Solid => None,
        EdgeStyle::Dashed => Some("6 4"),
    }
}

/// Pan/zoom/select viewer over a static architecture graph.
#[component]
pub fn DiagramViewer(graph: DiagramGraph) -> impl IntoView {
    let core = RwSignal::new(DiagramCore::new(graph));
    let viewer_ref = NodeRef::<leptos::html::Div>::new();

    // Width sampling loop: seeds the core's viewport width immediately, then
    // applies later changes only after the width stops moving for a full
    // sample interval. Crossing the mobile breakpoint resets the camera.
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let mut applied = crate::util::diagram_input::window_inner_width().unwrap_or(0.0);
            if applied > 0.0 {
                core.update(|c| c.set_viewport_width(applied));
            }
            let mut last_sample = applied;
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(RESIZE_POLL_MS))
                    .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let Some(width) = crate::util::diagram_input::window_inner_width() else {
                    continue;
                };
                let settled = (width - last_sample).abs() < 0.5;
                last_sample = width;
                if settled && (width - applied).abs() >= 0.5 {
                    applied = width;
                    core.update(|c| c.set_viewport_width(width));
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let Some(viewer) = viewer_ref.get() else {
                    return;
                };
                let point = crate::util::diagram_input::wheel_point(&ev, &viewer);
                core.update(|c| c.on_wheel(point, ev.delta_y()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_mouse_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                if ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                let Some(viewer) = viewer_ref.get() else {
                    return;
                };
                let point = crate::util::diagram_input::mouse_point(&ev, &viewer);
                core.update(|c| c.on_pointer_down(point));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                // Outside a drag this would be a no-op; skip the signal write
                // so hover movement does not re-render the stage.
                let dragging = core
                    .with_untracked(|c| matches!(c.gesture, diagram::input::Gesture::Dragging { .. }));
                if !dragging {
                    return;
                }
                let Some(viewer) = viewer_ref.get() else {
                    return;
                };
                let point = crate::util::diagram_input::mouse_point(&ev, &viewer);
                core.update(|c| c.on_pointer_move(point));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_up = move |_ev: leptos::ev::MouseEvent| {
        core.update(DiagramCore::on_pointer_up);
    };

    let on_touch_start = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::TouchEvent| {
                let Some(viewer) = viewer_ref.get() else {
                    return;
                };
                let points = crate::util::diagram_input::touch_points(&ev, &viewer);
                core.update(|c| c.on_touch_start(&points));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::TouchEvent| {
                // The viewer owns touch gestures; keep the page from
                // scrolling underneath a pan or pinch.
                ev.prevent_default();
                let Some(viewer) = viewer_ref.get() else {
                    return;
                };
                let points = crate::util::diagram_input::touch_points(&ev, &viewer);
                core.update(|c| c.on_touch_move(&points));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::TouchEvent| {
                let Some(viewer) = viewer_ref.get() else {
                    return;
                };
                let points = crate::util::diagram_input::touch_points(&ev, &viewer);
                core.update(|c| c.on_touch_end(&points));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_reset = move |_| core.update(DiagramCore::reset_view);

    view! {
        <div class="diagram-viewer">
            <div
                class="diagram-viewer__viewport"
                node_ref=viewer_ref
                on:wheel=on_wheel
                on:mousedown=on_mouse_down
                on:mousemove=on_mouse_move
                on:mouseup=on_mouse_up
                on:mouseleave=on_mouse_up
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
            >
                <div
                    class="diagram-viewer__stage"
                    style:transform=move || core.with(|c| stage_transform(&c.camera))
                >
                    <svg class="diagram-viewer__edges">
                        {move || {
                            let state = core.get();
                            state
                                .edges()
                                .into_iter()
                                .map(|edge_view| {
                                    let from = edge_view.edge.from;
                                    let to = edge_view.edge.to;
                                    let stroke = edge_view
                                        .edge
                                        .connection
                                        .color
                                        .clone()
                                        .unwrap_or_else(|| DEFAULT_EDGE_COLOR.to_owned());
                                    view! {
                                        <line
                                            class=edge_class(edge_view.emphasis)
                                            x1=format!("{}%", from.x)
                                            y1=format!("{}%", from.y)
                                            x2=format!("{}%", to.x)
                                            y2=format!("{}%", to.y)
                                            stroke=stroke
                                            stroke-dasharray=edge_dash(edge_view.edge.connection.style)
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </svg>

                    {move || {
                        let state = core.get();
                        state
                            .edges()
                            .into_iter()
                            .filter(|edge_view| !edge_view.edge.connection.label.is_empty())
                            .map(|edge_view| {
                                let x = f64::midpoint(edge_view.edge.from.x, edge_view.edge.to.x);
                                let y = f64::midpoint(edge_view.edge.from.y, edge_view.edge.to.y);
                                let label = edge_view.edge.connection.label.clone();
                                view! {
                                    <span
                                        class=label_class(edge_view.emphasis)
                                        style=format!("left: {x}%; top: {y}%;")
                                    >
                                        {label}
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}

                    {move || {
                        let state = core.get();
                        state
                            .graph
                            .components
                            .iter()
                            .map(|comp| {
                                let emphasis = state.node_emphasis(&comp.id);
                                let label = comp.label.clone();
                                let style = format!(
                                    "left: {}%; top: {}%; --node-color: {};",
                                    comp.x, comp.y, comp.color
                                );
                                let click_id = comp.id.clone();
                                view! {
                                    <button
                                        class=node_class(emphasis)
                                        style=style
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.stop_propagation();
                                            core.update(|c| c.on_node_click(&click_id));
                                        }
                                    >
                                        <span class="diagram-viewer__node-label">{label}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>

            {move || {
                let state = core.get();
                state
                    .selected_component()
                    .map(|comp| {
                        let label = comp.label.clone();
                        let description = comp.description.clone();
                        view! {
                            <div class="diagram-viewer__detail">
                                <strong>{label}</strong>
                                <p>{description}</p>
                            </div>
                        }
                    })
            }}

            <div class="diagram-viewer__toolbar">
                <span class="diagram-viewer__hint">
                    {move || {
                        if core.get().is_mobile() {
                            "Drag to pan, pinch to zoom, tap a node for details"
                        } else {
                            "Scroll to zoom, drag to pan, click a node for details"
                        }
                    }}
                </span>
                <span class="diagram-viewer__scale">
                    {move || core.with(|c| scale_label(c.camera.scale))}
                </span>
                <button class="btn diagram-viewer__reset" on:click=on_reset>
                    "Reset view"
                </button>
            </div>
        </div>
    }
}

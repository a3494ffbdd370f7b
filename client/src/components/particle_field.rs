//! Decorative particle canvas behind the hero section.
//!
//! The motion rules live in [`crate::util::particles`]; this component owns
//! the canvas element, the frame loop, and pointer/resize plumbing. The loop
//! re-measures the canvas every frame, so resizes are picked up at frame
//! cadence and reseed the field once the new size lands.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::particles::{Particle, particle_count};

/// Frame interval; a background field does not need more than ~30fps.
#[cfg(feature = "hydrate")]
const FRAME_MS: u64 = 33;

/// Dot fill; keep in sync with the hero palette in `style.css`.
#[cfg(feature = "hydrate")]
const DOT_STYLE: &str = "rgba(148, 163, 184, 0.55)";

/// Animated dot field rendered behind the hero copy.
#[component]
pub fn ParticleField() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let pointer = RwSignal::new(None::<(f64, f64)>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let mut particles: Vec<Particle> = Vec::new();
            let mut width = 0.0_f64;
            let mut height = 0.0_f64;
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(FRAME_MS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let Some(canvas) = canvas_ref.get_untracked() else {
                    continue;
                };
                let cw = f64::from(canvas.client_width());
                let ch = f64::from(canvas.client_height());
                if cw <= 0.0 || ch <= 0.0 {
                    continue;
                }
                if (cw - width).abs() >= 1.0 || (ch - height).abs() >= 1.0 {
                    width = cw;
                    height = ch;
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                    particles = seed_particles(width, height);
                }
                let Some(ctx) = context_2d(&canvas) else {
                    continue;
                };
                let cursor = pointer.get_untracked();
                ctx.clear_rect(0.0, 0.0, width, height);
                ctx.set_fill_style_str(DOT_STYLE);
                for p in &mut particles {
                    p.step(width, height, cursor);
                    ctx.begin_path();
                    let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
                    ctx.fill();
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_mouse_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                pointer.set(Some((
                    f64::from(ev.client_x()) - rect.x(),
                    f64::from(ev.client_y()) - rect.y(),
                )));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };
    let on_mouse_leave = move |_ev: leptos::ev::MouseEvent| pointer.set(None);

    view! {
        <div class="particle-field" on:mousemove=on_mouse_move on:mouseleave=on_mouse_leave>
            <canvas class="particle-field__canvas" node_ref=canvas_ref></canvas>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn seed_particles(width: f64, height: f64) -> Vec<Particle> {
    (0..particle_count(width, height))
        .map(|_| Particle {
            x: js_sys::Math::random() * width,
            y: js_sys::Math::random() * height,
            vx: (js_sys::Math::random() - 0.5) * 0.4,
            vy: (js_sys::Math::random() - 0.5) * 0.4,
            radius: 1.0 + js_sys::Math::random() * 1.8,
        })
        .collect()
}

#[cfg(feature = "hydrate")]
fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Option<web_sys::CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;

    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
}

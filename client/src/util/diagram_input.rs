//! Diagram input mapping and pointer helper utilities.
//!
//! These are all `#[cfg(feature = "hydrate")]` because they depend on
//! `web_sys` types that only exist in the browser build.

#[cfg(feature = "hydrate")]
use diagram::camera::Point;

/// Mouse position relative to the viewer element's top-left corner.
#[cfg(feature = "hydrate")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent, element: &web_sys::HtmlDivElement) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(f64::from(ev.client_x()) - rect.x(), f64::from(ev.client_y()) - rect.y())
}

/// Wheel position relative to the viewer element's top-left corner. The zoom
/// anchor math needs viewer-local coordinates, and `offset_x`/`offset_y`
/// would be relative to whichever child node the event hit instead.
#[cfg(feature = "hydrate")]
pub fn wheel_point(ev: &leptos::ev::WheelEvent, element: &web_sys::HtmlDivElement) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(f64::from(ev.client_x()) - rect.x(), f64::from(ev.client_y()) - rect.y())
}

/// All active touch positions relative to the viewer element. During a
/// `touchend` the lifted finger is already absent, so the same helper serves
/// start, move, and end.
#[cfg(feature = "hydrate")]
pub fn touch_points(ev: &leptos::ev::TouchEvent, element: &web_sys::HtmlDivElement) -> Vec<Point> {
    let rect = element.get_bounding_client_rect();
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| {
            Point::new(f64::from(t.client_x()) - rect.x(), f64::from(t.client_y()) - rect.y())
        })
        .collect()
}

/// Current window inner width in CSS pixels.
#[cfg(feature = "hydrate")]
pub fn window_inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

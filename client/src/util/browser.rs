//! Browser-side DOM helpers shared by the widget and page chrome.
//!
//! These are all `#[cfg(feature = "hydrate")]` because they depend on
//! `web_sys` and are meaningless during SSR.

/// DOM id of the contact section on the home page.
pub const CONTACT_SECTION_ID: &str = "contact";

/// Smooth-scroll the contact section into view. When the section is not on
/// the current page (e.g. a project detail page), fall back to a full
/// navigation to the home page anchor.
#[cfg(feature = "hydrate")]
pub fn scroll_to_contact() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(el) = document.get_element_by_id(CONTACT_SECTION_ID) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        let _ = window.location().set_href("/#contact");
    }
}

/// Grow a textarea to fit its content. Called synchronously on every input
/// event; height is unbounded so the box never shows an inner scrollbar.
#[cfg(feature = "hydrate")]
pub fn autosize_textarea(el: &web_sys::HtmlTextAreaElement) {
    let style = el.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", el.scroll_height()));
}

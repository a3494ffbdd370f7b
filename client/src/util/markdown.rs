//! Markdown rendering for assistant replies.
//!
//! DESIGN
//! ======
//! Replies come from a language model, so raw HTML events are dropped
//! before rendering. Links get special treatment: an href pointing at the
//! contact section becomes an action `<button>` the widget intercepts by
//! click delegation, and absolute http(s) links open in a new tab. All
//! other links (mailto, relative paths) render untouched.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Opening tag emitted in place of a contact-section link.
const CONTACT_BUTTON_OPEN: &str =
    r#"<button type="button" class="chat-contact-link" data-action="contact">"#;

/// Render assistant markdown to sanitized HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let stripped = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, rewrite_links(stripped).into_iter());
    out
}

/// Whether an href targets the contact section of the home page.
#[must_use]
pub fn is_contact_href(href: &str) -> bool {
    href == "#contact" || href == "/#contact"
}

fn is_external_href(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

enum LinkKind {
    Contact,
    External,
}

/// Swap contact links for action buttons and add new-tab attributes to
/// external links. Events we synthesize are `Event::Html`, which is safe
/// because the raw-HTML strip happens before this pass.
fn rewrite_links<'a, I>(events: I) -> Vec<Event<'a>>
where
    I: Iterator<Item = Event<'a>>,
{
    let mut out = Vec::new();
    let mut open: Option<LinkKind> = None;

    for event in events {
        match event {
            Event::Start(Tag::Link { dest_url, .. }) if is_contact_href(&dest_url) => {
                open = Some(LinkKind::Contact);
                out.push(Event::Html(CONTACT_BUTTON_OPEN.into()));
            }
            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                if is_external_href(&dest_url) {
                    open = Some(LinkKind::External);
                    let href = escape_attr(&dest_url);
                    out.push(Event::Html(
                        format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">"#)
                            .into(),
                    ));
                } else {
                    open = None;
                    out.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                }
            }
            Event::End(TagEnd::Link) => match open.take() {
                Some(LinkKind::Contact) => out.push(Event::Html("</button>".into())),
                Some(LinkKind::External) => out.push(Event::Html("</a>".into())),
                None => out.push(Event::End(TagEnd::Link)),
            },
            other => out.push(other),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

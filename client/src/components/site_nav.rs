//! Site navigation bar shown on every page.

use leptos::prelude::*;

use crate::data::profile;

/// Anchor links into the home page sections. From a project detail page
/// these trigger a full navigation back home.
const NAV_LINKS: [(&str, &str); 4] = [
    ("/#projects", "Projects"),
    ("/#skills", "Skills"),
    ("/#about", "About"),
    ("/#contact", "Contact"),
];

/// Fixed top navigation with a collapsible menu on small screens.
#[component]
pub fn SiteNav() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="site-nav">
            <a href="/" class="site-nav__brand">
                {profile::NAME}
            </a>

            <button
                class="site-nav__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <div class="site-nav__links" class:site-nav__links--open=move || menu_open.get()>
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                href=href
                                class="site-nav__link"
                                on:click=move |_| menu_open.set(false)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a
                    href=profile::GITHUB_URL
                    class="site-nav__link site-nav__link--external"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "GitHub"
                </a>
            </div>
        </nav>
    }
}

//! Site footer with contact and profile links.

use leptos::prelude::*;

use crate::data::profile;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__links">
                <a href=profile::GITHUB_URL target="_blank" rel="noopener noreferrer">
                    "GitHub"
                </a>
                <a href=profile::LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                    "LinkedIn"
                </a>
                <a href=format!("mailto:{}", profile::EMAIL)>{profile::EMAIL}</a>
            </div>
            <p class="site-footer__note">
                {format!("© 2026 {}. Built with Rust and Leptos.", profile::NAME)}
            </p>
        </footer>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat_widget::ChatWidget;
use crate::components::footer::SiteFooter;
use crate::components::site_nav::SiteNav;
use crate::data::profile;
use crate::pages::{home::HomePage, project::ProjectPage};
use crate::state::widget::WidgetCore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the chat widget state context and sets up client-side routing.
/// The widget itself mounts outside the route outlet so the conversation
/// survives page navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let widget = RwSignal::new(WidgetCore::default());
    provide_context(widget);

    view! {
        <Stylesheet id="leptos" href="/public/style.css"/>
        <Title text=format!("{} | {}", profile::NAME, profile::ROLE)/>

        <Router>
            <SiteNav/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectPage/>
                </Routes>
            </main>
            <SiteFooter/>
            <ChatWidget/>
        </Router>
    }
}

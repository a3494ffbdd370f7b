//! Project detail page: carousel, architecture diagram, and code snippets.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::code_viewer::CodeViewer;
use crate::components::diagram_viewer::DiagramViewer;
use crate::components::screenshot_carousel::ScreenshotCarousel;
use crate::data::{profile, projects};

/// Case-study page for a single project, looked up by its URL slug.
#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug");

    view! {
        {move || {
            let Some(project) = slug().and_then(|s| projects::by_slug(&s)) else {
                return view! {
                    <section class="section project-missing">
                        <h1>"Project not found"</h1>
                        <p>"That case study does not exist (or moved)."</p>
                        <a href="/#projects" class="btn btn--primary">
                            "Back to projects"
                        </a>
                    </section>
                }
                    .into_any();
            };

            let title = project.title.clone();
            view! {
                <Title text=format!("{} | {}", project.title, profile::NAME) />

                <article class="project">
                    <header class="project__header">
                        <a href="/#projects" class="project__back">
                            "← All projects"
                        </a>
                        <h1 class="project__title">{title}</h1>
                        <p class="project__tagline">{project.tagline.clone()}</p>
                        <ul class="project__tech">
                            {project
                                .tech
                                .iter()
                                .map(|t| view! { <li class="chip">{t.clone()}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                        {project
                            .repo_url
                            .clone()
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        class="btn project__repo"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "Source on GitHub"
                                    </a>
                                }
                            })}
                    </header>

                    <section class="project__section">
                        <p class="project__summary">{project.summary.clone()}</p>
                    </section>

                    <section class="project__section">
                        <h2>"Screenshots"</h2>
                        <ScreenshotCarousel screenshots=project.screenshots.clone() />
                    </section>

                    <section class="project__section">
                        <h2>"Architecture"</h2>
                        <DiagramViewer graph=project.graph.clone() />
                    </section>

                    <section class="project__section">
                        <h2>"Code highlights"</h2>
                        <CodeViewer snippets=project.snippets.clone() />
                    </section>
                </article>
            }
                .into_any()
        }}
    }
}

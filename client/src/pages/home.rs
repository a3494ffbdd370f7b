//! Home page: hero, projects, skills, about, and contact sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is static content from `data`; the only stateful pieces
//! are the particle background and the contact form, both delegated to
//! components. Section ids double as the navigation anchor targets.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::particle_field::ParticleField;
use crate::data::{profile, projects};
use crate::net::api;

/// The landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <ParticleField />
            <div class="hero__content">
                <p class="hero__eyebrow">"Hi, I'm"</p>
                <h1 class="hero__name">{profile::NAME}</h1>
                <h2 class="hero__role">{profile::ROLE}</h2>
                <p class="hero__tagline">{profile::HERO_TAGLINE}</p>
                <div class="hero__actions">
                    <a href="/#projects" class="btn btn--primary">
                        "View projects"
                    </a>
                    <a href=api::RESUME_ENDPOINT class="btn" download="">
                        "Download resume"
                    </a>
                </div>
                <div class="hero__social">
                    <a href=profile::GITHUB_URL target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                    <a href=profile::LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </section>

        <section id="projects" class="section section--projects">
            <h2 class="section__title">"Projects"</h2>
            <div class="project-grid">
                {projects::all()
                    .into_iter()
                    .map(|project| {
                        let href = format!("/projects/{}", project.slug);
                        view! {
                            <a href=href class="project-card">
                                <h3 class="project-card__title">{project.title}</h3>
                                <p class="project-card__tagline">{project.tagline}</p>
                                <ul class="project-card__tech">
                                    {project
                                        .tech
                                        .iter()
                                        .map(|t| view! { <li class="chip">{t.clone()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <span class="project-card__more">"View case study →"</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section id="skills" class="section section--skills">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills-grid">
                {profile::SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="skills-group">
                                <h3 class="skills-group__title">{group.title}</h3>
                                <ul class="skills-group__list">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|s| view! { <li class="chip">{*s}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section id="about" class="section section--about">
            <h2 class="section__title">"About"</h2>
            <div class="about__body">
                {profile::ABOUT_PARAGRAPHS
                    .iter()
                    .map(|p| view! { <p>{*p}</p> })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section id="contact" class="section section--contact">
            <h2 class="section__title">"Get in touch"</h2>
            <p class="section__lead">
                "Have a project in mind, a role to fill, or just want to say hello? \
                 Drop a message below or email me directly."
            </p>
            <div class="contact__columns">
                <ContactForm />
                <div class="contact__direct">
                    <h3>"Elsewhere"</h3>
                    <a href=format!("mailto:{}", profile::EMAIL)>{profile::EMAIL}</a>
                    <a href=profile::GITHUB_URL target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                    <a href=profile::LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </section>
    }
}

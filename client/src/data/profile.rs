//! Owner profile content rendered across the site.

/// Display name used in the hero, nav, and page title.
pub const NAME: &str = "Tanvir Hasan";

/// Role line under the name.
pub const ROLE: &str = "Full-Stack Developer";

/// Direct contact email, shown in the contact section and used by the
/// chat widget's fallback messages.
pub const EMAIL: &str = "hello@tanvirhasan.dev";

pub const GITHUB_URL: &str = "https://github.com/tanvirhasan-dev";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/tanvirhasan-dev";

/// One-line pitch in the hero section.
pub const HERO_TAGLINE: &str =
    "I build fast, reliable web applications end to end: typed frontends, \
     pragmatic APIs, and infrastructure that stays out of the way.";

/// About-section paragraphs, rendered in order.
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I spent the first years of my career as a civil engineer, checking load \
     paths and signing drawings where mistakes are measured in tons. Software \
     started as a way to automate the boring parts of that job and quickly \
     became the job I actually wanted.",
    "The engineering habits transferred: model the problem before building, \
     respect the failure modes, and never ship anything you can't inspect. \
     These days I apply them to web systems instead of steel, across the \
     stack from database schemas to pixel-level UI states.",
    "I care most about the unglamorous middle of a product: the API shapes, \
     the error paths, the loading states. Get those right and everything on \
     top of them feels solid.",
];

/// A titled group of related skills for the skills grid.
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// Skills grid content.
pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        skills: &["TypeScript", "React", "Leptos", "Tailwind CSS", "WebAssembly"],
    },
    SkillGroup {
        title: "Backend",
        skills: &["Rust", "Axum", "Node.js", "PostgreSQL", "Redis"],
    },
    SkillGroup {
        title: "Tooling & Ops",
        skills: &["Docker", "GitHub Actions", "Nginx", "Grafana", "Fly.io"],
    },
];

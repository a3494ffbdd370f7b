//! Static site content: owner profile and project entries.
//!
//! DESIGN
//! ======
//! Content lives in code rather than a CMS; the site redeploys on every
//! content change anyway. `projects` carries everything a detail page
//! renders, including the architecture graph handed to the diagram viewer.

pub mod profile;
pub mod projects;

//! Page sections, each bound to its navigation anchor

mod about;
mod experience;
mod projects;
mod skills;

pub use about::About;
pub use experience::Experience;
pub use projects::Projects;
pub use skills::Skills;

//! Fixed portfolio content. Everything here is static data; nothing in this
//! module talks to storage or the network.

pub mod experience;
pub mod philosophy;
pub mod profile;
pub mod projects;
pub mod skills;

pub use experience::{Experience, EXPERIENCES};
pub use philosophy::{Principle, PRINCIPLES};
pub use projects::{Project, PROJECTS};
pub use skills::SKILLS;

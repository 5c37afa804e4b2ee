mod profile;
mod sections;
mod skills;

pub use profile::*;
pub use sections::{NAV_LINKS, SectionId, has_nav_link};
pub use skills::{SKILL_CATEGORIES, SkillCategory};

//! Skill catalog: the flattened skill name → detection pattern dictionary and
//! its compiled form.

pub mod compiler;
pub mod loader;

pub use compiler::{InvalidPattern, SkillMatcher};
pub use loader::{load_catalog, SkillCatalog};

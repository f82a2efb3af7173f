mod errors;
mod model;
mod storage;

pub(crate) use model::{Degree, Profile, Project, Role, SkillGroup};
pub(crate) use storage::load_initial_profile;

pub(crate) mod about;
pub(crate) mod education;
pub(crate) mod experience;
pub(crate) mod projects;
pub(crate) mod skills;

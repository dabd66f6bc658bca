pub(crate) mod billing;
pub(crate) mod dashboard;
pub(crate) mod landing;
pub(crate) mod main_app;
pub(crate) mod not_found;
pub(crate) mod profile;
pub(crate) mod reports;

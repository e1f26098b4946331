pub(crate) mod anchors;
pub(crate) mod neighbors;
pub(crate) mod route;
pub(crate) mod signal;
pub(crate) mod transition;

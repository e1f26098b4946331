pub(crate) mod cache;
pub(crate) mod document;
pub(crate) mod model;
pub(crate) mod notion;
pub(crate) mod source;
pub(crate) mod store;
pub(crate) mod thumbnail;

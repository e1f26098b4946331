pub(crate) mod detail;
pub(crate) mod index;
pub(crate) mod statement;

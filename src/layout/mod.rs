pub(crate) mod frozen;
pub(crate) mod generator;
pub(crate) mod month;

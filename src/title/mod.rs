pub(crate) mod animator;
pub(crate) mod idle;

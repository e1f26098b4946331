pub(crate) mod ease;
pub(crate) mod frame_loop;
pub(crate) mod tween;

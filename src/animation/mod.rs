pub(crate) mod ease;
pub(crate) mod looping;
pub(crate) mod ops;
pub(crate) mod pose;
pub(crate) mod reveal;
pub(crate) mod tween;

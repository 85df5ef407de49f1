pub(crate) mod margin;
pub(crate) mod observer;
pub(crate) mod parallax;

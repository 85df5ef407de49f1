pub(crate) mod composer;
pub mod content;
pub(crate) mod dsl;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod zara;

pub(crate) mod engine;
pub(crate) mod scenario;
pub(crate) mod snapshot;

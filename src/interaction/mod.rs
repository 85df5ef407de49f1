pub(crate) mod navbar;

pub mod current;
pub mod env;
pub mod rollback;
pub mod use_version;

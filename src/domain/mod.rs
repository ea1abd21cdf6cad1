//! Domain aggregates exposed by the blog service layer.

pub mod blog;
pub mod types;

//! Database and configuration models.

pub mod blog;
pub mod config;

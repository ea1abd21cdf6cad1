//! Data transfer objects exchanged between routes and services.

pub mod api;

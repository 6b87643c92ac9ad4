//! API data transfer objects.
//!
//! Wire-format types for request and response bodies. DTOs use camelCase
//! field names on the wire and are converted to and from domain parameter
//! models at the controller boundary; entity models never appear here.

pub mod admin;
pub mod api;
pub mod auth;
pub mod game;

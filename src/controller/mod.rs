//! HTTP request handlers.
//!
//! Controllers validate access, convert DTOs to domain params, call the
//! service layer, and convert the result back to a DTO response.

pub mod admin;
pub mod auth;
pub mod game;
pub mod seed;

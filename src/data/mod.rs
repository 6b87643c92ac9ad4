//! Database repository layer for the catalog.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! each domain in the application. Repositories use SeaORM entity models internally;
//! conversion to parameter models happens in the service layer so entity types stay
//! behind this boundary.

pub mod cleanup_backup;
pub mod game;

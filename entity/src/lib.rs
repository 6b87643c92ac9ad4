//! SeaORM entity models for the gamedex catalog.

pub mod cleanup_backup;
pub mod game;
pub mod prelude;

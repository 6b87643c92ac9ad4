pub use super::cleanup_backup::Entity as CleanupBackup;
pub use super::game::Entity as Game;

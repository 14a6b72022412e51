//! Repository Layer
//!
//! Persistence over a synchronous key-value store, plus the startup migration.

mod traits;
mod memory;
mod item_store;
pub mod migration;


pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use item_store::ItemStore;
pub use migration::{migrate_items, run_startup_migration, MigrationReport};

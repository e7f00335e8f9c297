// Stores layer - data access over the shared database connection
pub mod item_store;
pub mod recovered_item_store;

pub use item_store::{ItemStore, UpsertOutcome};
pub use recovered_item_store::RecoveredItemStore;

pub mod db;
pub mod state;

pub use db::{KeyValueStore, MemoryStore, SqliteStore};

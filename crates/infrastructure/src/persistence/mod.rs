//! Key store implementations of the `KeyRepository` port.

mod file_key_repository;
mod memory_key_repository;

pub use file_key_repository::{FileKeyRepository, KEYS_SCHEMA_VERSION};
pub use memory_key_repository::InMemoryKeyRepository;

//! Ports to external collaborators, plus the in-memory implementations
//! shipped for them.

pub mod archive;
pub mod archive_mem;
pub mod catalog;
pub mod catalog_mem;

pub use archive::{CommittedGame, GameArchive};
pub use archive_mem::InMemoryArchive;
pub use catalog::CardCatalog;
pub use catalog_mem::InMemoryCatalog;

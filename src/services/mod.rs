// Service exports
pub mod directory;
pub mod seed;
pub mod store;

pub use directory::DirectoryService;
pub use seed::demo_profiles;
pub use store::{InMemoryProfileStore, ProfileStore, Snapshot, StoreError};

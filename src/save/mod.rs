//! Save format, blob storage and the manager tying them together.

pub mod codec;
pub mod error;
pub mod manager;
pub mod store;

pub use codec::{deserialize, serialize, LoadedGame, SaveRecord};
pub use error::{SaveError, StoreError};
pub use manager::SaveManager;
pub use store::{BlobStore, FileBlobStore, MemoryBlobStore};

pub mod client;
pub mod error;
pub mod favorites;
pub mod preprocess;
pub mod request;
pub mod state;

pub use client::ProviderClient;
pub use error::{LookupError, ProviderError};
pub use favorites::{Favorites, JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use preprocess::SearchTerm;
pub use request::{LatestRequest, Ticket};

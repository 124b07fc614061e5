// Service exports
pub mod auth;
pub mod cache;
pub mod dataset;
pub mod favorites;
pub mod store;

pub use auth::{AuthError, AuthService, DemoCredentials};
pub use cache::{CacheManager, CacheKey, CacheError};
pub use dataset::{DatasetError, DatasetFiles, DatasetLoader};
pub use favorites::FavoritesService;
pub use store::{KeyValueStore, MemoryStore, StoreError, UpdateFn};

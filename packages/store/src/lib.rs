//! # Persistent key-value storage for the tracker client
//!
//! The session layer needs exactly two persisted values — the bearer token
//! and a cached copy of the current user — but where those live depends on
//! the platform. [`KeyValueStore`] abstracts that away so the session logic
//! can be exercised in plain unit tests without a browser environment.
//!
//! | Implementation | Backing | Used on |
//! |----------------|---------|---------|
//! | [`MemoryStore`] | `HashMap` behind a mutex | native builds and tests |
//! | [`LocalStore`] | browser `localStorage` | web (`web` feature) |

pub mod keys;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

/// Async interface over a string key-value store with get/set/remove.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

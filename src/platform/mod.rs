//! Platform abstraction layer
//!
//! Browser/native seams:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Favicon sink (canvas -> data URL -> `<link rel="icon">`)

pub mod favicon;
pub mod storage;

pub use storage::{MemoryStore, ScoreStore};

#[cfg(target_arch = "wasm32")]
pub use favicon::FaviconSink;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

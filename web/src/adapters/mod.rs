//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod memory;

pub use http::HttpBillStore;
pub use memory::InMemoryBillStore;

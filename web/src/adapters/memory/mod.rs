//! In-memory adapter
//!
//! Bill store kept in process memory, for local runs without a backend.

pub mod bill_store;

pub use bill_store::InMemoryBillStore;

//! HTTP adapter
//!
//! Bill store backed by the remote bills API.

pub mod client;

pub use client::HttpBillStore;

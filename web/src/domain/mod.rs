//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Bills and the signed-in user
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;

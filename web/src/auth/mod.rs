//! Session handling
//!
//! The signed-in user is read from cookies set by the login flow.

mod session;

pub use session::{read_session, session_middleware};

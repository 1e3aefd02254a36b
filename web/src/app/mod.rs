//! Application layer
//!
//! Containers that drive each page, the router that renders them, and the
//! command dispatcher for user interactions.

pub mod bills_container;
pub mod command;
pub mod dashboard_container;
pub mod format;
pub mod new_bill_container;
pub mod router;
pub mod screen;

pub use bills_container::EyeIcon;
pub use command::{Outcome, UiCommand, UiController};
pub use new_bill_container::{FileSelection, NewBillForm};
pub use router::{Navigator, PageRouter, RedirectNavigator, Route};
pub use screen::Screen;

//! Access to the user agent's current location.
//!
//! # Data Flow
//! ```text
//! provider (login/logout/sign)
//!     → current_url() as default callback
//!     → navigate_to(hook URL)          (fire-and-forget)
//!
//! provider (decode)
//!     → current_query() of the return URL
//! ```
//!
//! # Contract
//! - `navigate_to` is the only mutation of the location
//! - There is no queuing or locking across racing navigations; a real
//!   user agent has a single active page
//! - Navigation is neither retried nor verified

pub mod location;

pub use location::{InMemoryLocation, RedirectGateway};

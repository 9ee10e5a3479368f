//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! provider, encoder, decoder
//!     → tracing events (navigation, decode counts, rejected replies)
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the
//!   binary's job
//! - Info events name the hook path only; full redirect URLs (which may
//!   carry a login token) are logged at debug

pub mod logging;

pub use logging::init_logging;

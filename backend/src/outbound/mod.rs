//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and their backing storage. They
//! contain no business logic and report every problem as a
//! [`Failure`](outcome::Failure).
//!
//! - **memory**: in-process account store used by the development server
//!   and behaviour tests.

pub mod memory;

//! Chat backend library modules.
//!
//! Layout follows a hexagonal split: [`domain`] holds the account model,
//! ports and use-cases; [`inbound`] adapts HTTP requests onto the domain;
//! [`outbound`] implements the driven ports. Every fallible step returns an
//! [`outcome::Outcome`] and each request ends in exactly one reply.

pub mod domain;
pub mod inbound;
pub mod outbound;

//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic. Only the in-process adapter ships today.

pub mod memory;

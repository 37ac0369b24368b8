//! Authoritative in-memory record list.
//!
//! # Responsibility
//! - Hold the session's current record list between backend round-trips.
//! - Mediate every read used by the controller and the presentation layer.
//!
//! # Invariants
//! - Contents change only through `replace_all`; callers read borrows and
//!   cannot mutate entries in place.

pub mod record_store;

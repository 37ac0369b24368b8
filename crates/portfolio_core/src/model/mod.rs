//! Domain model for portfolio project records.
//!
//! # Responsibility
//! - Define the canonical data structure used by store, backends, and
//!   controller.
//! - Keep one flat record shape for every consumer.
//!
//! # Invariants
//! - Every record is identified by a caller-chosen `[A-Za-z0-9_-]+` id.
//! - Wire names stay fixed so stored documents remain readable across
//!   releases.

pub mod record;

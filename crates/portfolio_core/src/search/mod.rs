//! Record search entry points.
//!
//! # Responsibility
//! - Expose the substring filter the read panel runs on every keystroke.
//! - Keep result shaping (order, matched fields) inside core.

pub mod filter;

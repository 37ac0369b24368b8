//! Core use-case services.
//!
//! # Responsibility
//! - Translate user intents into store mutations and backend calls.
//! - Keep the presentation layer decoupled from storage details.

pub mod project_service;

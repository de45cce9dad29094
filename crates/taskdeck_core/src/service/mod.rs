//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, ranking, views, and stats into the API the
//!   presentation layer consumes.
//! - Keep UI layers decoupled from storage details.

pub mod tracker;

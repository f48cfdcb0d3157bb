//! Core types shared across sectiondiff facilities
//!
//! This crate provides foundational types used by both the diff core and
//! the reconciliation driver:
//!
//! - **Correlation types**: UpdateId, tying together all log events of one
//!   reconciliation pass
//! - **Schema constants**: Canonical field keys and event names for
//!   structured logging

pub mod correlation;
pub mod schema;

pub use correlation::UpdateId;

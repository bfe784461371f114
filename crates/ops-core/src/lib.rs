//! # ops-core
//!
//! Core types, change tracking, and view logic for opsdesk.
//!
//! This crate provides the foundational types shared across all opsdesk crates:
//! - Entity structs for tasks, employees, and audit records
//! - Status, priority, and role enums (task status carries its state machine)
//! - ID prefix constants
//! - The change-tracking core: snapshots, field diffs, guards, and the
//!   commit pipeline driven by an edit session
//! - Store traits the commit pipeline writes through
//! - Calendar and archive view logic
//! - Cross-cutting error types

pub mod archive;
pub mod calendar;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod store;
pub mod tracking;

//! Repository modules implementing the opsdesk persistence operations.
//!
//! Each module adds methods to `OpsService` via `impl OpsService` blocks.

pub mod audit;
pub mod employee;
pub mod task;

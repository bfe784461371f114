//! Entity structs for opsdesk domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod audit;
mod employee;
mod task;

pub use audit::{AuditEntry, AuditRecord};
pub use employee::Employee;
pub use task::Task;

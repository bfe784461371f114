use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A person who can own, edit, and be assigned tasks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: String,
    pub employee_name: String,
    pub email: String,
    pub department_id: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

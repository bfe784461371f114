use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Employee;
use crate::enums::Role;

/// The employee performing an edit, used for authorization and audit
/// attribution.
///
/// Produced by an email lookup at the CLI boundary. Contains only data
/// fields; there are no session tokens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Actor {
    pub employee_id: String,
    pub role: Role,
    pub department_id: Option<String>,
}

impl From<&Employee> for Actor {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            role: employee.role,
            department_id: employee.department_id.clone(),
        }
    }
}

//! Employee directory: registration and lookups.

use ops_core::entities::Employee;
use ops_core::enums::Role;
use ops_core::ids::PREFIX_EMPLOYEE;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, now, parse_datetime};
use crate::service::OpsService;

const SELECT_COLS: &str = "employee_id, employee_name, email, department_id, role, created_at";

/// Input for [`OpsService::register_employee`].
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_name: String,
    pub email: String,
    pub department_id: Option<String>,
    pub role: Role,
}

fn row_to_employee(row: &libsql::Row) -> Result<Employee, DatabaseError> {
    Ok(Employee {
        employee_id: row.get(0)?,
        employee_name: row.get(1)?,
        email: row.get(2)?,
        department_id: get_opt_string(row, 3)?,
        role: Role::from_raw(&row.get::<String>(4)?),
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl OpsService {
    /// Register an employee. Emails are unique, compared case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for a blank name or email or an
    /// email that is already registered.
    pub async fn register_employee(&self, new: &NewEmployee) -> Result<Employee, DatabaseError> {
        let name = new.employee_name.trim();
        let email = new.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(DatabaseError::InvalidState(
                "employee name and email are required".into(),
            ));
        }
        if self.find_employee_by_email(email).await?.is_some() {
            return Err(DatabaseError::InvalidState(format!(
                "an employee with email '{email}' is already registered"
            )));
        }

        let id = self.db().generate_id(PREFIX_EMPLOYEE).await?;
        let created_at = now();
        let department = new
            .department_id
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO employees ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
                libsql::params![
                    id.as_str(),
                    name,
                    email,
                    department,
                    new.role.as_str(),
                    format_datetime(&created_at)
                ],
            )
            .await?;

        tracing::info!(employee_id = %id, role = %new.role, "employee registered");

        Ok(Employee {
            employee_id: id,
            employee_name: name.to_string(),
            email: email.to_string(),
            department_id: department.map(String::from),
            role: new.role,
            created_at,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no employee has this id.
    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM employees WHERE employee_id = ?1"),
                [employee_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_employee(&row)
    }

    /// Look up an employee by email, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_employee_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Employee>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM employees WHERE lower(email) = lower(?1)"),
                [email.trim()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    /// All employees ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM employees ORDER BY employee_name, employee_id"),
                (),
            )
            .await?;

        let mut employees = Vec::new();
        while let Some(row) = rows.next().await? {
            employees.push(row_to_employee(&row)?);
        }
        Ok(employees)
    }

    /// Department of an employee; `None` when unknown or unassigned.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn department_of(&self, employee_id: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT department_id FROM employees WHERE employee_id = ?1",
                [employee_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => get_opt_string(&row, 0),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{register, test_service};

    #[tokio::test]
    async fn register_employee_roundtrip() {
        let svc = test_service().await;
        let emp = register(&svc, "Dana", "dana@example.com", Some("dep-ops"), Role::Manager).await;

        assert!(emp.employee_id.starts_with("emp-"));
        let fetched = svc.get_employee(&emp.employee_id).await.unwrap();
        assert_eq!(fetched, emp);
    }

    #[tokio::test]
    async fn email_lookup_ignores_case() {
        let svc = test_service().await;
        let emp = register(&svc, "Dana", "Dana@Example.com", None, Role::Staff).await;

        let found = svc
            .find_employee_by_email("  dana@example.COM ")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.employee_id, emp.employee_id);
        assert!(
            svc.find_employee_by_email("nobody@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let svc = test_service().await;
        register(&svc, "Dana", "dana@example.com", None, Role::Staff).await;

        let result = svc
            .register_employee(&NewEmployee {
                employee_name: "Other Dana".into(),
                email: "DANA@example.com".into(),
                department_id: None,
                role: Role::Staff,
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[tokio::test]
    async fn blank_department_is_stored_as_null() {
        let svc = test_service().await;
        let emp = register(&svc, "Lee", "lee@example.com", Some("  "), Role::Staff).await;
        assert_eq!(emp.department_id, None);
        assert_eq!(svc.department_of(&emp.employee_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_employees_by_name() {
        let svc = test_service().await;
        register(&svc, "Zed", "zed@example.com", None, Role::Staff).await;
        register(&svc, "Ann", "ann@example.com", None, Role::Boss).await;

        let names: Vec<String> = svc
            .list_employees()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.employee_name)
            .collect();
        assert_eq!(names, ["Ann", "Zed"]);
    }

    #[tokio::test]
    async fn department_of_unknown_employee_is_none() {
        let svc = test_service().await;
        let emp = register(&svc, "Dana", "dana@example.com", Some("dep-ops"), Role::Staff).await;

        assert_eq!(
            svc.department_of(&emp.employee_id).await.unwrap().as_deref(),
            Some("dep-ops")
        );
        assert_eq!(svc.department_of("emp-missing").await.unwrap(), None);
    }
}

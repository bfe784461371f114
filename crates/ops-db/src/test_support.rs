//! Shared test utilities for ops-db unit tests.

pub(crate) mod helpers {
    use ops_core::entities::{Employee, Task};
    use ops_core::enums::Role;

    use crate::OpsDb;
    use crate::repos::employee::NewEmployee;
    use crate::repos::task::NewTask;
    use crate::service::OpsService;

    /// Create an in-memory `OpsService`.
    pub async fn test_service() -> OpsService {
        let db = OpsDb::open_local(":memory:").await.unwrap();
        OpsService::from_db(db)
    }

    pub async fn register(
        svc: &OpsService,
        name: &str,
        email: &str,
        department: Option<&str>,
        role: Role,
    ) -> Employee {
        svc.register_employee(&NewEmployee {
            employee_name: name.into(),
            email: email.into(),
            department_id: department.map(String::from),
            role,
        })
        .await
        .unwrap()
    }

    pub async fn create(svc: &OpsService, title: &str) -> Task {
        svc.create_task(&NewTask {
            task_title: title.into(),
            ..NewTask::default()
        })
        .await
        .unwrap()
    }

    /// Write a status verbatim, as legacy rows may carry it.
    pub async fn set_raw_status(svc: &OpsService, task_id: &str, status: &str) {
        svc.db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1 WHERE task_id = ?2",
                libsql::params![status, task_id],
            )
            .await
            .unwrap();
    }
}

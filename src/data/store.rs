use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::forms::NewCourse;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// A course accepted by the store, with its generated id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    #[serde(flatten)]
    pub course: NewCourse,
}

/// Downstream consumer of validated submissions. In-memory for now; a
/// real backend would implement the same trait with fallible futures.
pub trait CourseStore: Clone {
    fn departments(&self) -> impl std::future::Future<Output = Vec<Department>> + Send;
    fn department(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Option<Department>> + Send;
    fn courses(
        &self,
        department_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<CourseRecord>>> + Send;
    fn add_course(
        &self,
        department_id: &str,
        course: NewCourse,
    ) -> impl std::future::Future<Output = Result<CourseRecord>> + Send;
}

struct DepartmentEntry {
    department: Department,
    courses: Vec<CourseRecord>,
}

#[derive(Clone, Default)]
pub struct MemoryCourseStore {
    inner: Arc<Mutex<BTreeMap<String, DepartmentEntry>>>,
}

impl MemoryCourseStore {
    pub fn seeded(departments: impl IntoIterator<Item = Department>) -> Self {
        let inner = departments
            .into_iter()
            .map(|department| {
                (
                    department.id.clone(),
                    DepartmentEntry {
                        department,
                        courses: Vec::new(),
                    },
                )
            })
            .collect();
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }
}

impl CourseStore for MemoryCourseStore {
    async fn departments(&self) -> Vec<Department> {
        let inner = self.inner.lock().expect("course store mutex poisoned");
        inner.values().map(|e| e.department.clone()).collect()
    }

    async fn department(&self, id: &str) -> Option<Department> {
        let inner = self.inner.lock().expect("course store mutex poisoned");
        inner.get(id).map(|e| e.department.clone())
    }

    async fn courses(&self, department_id: &str) -> Result<Vec<CourseRecord>> {
        debug!(department_id, "listing courses");
        let inner = self.inner.lock().expect("course store mutex poisoned");
        let entry = inner
            .get(department_id)
            .ok_or_else(|| anyhow!("unknown department {}", department_id))?;
        Ok(entry.courses.clone())
    }

    async fn add_course(&self, department_id: &str, course: NewCourse) -> Result<CourseRecord> {
        let record = CourseRecord {
            id: Uuid::new_v4().to_string(),
            course,
        };

        let mut inner = self.inner.lock().expect("course store mutex poisoned");
        let entry = inner
            .get_mut(department_id)
            .ok_or_else(|| anyhow!("unknown department {}", department_id))?;

        let json =
            serde_json::to_string(&record).expect("failed to serialize course record to json");
        info!(department_id, course = %json, "new course");

        entry.courses.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> NewCourse {
        NewCourse {
            course_name: "Data Structures".to_string(),
            credits: 4,
            num_lectures: 3,
            semester: 5,
        }
    }

    fn store() -> MemoryCourseStore {
        MemoryCourseStore::seeded([Department {
            id: "csc".to_string(),
            name: "Computer Science".to_string(),
        }])
    }

    #[tokio::test]
    async fn add_course_records_under_its_department() {
        let store = store();

        let record = store.add_course("csc", sample_course()).await.unwrap();
        assert_eq!(record.course, sample_course());

        let courses = store.courses("csc").await.unwrap();
        assert_eq!(courses, vec![record]);
    }

    #[tokio::test]
    async fn unknown_department_is_refused() {
        let store = store();

        assert!(store.add_course("phil", sample_course()).await.is_err());
        assert!(store.courses("phil").await.is_err());
        assert!(store.department("phil").await.is_none());

        // nothing was recorded anywhere
        assert!(store.courses("csc").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_departments_are_listed() {
        let departments = store().departments().await;
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].id, "csc");
    }
}

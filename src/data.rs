use anyhow::Result;

use store::{CourseRecord, CourseStore, Department, MemoryCourseStore};

use crate::forms::NewCourse;

pub mod store;

/// Shared application state. Holds the course store behind the
/// [`CourseStore`] trait so a persistent backend can slot in later.
#[derive(Clone)]
pub struct AppState {
    store: MemoryCourseStore,
}

impl AppState {
    pub fn new(store: MemoryCourseStore) -> Self {
        Self { store }
    }

    pub async fn departments(&self) -> Vec<Department> {
        self.store.departments().await
    }

    pub async fn department(&self, id: &str) -> Option<Department> {
        self.store.department(id).await
    }

    pub async fn courses(&self, department_id: &str) -> Result<Vec<CourseRecord>> {
        self.store.courses(department_id).await
    }

    pub async fn add_course(
        &self,
        department_id: &str,
        course: NewCourse,
    ) -> Result<CourseRecord> {
        self.store.add_course(department_id, course).await
    }
}

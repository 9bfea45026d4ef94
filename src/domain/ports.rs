use crate::domain::course::Course;
use crate::utils::error::Result;
use std::collections::HashMap;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn snapshot_file(&self) -> &str;
    fn seed_demo_data(&self) -> bool;
}

/// Resolves a course by its exact name.
pub trait CourseLookup {
    fn find_course(&self, name: &str) -> Option<&Course>;
}

impl CourseLookup for HashMap<String, Course> {
    fn find_course(&self, name: &str) -> Option<&Course> {
        self.get(name)
    }
}

impl CourseLookup for [Course] {
    fn find_course(&self, name: &str) -> Option<&Course> {
        self.iter().find(|course| course.name() == name)
    }
}

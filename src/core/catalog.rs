use crate::domain::ports::CourseLookup;
use crate::domain::Course;
use crate::utils::error::{Result, SgaeaError};
use crate::utils::validation::validate_non_empty_string;

/// Every course known to the academy, in creation order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str) -> Result<&mut Course> {
        validate_non_empty_string("course.name", name)?;
        if self.contains(name) {
            return Err(SgaeaError::validation(
                "course.name",
                format!("course '{}' already exists", name),
            ));
        }

        self.courses.push(Course::new(name));
        tracing::info!("Course {} added", name);
        let last = self.courses.len() - 1;
        Ok(&mut self.courses[last])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_course(name).is_some()
    }

    pub fn get(&self, name: &str) -> Result<&Course> {
        self.find_course(name)
            .ok_or_else(|| SgaeaError::not_found("Course", name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Course> {
        self.courses
            .iter_mut()
            .find(|course| course.name() == name)
            .ok_or_else(|| SgaeaError::not_found("Course", name))
    }

    /// Removes the course from the catalog only. Callers own the student side.
    pub(crate) fn take(&mut self, name: &str) -> Result<Course> {
        let index = self
            .courses
            .iter()
            .position(|course| course.name() == name)
            .ok_or_else(|| SgaeaError::not_found("Course", name))?;
        Ok(self.courses.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl CourseLookup for CourseCatalog {
    fn find_course(&self, name: &str) -> Option<&Course> {
        self.courses.as_slice().find_course(name)
    }
}

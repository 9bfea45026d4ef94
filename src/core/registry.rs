use crate::core::catalog::CourseCatalog;
use crate::domain::ports::CourseLookup;
use crate::domain::{Address, Identity, NameLookup, Student, StudentId};
use crate::utils::error::{Result, SgaeaError};
use crate::utils::validation::rounded_mean;
use std::collections::BTreeMap;

/// Owns every student, keyed by a monotonic id.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRegistry {
    students: BTreeMap<StudentId, Student>,
    next_id: u32,
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next registered student will receive.
    pub fn next_id(&self) -> StudentId {
        StudentId(self.next_id)
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        age: u32,
        address: Address,
    ) -> Result<StudentId> {
        let id = StudentId(self.next_id);
        self.next_id = successor(id)?;

        let student = Student::new(id, name, age, address);
        tracing::info!("Student {} registered with id {}", student.name(), id);
        self.students.insert(id, student);
        Ok(id)
    }

    /// Puts back a student rebuilt from a snapshot. The counter moves past its id.
    pub(crate) fn restore(&mut self, student: Student) -> Result<()> {
        let id = student.id();
        if self.students.contains_key(&id) {
            return Err(SgaeaError::validation(
                "students.id",
                format!("duplicate student id {}", id),
            ));
        }
        self.next_id = self.next_id.max(successor(id)?);
        self.students.insert(id, student);
        Ok(())
    }

    pub(crate) fn bump_next_id(&mut self, next_id: u32) {
        self.next_id = self.next_id.max(next_id);
    }

    /// Deletes the student and strips them from every course they were in.
    pub fn remove(&mut self, id: StudentId, courses: &mut CourseCatalog) -> Result<Student> {
        let student = self
            .students
            .remove(&id)
            .ok_or_else(|| SgaeaError::not_found("Student", id))?;

        for record in student.enrollments() {
            match courses.get_mut(&record.course) {
                Ok(course) => {
                    course.remove_student(id);
                }
                Err(_) => tracing::debug!(
                    "Course {} no longer exists; nothing to strip for student {}",
                    record.course,
                    id
                ),
            }
        }

        tracing::info!("Student {} removed and unenrolled from all courses", id);
        Ok(student)
    }

    pub fn get(&self, id: StudentId) -> Result<&Student> {
        self.students
            .get(&id)
            .ok_or_else(|| SgaeaError::not_found("Student", id))
    }

    pub fn get_mut(&mut self, id: StudentId) -> Result<&mut Student> {
        self.students
            .get_mut(&id)
            .ok_or_else(|| SgaeaError::not_found("Student", id))
    }

    /// Case-insensitive substring search. Only a single match is usable.
    pub fn find_by_name(&self, pattern: &str) -> NameLookup<'_, Student> {
        let needle = pattern.trim().to_lowercase();
        let mut matches: Vec<&Student> = self
            .students
            .values()
            .filter(|student| student.name().trim().to_lowercase().contains(&needle))
            .collect();

        match matches.len() {
            0 => {
                tracing::debug!("No student matches '{}'", pattern);
                NameLookup::NotFound
            }
            1 => NameLookup::Unique(matches.remove(0)),
            n => {
                tracing::debug!("{} students match '{}'", n, pattern);
                NameLookup::Ambiguous(matches)
            }
        }
    }

    /// Mean of the per-student averages, skipping students without grades.
    pub fn overall_average<L: CourseLookup + ?Sized>(&self, courses: &L) -> Result<f64> {
        let averages: Vec<f64> = self
            .students
            .values()
            .filter_map(|student| student.average_grade(courses).ok())
            .collect();

        rounded_mean(&averages)
            .ok_or_else(|| SgaeaError::no_data("no student has any grades"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Student> {
        self.students.values_mut()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// The id after `id`; fails once the id space is used up.
fn successor(id: StudentId) -> Result<u32> {
    id.0
        .checked_add(1)
        .ok_or_else(|| SgaeaError::validation("students.id", format!("no ids left after {}", id)))
}

use crate::domain::address::Address;
use crate::domain::course::Course;
use crate::domain::model::{EnrollmentRecord, Identity, Membership, StudentId};
use crate::domain::person::Person;
use crate::domain::ports::CourseLookup;
use crate::utils::error::{Result, SgaeaError};
use crate::utils::validation::rounded_mean;
use chrono::{Local, NaiveDate};
use std::fmt;

/// A person plus the courses they are enrolled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    person: Person,
    enrollments: Vec<EnrollmentRecord>,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>, age: u32, address: Address) -> Self {
        Self {
            person: Person::new(id, name, age, address),
            enrollments: Vec::new(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn age(&self) -> u32 {
        self.person.age()
    }

    pub fn address(&self) -> &Address {
        self.person.address()
    }

    /// Copy of the enrollment records; mutating it does not touch the student.
    pub fn enrollments(&self) -> Vec<EnrollmentRecord> {
        self.enrollments.clone()
    }

    pub fn enrollment_count(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_enrolled_in(&self, course: &str) -> bool {
        self.enrollments.iter().any(|record| record.course == course)
    }

    pub fn enroll(&mut self, course: &mut Course) -> Result<()> {
        self.enroll_on(course, Local::now().date_naive())
    }

    /// Enrolls with an explicit date, used when restoring snapshots.
    pub(crate) fn enroll_on(&mut self, course: &mut Course, enrolled_on: NaiveDate) -> Result<()> {
        if self.is_enrolled_in(course.name()) {
            return Err(SgaeaError::AlreadyEnrolledError {
                student: self.name().to_string(),
                course: course.name().to_string(),
            });
        }

        self.enrollments.push(EnrollmentRecord {
            course: course.name().to_string(),
            enrolled_on,
        });
        if course.add_student(self.id()) == Membership::AlreadyEnrolled {
            tracing::warn!(
                "Course {} already listed student {} without a matching enrollment record",
                course.name(),
                self.id()
            );
        }

        tracing::info!("Student {} enrolled in {}", self.name(), course.name());
        Ok(())
    }

    pub fn unenroll(&mut self, course: &mut Course) -> Result<()> {
        let index = self
            .enrollments
            .iter()
            .position(|record| record.course == course.name())
            .ok_or_else(|| SgaeaError::NotEnrolledError {
                student: self.name().to_string(),
                course: course.name().to_string(),
            })?;

        self.enrollments.remove(index);
        course.remove_student(self.id());

        tracing::info!("Student {} unenrolled from {}", self.name(), course.name());
        Ok(())
    }

    /// Drops the enrollment record without touching the course. Used when the
    /// course itself is being deleted.
    pub(crate) fn forget_course(&mut self, course: &str) -> bool {
        let before = self.enrollments.len();
        self.enrollments.retain(|record| record.course != course);
        self.enrollments.len() != before
    }

    /// Mean of all grades across all enrolled courses, rounded to two decimals.
    pub fn average_grade<L: CourseLookup + ?Sized>(&self, courses: &L) -> Result<f64> {
        if self.enrollments.is_empty() {
            return Err(SgaeaError::no_data(format!(
                "student {} has no enrolled courses",
                self.name()
            )));
        }

        let grades: Vec<f64> = self
            .enrollments
            .iter()
            .filter_map(|record| courses.find_course(&record.course))
            .flat_map(|course| course.grades_for(self.id()).iter().copied())
            .collect();

        rounded_mean(&grades).ok_or_else(|| {
            SgaeaError::no_data(format!("student {} has no grades", self.name()))
        })
    }
}

impl Identity for Student {
    fn id(&self) -> StudentId {
        self.person.id()
    }

    fn name(&self) -> &str {
        self.person.name()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.person)?;
        if self.enrollments.is_empty() {
            write!(f, ", No enrolled courses.")
        } else {
            write!(f, ", Enrolled courses: {}", self.enrollments.len())
        }
    }
}

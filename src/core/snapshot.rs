use crate::core::academy::Academy;
use crate::core::catalog::CourseCatalog;
use crate::core::registry::StudentRegistry;
use crate::domain::{Address, Identity, Student, StudentId};
use crate::utils::error::{Result, SgaeaError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plain nested-record form of an [`Academy`], as written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademySnapshot {
    #[serde(default = "first_id")]
    pub next_id: u32,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

fn first_id() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub address: AddressRecord,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub grades: BTreeMap<String, Vec<f64>>,
    #[serde(default)]
    pub enrolled_on: BTreeMap<String, NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub street: String,
    pub number: String,
    pub floor: String,
    pub postal_code: String,
    pub province: String,
    pub locality: String,
}

impl From<&Address> for AddressRecord {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            number: address.number().to_string(),
            floor: address.floor().to_string(),
            postal_code: address.postal_code().to_string(),
            province: address.province().to_string(),
            locality: address.locality().to_string(),
        }
    }
}

impl TryFrom<AddressRecord> for Address {
    type Error = SgaeaError;

    fn try_from(record: AddressRecord) -> Result<Self> {
        Address::new(
            record.street,
            record.number,
            record.floor,
            record.postal_code,
            record.province,
            record.locality,
        )
    }
}

impl Academy {
    pub fn to_snapshot(&self) -> AcademySnapshot {
        let students = self
            .students()
            .iter()
            .map(|student| {
                let enrollments = student.enrollments();
                let grades = enrollments
                    .iter()
                    .map(|record| {
                        let grades = self
                            .courses()
                            .get(&record.course)
                            .map(|course| course.grades_for(student.id()).to_vec())
                            .unwrap_or_default();
                        (record.course.clone(), grades)
                    })
                    .collect();

                StudentRecord {
                    id: student.id().0,
                    name: student.name().to_string(),
                    age: student.age(),
                    address: AddressRecord::from(student.address()),
                    courses: enrollments.iter().map(|r| r.course.clone()).collect(),
                    grades,
                    enrolled_on: enrollments
                        .iter()
                        .map(|r| (r.course.clone(), r.enrolled_on))
                        .collect(),
                }
            })
            .collect();

        AcademySnapshot {
            next_id: self.students().next_id().0,
            courses: self.courses().iter().map(|c| c.name().to_string()).collect(),
            students,
        }
    }

    /// Rebuilds the graph, validating every address, grade and course reference.
    pub fn from_snapshot(snapshot: AcademySnapshot) -> Result<Self> {
        let mut courses = CourseCatalog::new();
        for name in &snapshot.courses {
            courses.add(name)?;
        }

        let today = Local::now().date_naive();
        let mut students = StudentRegistry::new();

        for record in snapshot.students {
            if record.id == 0 {
                return Err(SgaeaError::validation("students.id", "ids start at 1"));
            }
            let id = StudentId(record.id);
            let address = Address::try_from(record.address)?;
            let mut student = Student::new(id, record.name, record.age, address);

            for course_name in &record.courses {
                let course = courses.get_mut(course_name)?;
                let enrolled_on = record.enrolled_on.get(course_name).copied().unwrap_or(today);
                student.enroll_on(course, enrolled_on)?;
            }

            for (course_name, grades) in &record.grades {
                if !student.is_enrolled_in(course_name) {
                    return Err(SgaeaError::validation(
                        "students.grades",
                        format!(
                            "student {} has grades for {} without being enrolled",
                            id, course_name
                        ),
                    ));
                }
                let course = courses.get_mut(course_name)?;
                for grade in grades {
                    course.assign_grade(id, *grade)?;
                }
            }

            students.restore(student)?;
        }

        students.bump_next_id(snapshot.next_id);
        tracing::debug!(
            "Snapshot restored: {} students, {} courses",
            students.len(),
            courses.len()
        );
        Ok(Academy::from_parts(students, courses))
    }
}

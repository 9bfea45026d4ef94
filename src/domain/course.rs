use crate::domain::model::{Membership, StudentId};
use crate::utils::error::{Result, SgaeaError};
use crate::utils::validation::{rounded_mean, validate_grade};
use std::fmt;

/// Grades one enrolled student holds in a course.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRecord {
    pub student: StudentId,
    pub grades: Vec<f64>,
}

/// A course and its roster.
///
/// The roster is a single ordered list of grade records, so every enrolled
/// student has exactly one grade record and there is no record without an
/// enrolled student.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    roster: Vec<GradeRecord>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolled students in enrollment order.
    pub fn students(&self) -> Vec<StudentId> {
        self.roster.iter().map(|record| record.student).collect()
    }

    pub fn student_count(&self) -> usize {
        self.roster.len()
    }

    pub fn contains(&self, student: StudentId) -> bool {
        self.roster.iter().any(|record| record.student == student)
    }

    pub fn grade_records(&self) -> &[GradeRecord] {
        &self.roster
    }

    pub fn add_student(&mut self, student: StudentId) -> Membership {
        if self.contains(student) {
            tracing::debug!("Student {} is already on the roster of {}", student, self.name);
            return Membership::AlreadyEnrolled;
        }

        self.roster.push(GradeRecord {
            student,
            grades: Vec::new(),
        });
        tracing::debug!("Student {} added to {}", student, self.name);
        Membership::Added
    }

    /// Drops the student and their grade history. A missing student is not an error.
    pub fn remove_student(&mut self, student: StudentId) -> bool {
        let before = self.roster.len();
        self.roster.retain(|record| record.student != student);
        let removed = self.roster.len() != before;
        if removed {
            tracing::debug!("Student {} removed from {}", student, self.name);
        }
        removed
    }

    pub fn assign_grade(&mut self, student: StudentId, grade: f64) -> Result<()> {
        validate_grade("grade", grade)?;

        let course = self.name.clone();
        let record = self
            .roster
            .iter_mut()
            .find(|record| record.student == student)
            .ok_or_else(|| SgaeaError::NotEnrolledError {
                student: student.to_string(),
                course,
            })?;

        record.grades.push(grade);
        tracing::debug!("Grade {} assigned to student {} in {}", grade, student, self.name);
        Ok(())
    }

    pub fn grades_for(&self, student: StudentId) -> &[f64] {
        self.roster
            .iter()
            .find(|record| record.student == student)
            .map(|record| record.grades.as_slice())
            .unwrap_or(&[])
    }

    /// Mean of every grade in the course, or `None` when nothing has been graded.
    pub fn average_grade(&self) -> Option<f64> {
        let all: Vec<f64> = self
            .roster
            .iter()
            .flat_map(|record| record.grades.iter().copied())
            .collect();
        rounded_mean(&all)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course: {}, Enrolled students: {}",
            self.name,
            self.roster.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_student_is_idempotent() {
        let mut course = Course::new("Math");
        assert_eq!(course.add_student(StudentId(1)), Membership::Added);
        assert_eq!(course.add_student(StudentId(1)), Membership::AlreadyEnrolled);
        assert_eq!(course.students(), vec![StudentId(1)]);
        assert_eq!(course.grade_records().len(), 1);
    }

    #[test]
    fn test_remove_absent_student_is_noop() {
        let mut course = Course::new("Math");
        course.add_student(StudentId(1));
        assert!(!course.remove_student(StudentId(2)));
        assert!(course.remove_student(StudentId(1)));
        assert!(course.students().is_empty());
        assert!(course.grade_records().is_empty());
    }

    #[test]
    fn test_assign_grade_bounds() {
        let mut course = Course::new("Math");
        course.add_student(StudentId(1));

        assert!(course.assign_grade(StudentId(1), 0.0).is_ok());
        assert!(course.assign_grade(StudentId(1), 10.0).is_ok());
        assert!(matches!(
            course.assign_grade(StudentId(1), -0.01),
            Err(SgaeaError::ValidationError { .. })
        ));
        assert!(matches!(
            course.assign_grade(StudentId(1), 10.01),
            Err(SgaeaError::ValidationError { .. })
        ));
        assert!(matches!(
            course.assign_grade(StudentId(1), f64::NAN),
            Err(SgaeaError::ValidationError { .. })
        ));

        assert_eq!(course.grades_for(StudentId(1)), &[0.0, 10.0]);
    }

    #[test]
    fn test_out_of_range_grade_leaves_record_unchanged() {
        let mut course = Course::new("Math");
        course.add_student(StudentId(1));
        course.assign_grade(StudentId(1), 7.0).unwrap();

        let result = course.assign_grade(StudentId(1), 11.0);
        assert!(matches!(result, Err(SgaeaError::ValidationError { .. })));
        assert_eq!(course.grades_for(StudentId(1)), &[7.0]);
    }

    #[test]
    fn test_assign_grade_requires_enrollment() {
        let mut course = Course::new("Math");
        let result = course.assign_grade(StudentId(9), 5.0);
        assert!(matches!(result, Err(SgaeaError::NotEnrolledError { .. })));
        assert!(course.grades_for(StudentId(9)).is_empty());
    }

    #[test]
    fn test_average_without_grades_is_none() {
        let mut course = Course::new("Math");
        assert_eq!(course.average_grade(), None);
        course.add_student(StudentId(1));
        assert_eq!(course.average_grade(), None);
    }

    #[test]
    fn test_average_across_students() {
        let mut course = Course::new("Math");
        course.add_student(StudentId(1));
        course.add_student(StudentId(2));
        course.assign_grade(StudentId(1), 8.0).unwrap();
        course.assign_grade(StudentId(2), 9.0).unwrap();
        course.assign_grade(StudentId(2), 6.0).unwrap();
        assert_eq!(course.average_grade(), Some(7.67));
        assert_eq!(course.to_string(), "Course: Math, Enrolled students: 2");
    }
}

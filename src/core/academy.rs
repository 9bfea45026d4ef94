use crate::core::catalog::CourseCatalog;
use crate::core::registry::StudentRegistry;
use crate::domain::{Address, Course, NameLookup, Student, StudentId};
use crate::utils::error::Result;
use crate::utils::validation::{validate_grade, validate_non_empty_string};

/// The whole enrollment graph: students and courses, passed around explicitly.
///
/// Every cross-entity operation resolves both sides before mutating anything,
/// so a failed call leaves the graph exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Academy {
    students: StudentRegistry,
    courses: CourseCatalog,
}

impl Academy {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(students: StudentRegistry, courses: CourseCatalog) -> Self {
        Self { students, courses }
    }

    pub fn students(&self) -> &StudentRegistry {
        &self.students
    }

    pub fn courses(&self) -> &CourseCatalog {
        &self.courses
    }

    pub fn add_student(&mut self, name: &str, age: u32, address: Address) -> Result<StudentId> {
        validate_non_empty_string("student.name", name)?;
        self.students.register(name.trim(), age, address)
    }

    pub fn add_course(&mut self, name: &str) -> Result<&Course> {
        let course = self.courses.add(name.trim())?;
        Ok(&*course)
    }

    pub fn student(&self, id: StudentId) -> Result<&Student> {
        self.students.get(id)
    }

    pub fn course(&self, name: &str) -> Result<&Course> {
        self.courses.get(name)
    }

    pub fn find_student(&self, pattern: &str) -> NameLookup<'_, Student> {
        self.students.find_by_name(pattern)
    }

    pub fn enroll(&mut self, student: StudentId, course: &str) -> Result<()> {
        let student = self.students.get_mut(student)?;
        let course = self.courses.get_mut(course)?;
        student.enroll(course)
    }

    pub fn unenroll(&mut self, student: StudentId, course: &str) -> Result<()> {
        let student = self.students.get_mut(student)?;
        let course = self.courses.get_mut(course)?;
        student.unenroll(course)
    }

    pub fn assign_grade(&mut self, student: StudentId, course: &str, grade: f64) -> Result<()> {
        validate_grade("grade", grade)?;
        self.students.get(student)?;
        self.courses.get_mut(course)?.assign_grade(student, grade)
    }

    pub fn remove_student(&mut self, id: StudentId) -> Result<Student> {
        self.students.remove(id, &mut self.courses)
    }

    /// Deletes a course and drops it from every enrolled student's records.
    pub fn remove_course(&mut self, name: &str) -> Result<Course> {
        let course = self.courses.take(name)?;

        let mut unenrolled = 0;
        for student in self.students.iter_mut() {
            if student.forget_course(name) {
                unenrolled += 1;
            }
        }

        tracing::info!(
            "Course {} removed; {} students unenrolled",
            name,
            unenrolled
        );
        Ok(course)
    }

    pub fn student_average(&self, id: StudentId) -> Result<f64> {
        self.students.get(id)?.average_grade(&self.courses)
    }

    /// `Ok(None)` when the course exists but has no grades yet.
    pub fn course_average(&self, name: &str) -> Result<Option<f64>> {
        Ok(self.courses.get(name)?.average_grade())
    }

    pub fn overall_average(&self) -> Result<f64> {
        self.students.overall_average(&self.courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SgaeaError;

    fn address() -> Address {
        Address::new("Calle Primavera", "12", "2B", "18012", "Granada", "Granada").unwrap()
    }

    #[test]
    fn test_ana_in_math_scenario() {
        let mut academy = Academy::new();
        let ana = academy.add_student("Ana", 22, address()).unwrap();
        academy.add_course("Math").unwrap();
        academy.enroll(ana, "Math").unwrap();
        academy.assign_grade(ana, "Math", 8.5).unwrap();
        academy.assign_grade(ana, "Math", 9.0).unwrap();

        assert_eq!(format!("{:.2}", academy.course_average("Math").unwrap().unwrap()), "8.75");
        assert_eq!(format!("{:.2}", academy.student_average(ana).unwrap()), "8.75");
    }

    #[test]
    fn test_enroll_unknown_course_changes_nothing() {
        let mut academy = Academy::new();
        let ana = academy.add_student("Ana", 22, address()).unwrap();
        let before = academy.clone();

        assert!(matches!(
            academy.enroll(ana, "Chemistry"),
            Err(SgaeaError::NotFoundError { .. })
        ));
        assert!(matches!(
            academy.enroll(StudentId(99), "Chemistry"),
            Err(SgaeaError::NotFoundError { .. })
        ));
        assert_eq!(academy, before);
    }

    #[test]
    fn test_assign_grade_to_unknown_student() {
        let mut academy = Academy::new();
        academy.add_course("Math").unwrap();
        assert!(matches!(
            academy.assign_grade(StudentId(3), "Math", 5.0),
            Err(SgaeaError::NotFoundError { .. })
        ));
    }

    #[test]
    fn test_remove_course_clears_students() {
        let mut academy = Academy::new();
        let ana = academy.add_student("Ana", 22, address()).unwrap();
        let luis = academy.add_student("Luis", 21, address()).unwrap();
        academy.add_course("Math").unwrap();
        academy.add_course("Physics").unwrap();
        for id in [ana, luis] {
            academy.enroll(id, "Math").unwrap();
        }
        academy.enroll(ana, "Physics").unwrap();

        let removed = academy.remove_course("Math").unwrap();
        assert_eq!(removed.student_count(), 2);

        assert!(academy.course("Math").is_err());
        assert!(!academy.student(ana).unwrap().is_enrolled_in("Math"));
        assert!(academy.student(ana).unwrap().is_enrolled_in("Physics"));
        assert_eq!(academy.student(luis).unwrap().enrollment_count(), 0);

        // The name is free again and the new course starts empty.
        academy.add_course("Math").unwrap();
        assert_eq!(academy.course("Math").unwrap().student_count(), 0);
        academy.enroll(luis, "Math").unwrap();
    }

    #[test]
    fn test_remove_unknown_course() {
        let mut academy = Academy::new();
        assert!(matches!(
            academy.remove_course("Math"),
            Err(SgaeaError::NotFoundError { .. })
        ));
    }

    #[test]
    fn test_blank_student_name_is_rejected() {
        let mut academy = Academy::new();
        assert!(academy.add_student("   ", 20, address()).is_err());
        assert_eq!(academy.students().next_id(), StudentId(1));
    }
}

use crate::core::academy::Academy;
use crate::core::seed::demo_academy;
use crate::domain::{Address, Identity, NameLookup, StudentId};
use crate::utils::error::{Result, SgaeaError};
use clap::Subcommand;
use serde::{Deserialize, Serialize};

/// One user-facing action against the academy.
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Register a new student
    AddStudent {
        name: String,
        age: u32,
        #[arg(long)]
        street: String,
        #[arg(long)]
        number: String,
        #[arg(long, default_value = "")]
        floor: String,
        #[arg(long)]
        postal_code: String,
        #[arg(long)]
        province: String,
        #[arg(long)]
        locality: String,
    },
    /// Delete a student by id and unenroll them everywhere
    RemoveStudent { id: u32 },
    /// Show every student with their courses
    ListStudents,
    /// Create a course
    AddCourse { name: String },
    /// Delete a course and unenroll every student in it
    RemoveCourse { name: String },
    /// Show every course with its enrollment count
    ListCourses,
    /// Enroll a student (id or name) in a course
    Enroll { student: String, course: String },
    /// Unenroll a student (id or name) from a course
    Unenroll { student: String, course: String },
    /// Record a grade between 0 and 10
    Grade {
        student: String,
        course: String,
        #[arg(allow_negative_numbers = true)]
        grade: f64,
    },
    /// Average of a student's grades across all courses
    StudentAverage { student: String },
    /// Average of all grades in a course
    CourseAverage { course: String },
    /// Average of the per-student averages
    OverallAverage,
    /// Search students by name
    Find { pattern: String },
    /// Replace the current data with the demo data set
    Seed {
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::AddStudent { .. }
                | Command::RemoveStudent { .. }
                | Command::AddCourse { .. }
                | Command::RemoveCourse { .. }
                | Command::Enroll { .. }
                | Command::Unenroll { .. }
                | Command::Grade { .. }
                | Command::Seed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub message: String,
    pub mutated: bool,
}

impl CommandOutcome {
    fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mutated: true,
        }
    }

    fn report(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mutated: false,
        }
    }
}

/// Resolves a numeric id or a name pattern to a single student.
pub fn resolve_student(academy: &Academy, reference: &str) -> Result<StudentId> {
    if let Ok(id) = reference.trim().parse::<u32>() {
        return academy.student(StudentId(id)).map(|student| student.id());
    }

    match academy.find_student(reference) {
        NameLookup::Unique(student) => Ok(student.id()),
        NameLookup::NotFound => Err(SgaeaError::not_found("Student", reference)),
        NameLookup::Ambiguous(matches) => {
            let names: Vec<String> = matches
                .iter()
                .map(|s| format!("{} (id {})", s.name(), s.id()))
                .collect();
            Err(SgaeaError::validation(
                "student",
                format!(
                    "'{}' matches several students: {}; refine the name or use the id",
                    reference,
                    names.join(", ")
                ),
            ))
        }
    }
}

pub fn execute(academy: &mut Academy, command: &Command) -> Result<CommandOutcome> {
    tracing::debug!("Executing {:?}", command);

    match command {
        Command::AddStudent {
            name,
            age,
            street,
            number,
            floor,
            postal_code,
            province,
            locality,
        } => {
            let address = Address::new(
                street.as_str(),
                number.as_str(),
                floor.as_str(),
                postal_code.as_str(),
                province.as_str(),
                locality.as_str(),
            )?;
            let id = academy.add_student(name, *age, address)?;
            Ok(CommandOutcome::changed(format!(
                "Student {} added with id {}",
                name.trim(),
                id
            )))
        }
        Command::RemoveStudent { id } => {
            let student = academy.remove_student(StudentId(*id))?;
            Ok(CommandOutcome::changed(format!(
                "Student {} (id {}) removed and unenrolled from all courses",
                student.name(),
                id
            )))
        }
        Command::ListStudents => {
            if academy.students().is_empty() {
                return Err(SgaeaError::no_data("no students registered"));
            }
            let mut lines = Vec::new();
            for student in academy.students().iter() {
                lines.push(student.to_string());
                for record in student.enrollments() {
                    lines.push(format!("  - {} (since {})", record.course, record.enrolled_on));
                }
            }
            Ok(CommandOutcome::report(lines.join("\n")))
        }
        Command::AddCourse { name } => {
            let course = academy.add_course(name)?;
            Ok(CommandOutcome::changed(format!("Course {} added", course.name())))
        }
        Command::RemoveCourse { name } => {
            let course = academy.remove_course(name)?;
            Ok(CommandOutcome::changed(format!(
                "Course {} removed; {} students unenrolled",
                course.name(),
                course.student_count()
            )))
        }
        Command::ListCourses => {
            if academy.courses().is_empty() {
                return Err(SgaeaError::no_data("no courses created"));
            }
            let lines: Vec<String> = academy.courses().iter().map(|c| c.to_string()).collect();
            Ok(CommandOutcome::report(lines.join("\n")))
        }
        Command::Enroll { student, course } => {
            let id = resolve_student(academy, student)?;
            academy.enroll(id, course)?;
            Ok(CommandOutcome::changed(format!(
                "Student {} enrolled in {}",
                academy.student(id)?.name(),
                course
            )))
        }
        Command::Unenroll { student, course } => {
            let id = resolve_student(academy, student)?;
            academy.unenroll(id, course)?;
            Ok(CommandOutcome::changed(format!(
                "Student {} unenrolled from {}",
                academy.student(id)?.name(),
                course
            )))
        }
        Command::Grade {
            student,
            course,
            grade,
        } => {
            let id = resolve_student(academy, student)?;
            academy.assign_grade(id, course, *grade)?;
            Ok(CommandOutcome::changed(format!(
                "Grade {} assigned to {} in {}",
                grade,
                academy.student(id)?.name(),
                course
            )))
        }
        Command::StudentAverage { student } => {
            let id = resolve_student(academy, student)?;
            let average = academy.student_average(id)?;
            Ok(CommandOutcome::report(format!(
                "Average for {}: {:.2}",
                academy.student(id)?.name(),
                average
            )))
        }
        Command::CourseAverage { course } => {
            let message = match academy.course_average(course)? {
                Some(average) => format!("Average for {}: {:.2}", course, average),
                None => format!("No grades available for {}", course),
            };
            Ok(CommandOutcome::report(message))
        }
        Command::OverallAverage => {
            let average = academy.overall_average()?;
            Ok(CommandOutcome::report(format!(
                "Overall average of all students: {:.2}",
                average
            )))
        }
        Command::Find { pattern } => match academy.find_student(pattern) {
            NameLookup::Unique(student) => Ok(CommandOutcome::report(student.to_string())),
            NameLookup::NotFound => Ok(CommandOutcome::report(format!(
                "No students match '{}'",
                pattern
            ))),
            NameLookup::Ambiguous(matches) => {
                let mut lines = vec![format!(
                    "{} students match '{}', refine the pattern:",
                    matches.len(),
                    pattern
                )];
                lines.extend(matches.iter().map(|s| format!("  {}", s)));
                Ok(CommandOutcome::report(lines.join("\n")))
            }
        },
        Command::Seed { force } => {
            if !*force && (!academy.students().is_empty() || !academy.courses().is_empty()) {
                return Err(SgaeaError::validation(
                    "seed",
                    "data already exists; pass --force to replace it",
                ));
            }
            *academy = demo_academy()?;
            Ok(CommandOutcome::changed("Demo data loaded"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Academy {
        demo_academy().unwrap()
    }

    #[test]
    fn test_resolve_student_by_id_and_name() {
        let academy = seeded();
        assert_eq!(resolve_student(&academy, "2").unwrap(), StudentId(2));
        assert_eq!(resolve_student(&academy, "carl").unwrap(), StudentId(3));
        assert!(matches!(
            resolve_student(&academy, "9"),
            Err(SgaeaError::NotFoundError { .. })
        ));
        // Daniel and Ana both contain "an".
        assert!(matches!(
            resolve_student(&academy, "an"),
            Err(SgaeaError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_grade_command() {
        let mut academy = seeded();
        let outcome = execute(
            &mut academy,
            &Command::Grade {
                student: "Ana".to_string(),
                course: "Literatura".to_string(),
                grade: 10.0,
            },
        )
        .unwrap();
        assert!(outcome.mutated);
        assert_eq!(academy.course("Literatura").unwrap().grades_for(StudentId(2)), &[9.0, 10.0]);
    }

    #[test]
    fn test_failed_command_leaves_state() {
        let mut academy = seeded();
        let before = academy.clone();
        let result = execute(
            &mut academy,
            &Command::Grade {
                student: "Ana".to_string(),
                course: "Literatura".to_string(),
                grade: 11.0,
            },
        );
        assert!(matches!(result, Err(SgaeaError::ValidationError { .. })));
        assert_eq!(academy, before);
    }

    #[test]
    fn test_report_commands_do_not_mutate() {
        let mut academy = seeded();
        for command in [
            Command::ListStudents,
            Command::ListCourses,
            Command::OverallAverage,
            Command::Find {
                pattern: "an".to_string(),
            },
        ] {
            let outcome = execute(&mut academy, &command).unwrap();
            assert!(!outcome.mutated);
            assert!(!command.is_mutating());
        }
    }

    #[test]
    fn test_find_ambiguous_lists_matches() {
        let mut academy = seeded();
        let outcome = execute(
            &mut academy,
            &Command::Find {
                pattern: "an".to_string(),
            },
        )
        .unwrap();
        assert!(outcome.message.starts_with("2 students match 'an'"));
    }

    #[test]
    fn test_course_average_without_grades() {
        let mut academy = seeded();
        execute(&mut academy, &Command::AddCourse { name: "Química".to_string() }).unwrap();
        let outcome = execute(
            &mut academy,
            &Command::CourseAverage {
                course: "Química".to_string(),
            },
        )
        .unwrap();
        assert_eq!(outcome.message, "No grades available for Química");
    }

    #[test]
    fn test_seed_requires_force_when_data_exists() {
        let mut academy = seeded();
        assert!(execute(&mut academy, &Command::Seed { force: false }).is_err());
        assert!(execute(&mut academy, &Command::Seed { force: true }).is_ok());

        let mut empty = Academy::new();
        execute(&mut empty, &Command::Seed { force: false }).unwrap();
        assert_eq!(empty.students().len(), 3);
    }
}

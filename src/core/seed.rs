use crate::core::academy::Academy;
use crate::domain::Address;
use crate::utils::error::Result;

/// Three students, three courses, two enrollments each and one grade per enrollment.
pub fn demo_academy() -> Result<Academy> {
    let mut academy = Academy::new();

    let daniel = academy.add_student(
        "Daniel",
        20,
        Address::new("Calle Primavera", "15", "2A", "28010", "Madrid", "Madrid")?,
    )?;
    let ana = academy.add_student(
        "Ana",
        22,
        Address::new("Calle Invierno", "22", "3B", "18012", "Granada", "Granada")?,
    )?;
    let carlos = academy.add_student(
        "Carlos",
        21,
        Address::new("Calle Verano", "5", "1C", "41013", "Sevilla", "Sevilla")?,
    )?;

    for course in ["Matemáticas", "Física", "Literatura"] {
        academy.add_course(course)?;
    }

    let plan = [
        (daniel, "Matemáticas", 8.0),
        (daniel, "Física", 7.0),
        (ana, "Matemáticas", 9.0),
        (ana, "Literatura", 9.0),
        (carlos, "Física", 6.0),
        (carlos, "Literatura", 7.0),
    ];
    for (student, course, grade) in plan {
        academy.enroll(student, course)?;
        academy.assign_grade(student, course, grade)?;
    }

    tracing::info!("Demo data loaded");
    Ok(academy)
}

// Domain layer: entities and ports. No I/O.

pub mod address;
pub mod course;
pub mod model;
pub mod person;
pub mod ports;
pub mod student;

pub use address::Address;
pub use course::{Course, GradeRecord};
pub use model::{EnrollmentRecord, Identity, Membership, NameLookup, StudentId};
pub use person::Person;
pub use student::Student;

pub mod commands;

pub use commands::{execute, resolve_student, Command, CommandOutcome};

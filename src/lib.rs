#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    academy::Academy, catalog::CourseCatalog, registry::StudentRegistry,
    repository::SnapshotRepository, snapshot::AcademySnapshot,
};
pub use domain::{Address, Course, EnrollmentRecord, Identity, NameLookup, Student, StudentId};
pub use utils::error::{Result, SgaeaError};

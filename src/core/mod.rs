pub mod academy;
pub mod catalog;
pub mod registry;
pub mod repository;
pub mod seed;
pub mod snapshot;

pub use crate::domain::ports::{ConfigProvider, CourseLookup, Storage};
pub use crate::utils::error::Result;

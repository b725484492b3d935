//! A console menu for keeping track of projects stored in SQLite.

pub mod app;
pub mod core;

pub use crate::app::ProjectsApp;
pub use crate::core::ProjectError;
pub use crate::core::db::{Hours, NewProject, Project, ProjectDb, ProjectEdit, ProjectRepository};

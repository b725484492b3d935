#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projects for tests
#[allow(unused_imports)]
pub use projects::{
    Hours, NewProject, Project, ProjectDb, ProjectError, ProjectRepository, ProjectsApp,
};

use std::fmt;

use crate::core::db::Hours;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// Field values entered during an update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProjectEdit {
    pub name: Option<String>,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl Project {
    pub fn merged(&self, edit: ProjectEdit) -> Project {
        Project {
            id: self.id,
            name: edit.name.unwrap_or_else(|| self.name.clone()),
            estimated_hours: edit.estimated_hours.or(self.estimated_hours),
            actual_hours: edit.actual_hours.or(self.actual_hours),
            difficulty: edit.difficulty.or(self.difficulty),
            notes: edit.notes.or_else(|| self.notes.clone()),
        }
    }
}

/// Renders an absent value as `none`.
pub(crate) fn or_none<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n   ID={}", self.id)?;
        write!(f, "\n   name={}", self.name)?;
        write!(f, "\n   estimated hours={}", or_none(&self.estimated_hours))?;
        write!(f, "\n   actual hours={}", or_none(&self.actual_hours))?;
        write!(f, "\n   difficulty={}", or_none(&self.difficulty))?;
        write!(f, "\n   notes={}", or_none(&self.notes))
    }
}

pub trait ProjectRepository {
    fn add_project(&self, project: &NewProject) -> impl Future<Output = anyhow::Result<Project>>;
    fn get_projects(&self) -> impl Future<Output = anyhow::Result<Vec<Project>>>;
    /// Fails with [`ProjectError::NotFound`](crate::core::ProjectError::NotFound) when absent.
    fn get_project_by_id(&self, id: i64) -> impl Future<Output = anyhow::Result<Project>>;
    /// Replaces every field of the stored row with the same id.
    fn update_project(&self, project: &Project) -> impl Future<Output = anyhow::Result<()>>;
    fn delete_project(&self, id: i64) -> impl Future<Output = anyhow::Result<()>>;
}

mod model;
mod project;
mod state;

use std::path::Path;

use state::DbState;

use crate::core::ProjectError;

pub use model::Hours;
pub use project::{NewProject, Project, ProjectEdit, ProjectRepository};
pub(crate) use project::or_none;

const PROJECT_COLUMNS: &str =
    "project_id, project_name, estimated_hours, actual_hours, difficulty, notes";

#[derive(Debug)]
pub struct ProjectDb {
    state: DbState,
}

impl ProjectDb {
    pub async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: DbState::new(db_file).await?,
        })
    }

    /// Checkpoint and close the pool. Further queries on this handle fail.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRecord {
    project_id: i64,
    project_name: String,
    estimated_hours: Option<i64>,
    actual_hours: Option<i64>,
    difficulty: Option<i64>,
    notes: Option<String>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = anyhow::Error;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        Ok(Project {
            id: record.project_id,
            name: record.project_name,
            estimated_hours: record.estimated_hours.map(Hours::from),
            actual_hours: record.actual_hours.map(Hours::from),
            difficulty: record.difficulty.map(i32::try_from).transpose()?,
            notes: record.notes,
        })
    }
}

impl ProjectRepository for ProjectDb {
    async fn add_project(&self, project: &NewProject) -> anyhow::Result<Project> {
        let mut conn = self.state.conn().await?;
        let record = sqlx::query_as::<_, ProjectRecord>(&format!(
            r#"INSERT INTO project
            (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PROJECT_COLUMNS}"#
        ))
        .bind(project.name.as_str())
        .bind(project.estimated_hours.map(i64::from))
        .bind(project.actual_hours.map(i64::from))
        .bind(project.difficulty)
        .bind(project.notes.as_deref())
        .fetch_one(&mut *conn)
        .await?;
        tracing::debug!(id = record.project_id, "inserted project");
        Project::try_from(record)
    }

    async fn get_projects(&self) -> anyhow::Result<Vec<Project>> {
        let mut conn = self.state.conn().await?;
        sqlx::query_as::<_, ProjectRecord>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM project ORDER BY project_id ASC"
        ))
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(Project::try_from)
        .collect()
    }

    async fn get_project_by_id(&self, id: i64) -> anyhow::Result<Project> {
        let mut conn = self.state.conn().await?;
        if let Some(record) = sqlx::query_as::<_, ProjectRecord>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM project WHERE project_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        {
            Project::try_from(record)
        } else {
            Err(ProjectError::NotFound(id).into())
        }
    }

    async fn update_project(&self, project: &Project) -> anyhow::Result<()> {
        let mut conn = self.state.conn().await?;
        let result = sqlx::query(
            r#"UPDATE project SET
                project_name = $1,
                estimated_hours = $2,
                actual_hours = $3,
                difficulty = $4,
                notes = $5
            WHERE project_id = $6"#,
        )
        .bind(project.name.as_str())
        .bind(project.estimated_hours.map(i64::from))
        .bind(project.actual_hours.map(i64::from))
        .bind(project.difficulty)
        .bind(project.notes.as_deref())
        .bind(project.id)
        .execute(&mut *conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(ProjectError::NotFound(project.id).into());
        }
        tracing::debug!(id = project.id, "updated project");
        Ok(())
    }

    async fn delete_project(&self, id: i64) -> anyhow::Result<()> {
        let mut conn = self.state.conn().await?;
        let result = sqlx::query("DELETE FROM project WHERE project_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ProjectError::NotFound(id).into());
        }
        tracing::debug!(id, "deleted project");
        Ok(())
    }
}

//! The interactive project menu.
//!
//! [`ProjectsApp`] owns the store, the console streams and the current
//! selection. Each pass of [`ProjectsApp::run`] prints the menu, reads one
//! selection and runs its handler. Handler failures are reported and the loop
//! carries on; only blank input at the menu (or a broken console) ends it.

pub mod input;

use std::io::{BufRead, Write};

use input::Prompter;

use crate::core::{
    ProjectError,
    db::{NewProject, Project, ProjectEdit, ProjectRepository, or_none},
};

const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Select,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Operation(Operation),
    Invalid(i32),
}

impl From<Option<i32>> for Selection {
    fn from(input: Option<i32>) -> Self {
        match input {
            None => Selection::Exit,
            Some(1) => Selection::Operation(Operation::Create),
            Some(2) => Selection::Operation(Operation::List),
            Some(3) => Selection::Operation(Operation::Select),
            Some(4) => Selection::Operation(Operation::Update),
            Some(5) => Selection::Operation(Operation::Delete),
            Some(other) => Selection::Invalid(other),
        }
    }
}

/// Whether the loop should read another selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct ProjectsApp<S, R, W> {
    store: S,
    prompter: Prompter<R, W>,
    current: Option<Project>,
}

impl<S: ProjectRepository, R: BufRead, W: Write> ProjectsApp<S, R, W> {
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
            current: None,
        }
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, W) {
        (self.store, self.prompter.into_output())
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.step().await {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => self.report(err)?,
            }
        }
    }

    /// Print the menu, read one selection and run it.
    pub async fn step(&mut self) -> anyhow::Result<Flow> {
        self.print_operations()?;
        match Selection::from(self.prompter.int("Enter a menu selection")?) {
            Selection::Exit => {
                writeln!(self.prompter.output(), "Exiting the menu. Goodbye.")?;
                return Ok(Flow::Exit);
            }
            Selection::Operation(Operation::Create) => self.create_project().await?,
            Selection::Operation(Operation::List) => self.list_projects().await?,
            Selection::Operation(Operation::Select) => self.select_project().await?,
            Selection::Operation(Operation::Update) => self.update_project_details().await?,
            Selection::Operation(Operation::Delete) => self.delete_project().await?,
            Selection::Invalid(n) => writeln!(
                self.prompter.output(),
                "\n{n} is not a valid selection, please try again."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: anyhow::Error) -> anyhow::Result<()> {
        if err.downcast_ref::<std::io::Error>().is_some() {
            return Err(err.context("console I/O failed"));
        }
        tracing::error!("{err:?}");

        let out = self.prompter.output();
        match err.downcast_ref::<ProjectError>() {
            Some(known) => writeln!(out, "\nError: {known}")?,
            None => writeln!(out, "\nError: unexpected failure: {err:#}")?,
        }
        Ok(())
    }

    fn print_operations(&mut self) -> std::io::Result<()> {
        let out = self.prompter.output();
        writeln!(
            out,
            "\nThese are the available selections. Press the Enter key to quit:"
        )?;
        for line in OPERATIONS {
            writeln!(out, "   {line}")?;
        }

        match &self.current {
            None => writeln!(out, "\nYou are not working with a project."),
            Some(project) => writeln!(out, "\nYou are working with project: {project}"),
        }
    }

    async fn create_project(&mut self) -> anyhow::Result<()> {
        let name = self
            .prompter
            .text("Enter the project name")?
            .ok_or(ProjectError::MissingValue("project name"))?;
        let estimated_hours = self
            .prompter
            .decimal("Enter the estimated length of project, in hours")?;
        let actual_hours = self
            .prompter
            .decimal("Enter the actual length of the project, in hours")?;
        let difficulty = self.prompter.int("Enter the difficulty level (1-5)")?;
        let notes = self.prompter.text("Enter any projects notes you may have")?;

        let project = NewProject {
            name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        };
        let db_project = self.store.add_project(&project).await?;
        writeln!(
            self.prompter.output(),
            "You have successfully created project: {db_project}"
        )?;
        Ok(())
    }

    async fn list_projects(&mut self) -> anyhow::Result<()> {
        let projects = self.store.get_projects().await?;
        let out = self.prompter.output();
        writeln!(out, "\nProjects:")?;
        for project in &projects {
            writeln!(out, "   {}: {}", project.id, project.name)?;
        }
        Ok(())
    }

    async fn select_project(&mut self) -> anyhow::Result<()> {
        self.list_projects().await?;
        let id = self.prompter.int("Enter a project ID to select project")?;

        self.current = None;
        let id = id.ok_or(ProjectError::MissingValue("project ID"))?;
        self.current = Some(self.store.get_project_by_id(i64::from(id)).await?);
        Ok(())
    }

    async fn update_project_details(&mut self) -> anyhow::Result<()> {
        let Some(current) = self.current.clone() else {
            writeln!(self.prompter.output(), "\nPlease select a project.")?;
            return Ok(());
        };

        let edit = ProjectEdit {
            name: self
                .prompter
                .text(&format!("Enter the project name [{}]", current.name))?,
            estimated_hours: self.prompter.decimal(&format!(
                "Enter the new estimated hours of the project [{}]",
                or_none(&current.estimated_hours)
            ))?,
            actual_hours: self.prompter.decimal(&format!(
                "Enter the new actual hours of the project [{}]",
                or_none(&current.actual_hours)
            ))?,
            difficulty: self.prompter.int(&format!(
                "Enter the new difficulty (1-5) [{}]",
                or_none(&current.difficulty)
            ))?,
            notes: self
                .prompter
                .text(&format!("Update notes? [{}]", or_none(&current.notes)))?,
        };

        self.store.update_project(&current.merged(edit)).await?;
        self.current = Some(self.store.get_project_by_id(current.id).await?);
        Ok(())
    }

    async fn delete_project(&mut self) -> anyhow::Result<()> {
        self.list_projects().await?;
        let id = self
            .prompter
            .int("Enter the ID for the project to delete")?
            .ok_or(ProjectError::MissingValue("project ID"))?;
        let id = i64::from(id);

        self.store.delete_project(id).await?;
        writeln!(
            self.prompter.output(),
            "project {id} was successfully deleted."
        )?;

        if self.current.as_ref().is_some_and(|p| p.id == id) {
            self.current = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_selection_exits() {
        assert_eq!(Selection::from(None), Selection::Exit);
    }

    #[test]
    fn one_through_five_map_to_operations() {
        assert_eq!(
            Selection::from(Some(1)),
            Selection::Operation(Operation::Create)
        );
        assert_eq!(
            Selection::from(Some(5)),
            Selection::Operation(Operation::Delete)
        );
    }

    #[test]
    fn other_numbers_are_invalid() {
        assert_eq!(Selection::from(Some(0)), Selection::Invalid(0));
        assert_eq!(Selection::from(Some(9)), Selection::Invalid(9));
        assert_eq!(Selection::from(Some(-1)), Selection::Invalid(-1));
    }
}

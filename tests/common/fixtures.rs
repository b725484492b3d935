use std::io::Cursor;

use projects::{Hours, NewProject, ProjectDb, ProjectsApp};

/// Creates a ProjectDb backed by a file in a fresh temp directory.
/// Returns both the store and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (ProjectDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("projects.db");
    let db = ProjectDb::new(&path)
        .await
        .expect("Failed to create test database");
    (db, dir)
}

/// Creates a NewProject with the given name and test values for the rest.
pub fn make_new_project(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        estimated_hours: Some(hours("10.00")),
        actual_hours: Some(hours("0.00")),
        difficulty: Some(3),
        notes: Some("intro".to_string()),
    }
}

pub fn hours(text: &str) -> Hours {
    text.parse().expect("Invalid test hours")
}

pub type ScriptedApp = ProjectsApp<ProjectDb, Cursor<Vec<u8>>, Vec<u8>>;

/// Builds an app whose console input is `lines`, one entry per line.
pub fn scripted_app(db: ProjectDb, lines: &[&str]) -> ScriptedApp {
    let mut script = lines.join("\n");
    script.push('\n');
    ProjectsApp::new(db, Cursor::new(script.into_bytes()), Vec::new())
}

/// Everything the app wrote to its console.
pub fn console_output(app: ScriptedApp) -> (ProjectDb, String) {
    let (db, output) = app.into_parts();
    (
        db,
        String::from_utf8(output).expect("Console output is not UTF-8"),
    )
}

//! Map a working directory to the reminders list it belongs to.
//!
//! ```text
//! <project_dir>/                  -> no list
//! <project_dir>/my_project        -> "my_project"
//! <project_dir>/my_project/a/b/c  -> "my_project"
//! /somewhere/else                 -> no list
//! ```
//!
//! Pure path arithmetic: nothing touches the filesystem. Components of the
//! project root compare case-insensitively; the returned segment keeps its
//! case.

use std::path::{Component, Path};

use crate::types::ListName;

/// The list for `working_dir`: its first path segment below `project_dir`.
///
/// Returns `None` when `working_dir` is `project_dir` itself or lies outside it.
pub fn list_name_from_path(project_dir: &Path, working_dir: &Path) -> Option<ListName> {
    let mut project = significant(project_dir);
    let mut working = significant(working_dir);

    loop {
        match (project.next(), working.next()) {
            (Some(p), Some(w)) => {
                if !same_component(p, w) {
                    return None;
                }
            }
            // Working dir sits above the project root.
            (Some(_), None) => return None,
            (None, Some(Component::Normal(segment))) => {
                return Some(ListName::from(segment.to_string_lossy().into_owned()));
            }
            // `..` directly below the root escapes it.
            (None, Some(_)) => return None,
            (None, None) => return None,
        }
    }
}

/// [`list_name_from_path`] for the process's current directory.
pub fn list_name_from_cwd(project_dir: &Path) -> Option<ListName> {
    let cwd = std::env::current_dir().ok()?;
    list_name_from_path(project_dir, &cwd)
}

fn significant(path: &Path) -> impl Iterator<Item = Component<'_>> {
    path.components().filter(|c| !matches!(c, Component::CurDir))
}

fn same_component(a: Component<'_>, b: Component<'_>) -> bool {
    let a = a.as_os_str().to_string_lossy();
    let b = b.as_os_str().to_string_lossy();
    a == b || a.to_lowercase() == b.to_lowercase()
}

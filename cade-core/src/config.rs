//! Where projects live and which reminders executable to drive.
//!
//! Precedence for the project root: explicit value (CLI flag), then
//! `$CADE_PROJECT_DIR`, then `<home>/code`. The tool comes from
//! `$CADE_REMINDERS_BIN` or defaults to `reminders` on `PATH`.
//!
//! Like the registry helpers elsewhere, [`Config::load_at`] takes every input
//! explicitly for tests; [`Config::load`] reads the real environment.

use std::path::{Path, PathBuf};

use crate::error::TaskError;
use crate::resolve;
use crate::types::ListName;

pub const DEFAULT_TOOL: &str = "reminders";
pub const DEFAULT_PROJECT_SUBDIR: &str = "code";
pub const PROJECT_DIR_ENV: &str = "CADE_PROJECT_DIR";
pub const TOOL_ENV: &str = "CADE_REMINDERS_BIN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root whose immediate children name reminders lists.
    pub project_dir: PathBuf,
    /// Bare executable name or path of the reminders tool.
    pub tool: String,
}

impl Config {
    /// Build from explicit inputs; `None` falls back to the defaults under `home`.
    pub fn load_at(home: &Path, project_dir: Option<PathBuf>, tool: Option<String>) -> Self {
        Self {
            project_dir: project_dir.unwrap_or_else(|| default_project_dir(home)),
            tool: tool.unwrap_or_else(|| DEFAULT_TOOL.to_string()),
        }
    }

    /// Resolve from `project_dir` (usually a CLI flag) and the environment.
    ///
    /// The home directory is only consulted when no override is present.
    pub fn load(project_dir: Option<PathBuf>) -> Result<Self, TaskError> {
        let project_dir = project_dir.or_else(|| env_value(PROJECT_DIR_ENV).map(PathBuf::from));
        let tool = env_value(TOOL_ENV);
        let project_dir = match project_dir {
            Some(dir) => dir,
            None => default_project_dir(&home()?),
        };
        Ok(Self {
            project_dir,
            tool: tool.unwrap_or_else(|| DEFAULT_TOOL.to_string()),
        })
    }

    /// The list `working_dir` maps to under this project root.
    pub fn list_for(&self, working_dir: &Path) -> Option<ListName> {
        resolve::list_name_from_path(&self.project_dir, working_dir)
    }

    /// The list the current directory maps to.
    pub fn list_for_cwd(&self) -> Option<ListName> {
        resolve::list_name_from_cwd(&self.project_dir)
    }
}

/// `<home>/code`
pub fn default_project_dir(home: &Path) -> PathBuf {
    home.join(DEFAULT_PROJECT_SUBDIR)
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn home() -> Result<PathBuf, TaskError> {
    dirs::home_dir().ok_or(TaskError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_derive_from_home() {
        let config = Config::load_at(Path::new("/home/bill"), None, None);
        assert_eq!(config.project_dir, PathBuf::from("/home/bill/code"));
        assert_eq!(config.tool, "reminders");
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::load_at(
            Path::new("/home/bill"),
            Some(PathBuf::from("/srv/work")),
            Some("/opt/bin/reminders".to_string()),
        );
        assert_eq!(config.project_dir, PathBuf::from("/srv/work"));
        assert_eq!(config.tool, "/opt/bin/reminders");
    }

    #[test]
    fn list_for_uses_project_dir() {
        let config = Config::load_at(Path::new("/home/bill"), None, None);
        assert_eq!(
            config.list_for(Path::new("/home/bill/code/cade/src")),
            Some(ListName::from("cade"))
        );
        assert_eq!(config.list_for(Path::new("/home/bill")), None);
    }

    #[test]
    fn home_not_found_error_message() {
        assert!(TaskError::HomeNotFound.to_string().contains("home directory"));
    }
}

//! Error types for cade-core.

use thiserror::Error;

use crate::types::ListName;

/// The external tool exited nonzero.
///
/// Every text field is lossily decoded UTF-8 with trailing whitespace removed.
/// `output` is stdout followed by stderr, the text list-not-found detection
/// searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{command}' failed ({return_code}):\n{stderr}")]
pub struct CommandFailure {
    /// Exit code, or `-1` when the process was terminated by a signal.
    pub return_code: i32,
    /// The executed argument vector joined with spaces.
    pub command: String,
    pub output: String,
    pub stdout: String,
    pub stderr: String,
}

/// All errors that can arise from task operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The executable could not be located; nothing was spawned.
    #[error("executable '{name}' not found on PATH")]
    ToolNotFound { name: String },

    /// An empty argument vector was passed for execution.
    #[error("no command given")]
    EmptyCommand,

    /// The OS refused to start a program that was found.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external process exited nonzero.
    #[error(transparent)]
    Command(#[from] CommandFailure),

    /// The tool reported that no list with this name exists.
    #[error("List '{name}' not found")]
    ListNotFound {
        name: ListName,
        #[source]
        source: CommandFailure,
    },

    /// An output decoding mode other than `raw` or `structured` was requested.
    #[error("invalid output mode '{0}'; expected 'raw' or 'structured'")]
    InvalidMode(String),

    /// Structured output was not a JSON document.
    #[error("failed to parse JSON output of '{command}': {source}")]
    Json {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but not the shape the operation expects.
    #[error("unexpected output from the reminders tool: {0}")]
    UnexpectedOutput(String),

    /// A task object carried a key with no corresponding task attribute.
    #[error("unrecognized task field '{field}'")]
    UnknownField { field: String },

    /// A task without a display index cannot be completed.
    #[error("task '{title}' has no display index")]
    MissingIndex { title: String },

    /// `dirs::home_dir()` returned `None` and no project directory was given.
    #[error("cannot determine home directory; set $HOME or CADE_PROJECT_DIR")]
    HomeNotFound,
}

impl TaskError {
    /// `true` for the list-not-found classification.
    pub fn is_list_not_found(&self) -> bool {
        matches!(self, TaskError::ListNotFound { .. })
    }
}

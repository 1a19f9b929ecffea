//! Synchronous invocation of external programs.
//!
//! Every call resolves its program on `PATH`, spawns it without a shell,
//! waits for exit and captures stdout/stderr. A zero exit decodes stdout per
//! [`OutputMode`]; anything else becomes a [`CommandFailure`].

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{CommandFailure, TaskError};

/// Flag appended to a structured-mode invocation so the tool emits JSON.
pub const JSON_FORMAT_ARGS: [&str; 2] = ["--format", "json"];

// ---------------------------------------------------------------------------
// Modes and results
// ---------------------------------------------------------------------------

/// How stdout of a successful invocation is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One record per line.
    #[default]
    Raw,
    /// A single JSON document.
    Structured,
}

impl FromStr for OutputMode {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "structured" | "json" => Ok(Self::Structured),
            _ => Err(TaskError::InvalidMode(s.to_owned())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Raw => write!(f, "raw"),
            OutputMode::Structured => write!(f, "structured"),
        }
    }
}

/// Decoded stdout of a successful invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Lines(Vec<String>),
    Json(Value),
}

impl CommandOutput {
    /// First line of raw output, or an empty string.
    pub fn first_line(&self) -> String {
        match self {
            CommandOutput::Lines(lines) => lines.first().cloned().unwrap_or_default(),
            CommandOutput::Json(value) => value.to_string(),
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            CommandOutput::Lines(lines) => lines,
            CommandOutput::Json(value) => vec![value.to_string()],
        }
    }

    pub fn into_json(self) -> Result<Value, TaskError> {
        match self {
            CommandOutput::Json(value) => Ok(value),
            CommandOutput::Lines(_) => Err(TaskError::UnexpectedOutput(
                "expected JSON output, got raw lines".to_string(),
            )),
        }
    }
}

/// Outcome of one successful (exit code zero) invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// The argument vector executed, resolved program first.
    pub command: Vec<String>,
    pub output: CommandOutput,
    pub return_code: i32,
}

// ---------------------------------------------------------------------------
// Executor
// ---------------------------------------------------------------------------

/// Runs sub-commands of one external tool, injecting its path as argv[0].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executor {
    tool: String,
}

impl Executor {
    /// `tool` is a bare name searched on `PATH`, or a path used as-is.
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// Run `<tool> <args...>`, resolving the tool afresh on every call.
    pub fn run(&self, args: &[&str], mode: OutputMode) -> Result<CommandResult, TaskError> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.tool.clone());
        argv.extend(args.iter().map(|a| (*a).to_owned()));
        run_command(&argv, mode)
    }
}

/// Run `argv` as given: argv[0] is the program, resolved on `PATH` when it
/// carries no directory separator.
pub fn run_command(argv: &[String], mode: OutputMode) -> Result<CommandResult, TaskError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(TaskError::EmptyCommand);
    };
    let resolved = locate(program)?;

    let mut command: Vec<String> = Vec::with_capacity(argv.len() + JSON_FORMAT_ARGS.len());
    command.push(resolved.display().to_string());
    command.extend(args.iter().cloned());
    if mode == OutputMode::Structured {
        command.extend(JSON_FORMAT_ARGS.iter().map(|a| (*a).to_owned()));
    }

    tracing::debug!(program = %resolved.display(), args = ?&command[1..], %mode, "spawning");
    let output = Command::new(&resolved)
        .args(&command[1..])
        .output()
        .map_err(|source| TaskError::Spawn {
            program: resolved.display().to_string(),
            source,
        })?;

    // Signal-terminated processes carry no exit code.
    let return_code = output.status.code().unwrap_or(-1);
    tracing::debug!(return_code, "process exited");

    if !output.status.success() {
        return Err(failure(&command, return_code, &output.stdout, &output.stderr).into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let decoded = match mode {
        OutputMode::Raw => CommandOutput::Lines(stdout.lines().map(str::to_owned).collect()),
        OutputMode::Structured => {
            let trimmed = stdout.trim();
            if trimmed.is_empty() {
                CommandOutput::Json(Value::Array(Vec::new()))
            } else {
                let value = serde_json::from_str(trimmed).map_err(|source| TaskError::Json {
                    command: command.join(" "),
                    source,
                })?;
                CommandOutput::Json(value)
            }
        }
    };

    Ok(CommandResult {
        command,
        output: decoded,
        return_code,
    })
}

fn failure(command: &[String], return_code: i32, stdout: &[u8], stderr: &[u8]) -> CommandFailure {
    let stdout = String::from_utf8_lossy(stdout).trim_end().to_string();
    let stderr = String::from_utf8_lossy(stderr).trim_end().to_string();
    let output = [stdout.as_str(), stderr.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    CommandFailure {
        return_code,
        command: command.join(" "),
        output,
        stdout,
        stderr,
    }
}

// ---------------------------------------------------------------------------
// Program lookup
// ---------------------------------------------------------------------------

/// Resolve `program` against the process's `PATH`.
pub fn locate(program: &str) -> Result<PathBuf, TaskError> {
    locate_in(program, std::env::var_os("PATH").as_deref())
}

/// Resolve `program` against an explicit search path (`PATH` syntax).
///
/// A program containing a directory separator is checked as-is.
pub fn locate_in(program: &str, search_path: Option<&OsStr>) -> Result<PathBuf, TaskError> {
    let not_found = || TaskError::ToolNotFound {
        name: program.to_owned(),
    };
    if program.is_empty() {
        return Err(not_found());
    }

    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return if is_executable(candidate) {
            Ok(candidate.to_path_buf())
        } else {
            Err(not_found())
        };
    }

    let search_path = search_path.ok_or_else(not_found)?;
    std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(program))
        .find(|path| is_executable(path))
        .ok_or_else(not_found)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

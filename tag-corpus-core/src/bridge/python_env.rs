//! Python interpreter discovery
//!
//! The toolkits live in a Python environment. An explicit interpreter wins;
//! otherwise a project virtualenv, then an active conda environment, then
//! whatever `python3`/`python` is on `PATH`.

use crate::error::{Result, TagError};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable naming the interpreter to use
pub const PYTHON_ENV_VAR: &str = "TAG_CORPUS_PYTHON";

/// Where the interpreter was found
#[derive(Debug, Clone, PartialEq)]
pub enum PythonEnvironment {
    /// Given on the command line, in a config file, or via `TAG_CORPUS_PYTHON`
    Explicit(PathBuf),
    /// Virtual environment under the working directory
    Venv(PathBuf),
    /// Active conda environment
    Conda {
        /// Environment name
        name: String,
        /// Interpreter inside the environment
        python: PathBuf,
    },
    /// Interpreter on `PATH`
    System(PathBuf),
}

impl PythonEnvironment {
    /// Interpreter to execute
    pub fn program(&self) -> &Path {
        match self {
            PythonEnvironment::Explicit(path) => path,
            PythonEnvironment::Venv(path) => path,
            PythonEnvironment::Conda { python, .. } => python,
            PythonEnvironment::System(path) => path,
        }
    }

    /// Command that runs the interpreter
    pub fn command(&self) -> Command {
        Command::new(self.program())
    }
}

impl fmt::Display for PythonEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PythonEnvironment::Explicit(path) => write!(f, "{}", path.display()),
            PythonEnvironment::Venv(path) => write!(f, "{} (venv)", path.display()),
            PythonEnvironment::Conda { name, python } => {
                write!(f, "{} (conda: {name})", python.display())
            }
            PythonEnvironment::System(path) => write!(f, "{} (system)", path.display()),
        }
    }
}

/// Find the interpreter hosting the toolkits
pub fn find_python(explicit: Option<&Path>) -> Result<PythonEnvironment> {
    if let Some(path) = explicit {
        return Ok(PythonEnvironment::Explicit(path.to_path_buf()));
    }

    if let Some(path) = env::var_os(PYTHON_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PythonEnvironment::Explicit(PathBuf::from(path)));
    }

    let cwd = env::current_dir()?;
    let found = check_venv(&cwd)
        .or_else(check_conda)
        .or_else(check_system_python);

    match found {
        Some(python) => {
            log::debug!("Using Python interpreter {python}");
            Ok(python)
        }
        None => Err(TagError::Bridge(format!(
            "no Python interpreter found; install Python 3 with spaCy or stanza, \
             or set {PYTHON_ENV_VAR}"
        ))),
    }
}

/// Look for a virtualenv interpreter under `base_path`
fn check_venv(base_path: &Path) -> Option<PythonEnvironment> {
    let venv_paths = [
        ".venv/bin/python",
        ".venv/Scripts/python.exe",
        "venv/bin/python",
        "venv/Scripts/python.exe",
    ];

    venv_paths
        .iter()
        .map(|relative| base_path.join(relative))
        .find(|path| path.exists())
        .map(PythonEnvironment::Venv)
}

/// Use the active conda environment, if any
fn check_conda() -> Option<PythonEnvironment> {
    let name = env::var("CONDA_DEFAULT_ENV").ok().filter(|n| !n.is_empty())?;
    let prefix = PathBuf::from(env::var_os("CONDA_PREFIX")?);

    let python = if cfg!(windows) {
        prefix.join("python.exe")
    } else {
        prefix.join("bin").join("python")
    };

    python
        .exists()
        .then_some(PythonEnvironment::Conda { name, python })
}

/// First interpreter on `PATH` that answers `--version`
fn check_system_python() -> Option<PythonEnvironment> {
    let python_commands: &[&str] = if cfg!(windows) {
        &["python.exe", "python3.exe", "py.exe"]
    } else {
        &["python3", "python"]
    };

    python_commands
        .iter()
        .find(|cmd| {
            Command::new(cmd)
                .arg("--version")
                .output()
                .map(|output| output.status.success())
                .unwrap_or(false)
        })
        .map(|cmd| PythonEnvironment::System(PathBuf::from(cmd)))
}

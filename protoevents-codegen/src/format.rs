//! External formatter invocation.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::FormatterCommand;
use crate::error::FormatError;

impl FormatterCommand {
    /// Runs the formatter on `path` and waits for it to finish.
    ///
    /// # Errors
    /// Returns `FormatError::Spawn` if the program cannot be started and
    /// `FormatError::Failed` if it exits unsuccessfully.
    pub fn run(&self, path: &Path) -> Result<(), FormatError> {
        tracing::debug!("Running {} {:?} on {}", self.program, self.args, path.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                program: self.program.clone(),
                path: path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

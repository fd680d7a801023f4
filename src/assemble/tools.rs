//! External converter and merge tools.
//!
//! Both tools run as blocking child processes with no timeout.

use crate::config::{DEFAULT_INKSCAPE, DEFAULT_PDFUNITE};
use crate::error::{ToolError, ToolErrorKind};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Converts an SVG page into a PDF page.
pub trait Converter {
    fn convert(&self, svg: &Path, pdf: &Path) -> Result<(), ToolError>;
}

/// Concatenates PDF documents into one.
pub trait Merger {
    fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ToolError>;
}

/// Run `cmd` to completion, mapping spawn errors and non-zero exits to [`ToolError`].
pub fn run_command(mut cmd: Command) -> Result<(), ToolError> {
    let command = describe(&cmd);
    debug!("Running: {}", command);

    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ToolError {
            command: command.clone(),
            kind: ToolErrorKind::Spawn(e),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ToolError {
            command,
            kind: ToolErrorKind::ExitStatus {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            },
        })
    }
}

/// Render a command as a single shell-like line for diagnostics.
fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG to PDF conversion through Inkscape.
#[derive(Debug, Clone)]
pub struct InkscapeConverter {
    /// Program to run.
    pub program: String,
    /// Use the 0.9x command line (`-f <svg> -A <pdf>`).
    pub legacy: bool,
}

impl Default for InkscapeConverter {
    fn default() -> Self {
        Self {
            program: DEFAULT_INKSCAPE.to_string(),
            legacy: false,
        }
    }
}

impl InkscapeConverter {
    /// Build the command line for one conversion.
    pub fn command(&self, svg: &Path, pdf: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        if self.legacy {
            cmd.arg("-f").arg(svg).arg("-A").arg(pdf);
        } else {
            cmd.arg(svg)
                .arg("--export-type=pdf")
                .arg(format!("--export-filename={}", pdf.display()));
        }
        cmd
    }
}

impl Converter for InkscapeConverter {
    fn convert(&self, svg: &Path, pdf: &Path) -> Result<(), ToolError> {
        run_command(self.command(svg, pdf))
    }
}

/// PDF concatenation through poppler's `pdfunite`.
#[derive(Debug, Clone)]
pub struct PdfUnite {
    /// Program to run.
    pub program: String,
}

impl Default for PdfUnite {
    fn default() -> Self {
        Self {
            program: DEFAULT_PDFUNITE.to_string(),
        }
    }
}

impl PdfUnite {
    /// Build the command line for one merge.
    pub fn command(&self, inputs: &[PathBuf], output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(inputs).arg(output);
        cmd
    }
}

impl Merger for PdfUnite {
    fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ToolError> {
        run_command(self.command(inputs, output))
    }
}

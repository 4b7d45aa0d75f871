use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use snafu::ResultExt;

use crate::analyzer::{EntityAnalyzer, EntityDescriptor, ParseOutput};
use crate::error::tool_error::{
    CommandFailedSnafu, EmptyContextSnafu, MalformedOutputSnafu, SpawnSnafu, TempFileSnafu,
};
use crate::error::ToolError;

/// Entity analysis implemented by shelling out to the `doxyllm-it` CLI.
pub struct DoxyllmTool {
    pub program: PathBuf,
}

impl DoxyllmTool {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Whether the configured tool binary is present on disk.
    pub fn exists(&self) -> bool {
        self.program.is_file()
    }

    /// Run the tool and return stdout on success, or an error carrying stderr.
    fn run_tool(&self, args: &[&str]) -> Result<String, ToolError> {
        let program = self.program.display().to_string();
        tracing::debug!("running {program} {}", args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .context(SpawnSnafu {
                program: program.clone(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            CommandFailedSnafu {
                command: format!("{program} {}", args.first().copied().unwrap_or_default()),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .fail()
        }
    }
}

impl EntityAnalyzer for DoxyllmTool {
    fn list_entities(&self, path: &Path) -> Result<Vec<EntityDescriptor>, ToolError> {
        let path_str = path.to_string_lossy();
        let stdout = self.run_tool(&["parse", "-f", "json", &path_str])?;
        let parsed: ParseOutput = serde_json::from_str(&stdout).context(MalformedOutputSnafu {
            path: path_str.to_string(),
        })?;
        Ok(parsed.entities)
    }

    fn context(&self, path: &Path, entity: &str) -> Result<String, ToolError> {
        let path_str = path.to_string_lossy();
        let stdout = self.run_tool(&["extract", "-p", "-s", &path_str, entity])?;
        if stdout.trim().is_empty() {
            return EmptyContextSnafu { entity }.fail();
        }
        Ok(stdout)
    }

    fn apply(&self, path: &Path, entity: &str, comment: &str) -> Result<(), ToolError> {
        // Removed when `tmp` drops, on every return path.
        let mut tmp = tempfile::Builder::new()
            .prefix("doxgen-")
            .suffix(".txt")
            .tempfile()
            .context(TempFileSnafu)?;
        tmp.write_all(comment.as_bytes()).context(TempFileSnafu)?;
        tmp.flush().context(TempFileSnafu)?;

        let path_str = path.to_string_lossy();
        let tmp_str = tmp.path().to_string_lossy().to_string();
        self.run_tool(&["update", "-i", "-b", &path_str, entity, &tmp_str])?;
        Ok(())
    }

    fn format(&self, path: &Path) -> Result<String, ToolError> {
        let path_str = path.to_string_lossy();
        self.run_tool(&["format", "-c", &path_str])
    }
}

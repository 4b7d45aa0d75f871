use serde::{Deserialize, Serialize};

use crate::analyzer::DoxyllmTool;
use crate::config::DoxgenConfig;
use crate::git::GitOps;
use crate::provider::LlmProvider;

/// Status of a single doctor check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single doctor check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorCheck {
    pub name: String,
    pub status: DoctorStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_hint: Option<String>,
}

/// Full doctor report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorReport {
    pub version: String,
    pub checks: Vec<DoctorCheck>,
    pub overall: DoctorStatus,
}

impl DoctorReport {
    pub fn has_failures(&self) -> bool {
        self.overall == DoctorStatus::Fail
    }
}

/// Run all doctor checks and produce a report.
pub fn run_doctor(
    config: &DoxgenConfig,
    tool: &DoxyllmTool,
    provider: &dyn LlmProvider,
    git_ops: &dyn GitOps,
) -> DoctorReport {
    let checks = vec![
        check_version(),
        check_tool(tool),
        check_endpoint(config, provider),
        check_repository(git_ops),
        check_config(config),
    ];

    let overall = if checks.iter().any(|c| c.status == DoctorStatus::Fail) {
        DoctorStatus::Fail
    } else if checks.iter().any(|c| c.status == DoctorStatus::Warn) {
        DoctorStatus::Warn
    } else {
        DoctorStatus::Pass
    };

    DoctorReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
        overall,
    }
}

/// Check: report binary version (always passes).
fn check_version() -> DoctorCheck {
    DoctorCheck {
        name: "version".to_string(),
        status: DoctorStatus::Pass,
        message: format!("doxgen {}", env!("CARGO_PKG_VERSION")),
        fix_hint: None,
    }
}

fn check_tool(tool: &DoxyllmTool) -> DoctorCheck {
    if tool.exists() {
        DoctorCheck {
            name: "tool".to_string(),
            status: DoctorStatus::Pass,
            message: format!("found {}", tool.program.display()),
            fix_hint: None,
        }
    } else {
        DoctorCheck {
            name: "tool".to_string(),
            status: DoctorStatus::Fail,
            message: format!("doxyllm-it not found at {}", tool.program.display()),
            fix_hint: Some(
                "Build it with `go build -o doxyllm-it .` or pass --doxyllm-tool.".to_string(),
            ),
        }
    }
}

fn check_endpoint(config: &DoxgenConfig, provider: &dyn LlmProvider) -> DoctorCheck {
    match provider.check_health() {
        Ok(()) => DoctorCheck {
            name: "endpoint".to_string(),
            status: DoctorStatus::Pass,
            message: format!("{} reachable at {}", provider.name(), config.endpoint),
            fix_hint: None,
        },
        Err(e) => DoctorCheck {
            name: "endpoint".to_string(),
            status: DoctorStatus::Fail,
            message: format!("cannot reach {}: {e}", config.endpoint),
            fix_hint: Some("Ensure Ollama is running, or set OLLAMA_URL.".to_string()),
        },
    }
}

/// Check: inside a git work tree. Only a warning since commits can be disabled.
fn check_repository(git_ops: &dyn GitOps) -> DoctorCheck {
    if git_ops.is_repository() {
        DoctorCheck {
            name: "git".to_string(),
            status: DoctorStatus::Pass,
            message: "inside a git work tree".to_string(),
            fix_hint: None,
        }
    } else {
        DoctorCheck {
            name: "git".to_string(),
            status: DoctorStatus::Warn,
            message: "not a git repository".to_string(),
            fix_hint: Some("Run with --no-commit, or `git init` first.".to_string()),
        }
    }
}

fn check_config(config: &DoxgenConfig) -> DoctorCheck {
    DoctorCheck {
        name: "config".to_string(),
        status: DoctorStatus::Pass,
        message: format!(
            "model {}, branch {}, extensions {}",
            config.model,
            config.branch,
            config.extensions.join(",")
        ),
        fix_hint: None,
    }
}

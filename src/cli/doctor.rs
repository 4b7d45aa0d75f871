use snafu::ResultExt;

use crate::analyzer::DoxyllmTool;
use crate::cli::ConfigArgs;
use crate::config::load_config;
use crate::doctor::{run_doctor, DoctorStatus};
use crate::error::doxgen_error::JsonSnafu;
use crate::error::Result;
use crate::git::CliOps;
use crate::provider::OllamaProvider;

/// Run `doxgen doctor`.
pub fn run(json: bool, args: ConfigArgs) -> Result<()> {
    let config = load_config(args.into_overrides())?;
    let tool = DoxyllmTool::new(config.tool.clone());
    let provider = OllamaProvider::new(&config);
    let git_ops = CliOps::new(config.root.clone());

    let report = run_doctor(&config, &tool, &provider, &git_ops);

    if json {
        let output = serde_json::to_string_pretty(&report).context(JsonSnafu)?;
        println!("{output}");
    } else {
        println!("doxgen doctor");
        for check in &report.checks {
            let icon = match check.status {
                DoctorStatus::Pass => "pass",
                DoctorStatus::Warn => "warn",
                DoctorStatus::Fail => "FAIL",
            };
            println!("  [{icon}] {}: {}", check.name, check.message);
            if let Some(ref hint) = check.fix_hint {
                println!("         {hint}");
            }
        }
        println!();
        let overall = match report.overall {
            DoctorStatus::Pass => "all checks passed",
            DoctorStatus::Warn => "some warnings",
            DoctorStatus::Fail => "some checks failed",
        };
        println!("Overall: {overall}");
    }

    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

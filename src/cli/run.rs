use crate::analyzer::DoxyllmTool;
use crate::cli::RunArgs;
use crate::config::{load_config, DoxgenConfig};
use crate::error::doxgen_error::ToolNotFoundSnafu;
use crate::error::Result;
use crate::git::CliOps;
use crate::pipeline::run::{preview, run as run_pipeline, RunDeps, RunResult};
use crate::provider::OllamaProvider;

/// Run `doxgen run`.
pub fn run(args: RunArgs) -> Result<()> {
    let config = load_config(args.into_overrides())?;

    let analyzer = DoxyllmTool::new(config.tool.clone());
    if !analyzer.exists() {
        eprintln!("Please build the tool first: go build -o doxyllm-it .");
        return ToolNotFoundSnafu {
            path: config.tool.clone(),
        }
        .fail();
    }
    let provider = OllamaProvider::new(&config);
    let git = CliOps::new(config.root.clone());
    let deps = RunDeps {
        analyzer: &analyzer,
        provider: &provider,
        git: &git,
    };

    if config.dry_run {
        let listing = preview(&deps, &config)?;
        for (path, entities) in &listing {
            println!("{} ({} undocumented)", path.display(), entities.len());
            for entity in entities {
                println!("  {entity}");
            }
        }
        return Ok(());
    }

    let result = run_pipeline(&deps, &config)?;
    print_summary(&result, &config);
    Ok(())
}

fn print_summary(result: &RunResult, config: &DoxgenConfig) {
    if result.files_updated.is_empty() {
        println!("All files already have complete documentation");
        return;
    }

    println!();
    println!("Summary:");
    println!("  Files processed: {}", result.files_processed);
    println!("  Files updated: {}", result.files_updated.len());
    println!("  Total entities documented: {}", result.total_documented);

    if result.committed {
        println!("Documentation complete! Check branch '{}'", config.branch);
    } else if config.commit {
        println!("Documentation complete, but the commit failed. Review and commit manually.");
    } else {
        println!("Documentation complete! Review changes before committing.");
    }
}

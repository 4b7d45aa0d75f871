use std::path::PathBuf;

use serde::Serialize;
use snafu::ResultExt;

use crate::analyzer::{list_undocumented, EntityAnalyzer, EntityRef};
use crate::config::DoxgenConfig;
use crate::error::doxgen_error::{
    BranchSetupSnafu, EndpointUnreachableSnafu, NoCandidateFilesSnafu,
};
use crate::error::Result;
use crate::git::{GitOps, COMMIT_MESSAGE};
use crate::pipeline::discover::{discover_files, filter_explicit, FileFilter};
use crate::pipeline::{entity_cap, process_file, FileResult};
use crate::provider::LlmProvider;

/// Aggregate outcome of a documentation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunResult {
    pub files_processed: usize,
    /// Files with at least one applied comment, in processing order.
    pub files_updated: Vec<PathBuf>,
    pub total_documented: usize,
    pub files: Vec<FileResult>,
    pub committed: bool,
}

/// The external collaborators a run drives.
pub struct RunDeps<'a> {
    pub analyzer: &'a dyn EntityAnalyzer,
    pub provider: &'a dyn LlmProvider,
    pub git: &'a dyn GitOps,
}

/// Candidate files for a run: the explicit list if given, otherwise a walk of `root`.
pub fn candidate_files(config: &DoxgenConfig) -> Result<Vec<PathBuf>> {
    let filter = FileFilter::new(&config.extensions, &config.excluded_dirs);
    let files = match &config.files {
        Some(explicit) => filter_explicit(&config.root, explicit, &filter),
        None => discover_files(&config.root, &filter),
    };
    if files.is_empty() {
        return NoCandidateFilesSnafu {
            root: config.root.clone(),
        }
        .fail();
    }
    tracing::info!("found {} C++ header files", files.len());
    Ok(files)
}

/// Probe the generation endpoint. Must pass before any file is touched.
pub fn check_endpoint(provider: &dyn LlmProvider, config: &DoxgenConfig) -> Result<()> {
    provider.check_health().context(EndpointUnreachableSnafu {
        endpoint: config.endpoint.clone(),
    })?;
    tracing::info!("connected to {} at {}", provider.name(), config.endpoint);
    tracing::info!("using model {}", provider.model());
    Ok(())
}

/// Run the documentation pipeline over every candidate file.
///
/// Setup failures (endpoint, branch, no candidates) abort before any file is
/// modified. Per-file and per-entity failures are logged and skipped.
pub fn run(deps: &RunDeps<'_>, config: &DoxgenConfig) -> Result<RunResult> {
    check_endpoint(deps.provider, config)?;

    if config.commit {
        deps.git
            .ensure_branch(&config.branch)
            .context(BranchSetupSnafu {
                branch: config.branch.clone(),
            })?;
    }

    let files = candidate_files(config)?;

    let mut result = RunResult::default();
    for path in &files {
        let file_result = process_file(deps.analyzer, deps.provider, path, config.max_entities);
        result.files_processed += 1;
        if file_result.updated() {
            result.total_documented += file_result.succeeded;
            result.files_updated.push(path.clone());
        }
        result.files.push(file_result);
    }

    if config.format {
        format_files(deps.analyzer, &result.files_updated);
    }

    if config.commit && !result.files_updated.is_empty() {
        result.committed = commit_changes(deps.git);
    }

    Ok(result)
}

/// Reformat each file in place. A failure leaves that file as it is.
pub fn format_files(analyzer: &dyn EntityAnalyzer, files: &[PathBuf]) {
    for path in files {
        let formatted = match analyzer.format(path) {
            Ok(formatted) => formatted,
            Err(e) => {
                tracing::warn!(
                    "could not format {} (clang-format not available?): {e}",
                    path.display()
                );
                continue;
            }
        };
        if formatted.trim().is_empty() {
            tracing::warn!("formatter returned nothing for {}, leaving it as is", path.display());
            continue;
        }
        match std::fs::write(path, formatted) {
            Ok(()) => tracing::info!("formatted {}", path.display()),
            Err(e) => tracing::warn!("could not write formatted {}: {e}", path.display()),
        }
    }
}

fn commit_changes(git: &dyn GitOps) -> bool {
    match git.add_all().and_then(|()| git.commit(COMMIT_MESSAGE)) {
        Ok(()) => {
            tracing::info!("changes committed to git");
            true
        }
        Err(e) => {
            tracing::error!("failed to commit changes: {e}");
            false
        }
    }
}

/// Undocumented entities per candidate file, without generating or writing anything.
pub fn preview(
    deps: &RunDeps<'_>,
    config: &DoxgenConfig,
) -> Result<Vec<(PathBuf, Vec<EntityRef>)>> {
    check_endpoint(deps.provider, config)?;
    let files = candidate_files(config)?;

    Ok(files
        .into_iter()
        .map(|path| {
            let mut entities = list_undocumented(deps.analyzer, &path);
            if let Some(max) = entity_cap(config.max_entities) {
                entities.truncate(max);
            }
            (path, entities)
        })
        .collect())
}

pub mod discover;
pub mod run;

pub use discover::{discover_files, filter_explicit, FileFilter};
pub use run::{run, RunResult};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analyzer::{list_undocumented, EntityAnalyzer};
use crate::generate::generate;
use crate::provider::LlmProvider;

/// Outcome of documenting one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub path: PathBuf,
    /// Undocumented entities reported by the analyzer, before any cap.
    pub found: usize,
    pub attempted: usize,
    pub succeeded: usize,
}

impl FileResult {
    fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            found: 0,
            attempted: 0,
            succeeded: 0,
        }
    }

    /// A file counts as updated once at least one comment was applied.
    pub fn updated(&self) -> bool {
        self.succeeded > 0
    }
}

/// The effective per-file cap. Zero is treated as unset.
pub(crate) fn entity_cap(max_entities: Option<usize>) -> Option<usize> {
    max_entities.filter(|&max| max > 0)
}

/// Document the undocumented entities of one file, one at a time.
///
/// Entities are taken in analyzer order and capped at `max_entities`; a cap of 0
/// means no cap. A failure at any step for one entity is logged and the next
/// entity is tried.
pub fn process_file(
    analyzer: &dyn EntityAnalyzer,
    provider: &dyn LlmProvider,
    path: &Path,
    max_entities: Option<usize>,
) -> FileResult {
    tracing::info!("processing {}", path.display());

    let mut entities = list_undocumented(analyzer, path);
    let mut result = FileResult::empty(path);
    if entities.is_empty() {
        tracing::info!("all entities already documented");
        return result;
    }

    result.found = entities.len();
    tracing::info!("found {} undocumented entities", entities.len());
    if let Some(max) = entity_cap(max_entities) {
        entities.truncate(max);
        tracing::info!("processing first {} entities", entities.len());
    }
    result.attempted = entities.len();

    let total = entities.len();
    for (i, entity) in entities.iter().enumerate() {
        tracing::info!("({}/{total}) documenting {entity}", i + 1);

        let context = match analyzer.context(path, entity) {
            Ok(context) => context,
            Err(e) => {
                tracing::warn!("failed to extract context for {entity}: {e}");
                continue;
            }
        };

        let Some(comment) = generate(provider, &context, entity) else {
            tracing::warn!("failed to generate comment for {entity}");
            continue;
        };

        match analyzer.apply(path, entity, &comment) {
            Ok(()) => {
                tracing::info!("updated {entity}");
                result.succeeded += 1;
            }
            Err(e) => tracing::warn!("failed to update {entity} in {}: {e}", path.display()),
        }
    }

    tracing::info!(
        "updated {}/{} entities in {}",
        result.succeeded,
        result.attempted,
        path.display()
    );
    result
}

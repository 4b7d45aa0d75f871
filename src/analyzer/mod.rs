pub mod doxyllm;

pub use doxyllm::DoxyllmTool;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Tool-defined path/name of one documentable construct, e.g. `ns::Widget::resize`.
pub type EntityRef = String;

/// One entity as reported by the analyzer's structured parse output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDescriptor {
    pub full_name: EntityRef,
    #[serde(default)]
    pub has_comment: bool,
}

/// Top-level shape of `parse -f json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseOutput {
    #[serde(default)]
    pub entities: Vec<EntityDescriptor>,
}

/// Structural analysis capability consumed by the pipeline. `DoxyllmTool` implements it
/// by shelling out; tests use in-memory fakes.
pub trait EntityAnalyzer {
    /// All entities found in a file, documented or not.
    fn list_entities(&self, path: &Path) -> Result<Vec<EntityDescriptor>, ToolError>;

    /// Source excerpt plus structural framing for one entity.
    fn context(&self, path: &Path, entity: &str) -> Result<String, ToolError>;

    /// Splice `comment` into `path` as the documentation of `entity`.
    fn apply(&self, path: &Path, entity: &str, comment: &str) -> Result<(), ToolError>;

    /// Reformatted content of `path`. Does not write the file.
    fn format(&self, path: &Path) -> Result<String, ToolError>;
}

/// Names of the entities in `path` that lack a comment, in analyzer order.
///
/// Fails soft: an analyzer error is logged and yields an empty list, so the
/// file is skipped rather than aborting the run.
pub fn list_undocumented(analyzer: &dyn EntityAnalyzer, path: &Path) -> Vec<EntityRef> {
    match analyzer.list_entities(path) {
        Ok(entities) => entities
            .into_iter()
            .filter(|e| !e.has_comment)
            .map(|e| e.full_name)
            .collect(),
        Err(e) => {
            tracing::warn!("error parsing {}: {e}", path.display());
            Vec::new()
        }
    }
}

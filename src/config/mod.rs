pub mod file_config;

use std::path::PathBuf;

use snafu::ResultExt;

use crate::error::doxgen_error::ConfigSnafu;
use crate::error::Result;
use file_config::FileConfig;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "codellama:13b";
pub const DEFAULT_BRANCH: &str = "doxygen-docs";
pub const DEFAULT_TOOL: &str = "./doxyllm-it";

/// Header extensions picked up by discovery.
pub const DEFAULT_EXTENSIONS: &[&str] = &["hpp", "h", "hxx"];

/// Directory names whose contents are never documented.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] =
    &["build", "vendor", "third_party", ".git", "node_modules"];

/// Run configuration, assembled once from defaults + doxgen.toml + environment + flags.
#[derive(Debug, Clone, PartialEq)]
pub struct DoxgenConfig {
    pub endpoint: String,
    pub model: String,
    pub branch: String,
    pub root: PathBuf,
    /// Explicit file list; bypasses directory discovery.
    pub files: Option<Vec<PathBuf>>,
    pub max_entities: Option<usize>,
    pub commit: bool,
    pub format: bool,
    pub dry_run: bool,
    pub tool: PathBuf,
    pub extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
    pub temperature: f64,
    pub top_p: f64,
    pub num_ctx: u32,
    pub timeout_secs: u64,
}

impl Default for DoxgenConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            root: PathBuf::from("."),
            files: None,
            max_entities: None,
            commit: true,
            format: true,
            dry_run: false,
            tool: PathBuf::from(DEFAULT_TOOL),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            temperature: 0.1,
            top_p: 0.9,
            num_ctx: 4096,
            timeout_secs: 120,
        }
    }
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub files: Option<Vec<PathBuf>>,
    pub max_entities: Option<usize>,
    pub no_commit: bool,
    pub no_format: bool,
    pub dry_run: bool,
    pub tool: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub branch: Option<String>,
}

impl DoxgenConfig {
    /// Liveness URL derived from the generation endpoint.
    pub fn tags_url(&self) -> String {
        self.endpoint.replace("/api/generate", "/api/tags")
    }

    /// Apply the config layers in precedence order: file, environment, flags.
    pub fn resolve(
        overrides: ConfigOverrides,
        file: Option<FileConfig>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = DoxgenConfig::default();

        if let Some(file) = file {
            if let Some(v) = file.endpoint {
                config.endpoint = v;
            }
            if let Some(v) = file.model {
                config.model = v;
            }
            if let Some(v) = file.branch {
                config.branch = v;
            }
            if let Some(v) = file.tool {
                config.tool = PathBuf::from(v);
            }
            if file.max_entities.is_some() {
                config.max_entities = file.max_entities;
            }
            if let Some(v) = file.extensions {
                config.extensions = v
                    .into_iter()
                    .map(|e| e.trim_start_matches('.').to_string())
                    .collect();
            }
            if let Some(v) = file.excluded_dirs {
                config.excluded_dirs = v;
            }
            if let Some(generation) = file.generation {
                config.temperature = generation.temperature.unwrap_or(config.temperature);
                config.top_p = generation.top_p.unwrap_or(config.top_p);
                config.num_ctx = generation.num_ctx.unwrap_or(config.num_ctx);
                config.timeout_secs = generation.timeout_secs.unwrap_or(config.timeout_secs);
            }
        }

        let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());
        if let Some(v) = non_empty("OLLAMA_URL") {
            config.endpoint = v;
        }
        if let Some(v) = non_empty("MODEL_NAME") {
            config.model = v;
        }
        if let Some(v) = non_empty("BRANCH_NAME") {
            config.branch = v;
        }

        if let Some(v) = overrides.root {
            config.root = v;
        }
        if overrides.files.is_some() {
            config.files = overrides.files;
        }
        if overrides.max_entities.is_some() {
            config.max_entities = overrides.max_entities;
        }
        if let Some(v) = overrides.tool {
            config.tool = v;
        }
        if let Some(v) = overrides.endpoint {
            config.endpoint = v;
        }
        if let Some(v) = overrides.model {
            config.model = v;
        }
        if let Some(v) = overrides.branch {
            config.branch = v;
        }
        config.commit = !overrides.no_commit;
        config.format = !overrides.no_format;
        config.dry_run = overrides.dry_run;

        config
    }
}

/// Load config for a run: reads `--config` or `<root>/doxgen.toml`, then the process environment.
pub fn load_config(overrides: ConfigOverrides) -> Result<DoxgenConfig> {
    let path = match &overrides.config_file {
        Some(path) => path.clone(),
        None => overrides
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(file_config::FILE_NAME),
    };
    let file = FileConfig::load(&path).context(ConfigSnafu)?;
    if file.is_some() {
        tracing::debug!("loaded config from {}", path.display());
    }
    Ok(DoxgenConfig::resolve(overrides, file, |key| {
        std::env::var(key).ok()
    }))
}

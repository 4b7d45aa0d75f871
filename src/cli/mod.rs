pub mod doctor;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Parser)]
#[command(
    name = "doxgen",
    version,
    about = "Add Doxygen comments to undocumented C++ entities using a local LLM",
    after_help = "Environment Variables:
  OLLAMA_URL     Ollama API URL (default: http://localhost:11434/api/generate)
  MODEL_NAME     Model to use (default: codellama:13b)
  BRANCH_NAME    Git branch name (default: doxygen-docs)"
)]
pub struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate and apply comments for every undocumented entity
    Run(RunArgs),

    /// Check the analyzer tool, the generation endpoint and git
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Options shared by every command that needs a resolved config.
#[derive(Args, Clone, Default)]
pub struct ConfigArgs {
    /// Directory to process C++ files in
    #[arg(long = "dir")]
    pub root: Option<PathBuf>,

    /// Path to the DoxLLM-IT tool (default: ./doxyllm-it)
    #[arg(long = "doxyllm-tool")]
    pub tool: Option<PathBuf>,

    /// Generation endpoint, overrides OLLAMA_URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model name, overrides MODEL_NAME
    #[arg(long)]
    pub model: Option<String>,

    /// Config file (default: <dir>/doxgen.toml)
    #[arg(long = "config")]
    pub config_file: Option<PathBuf>,
}

#[derive(Args, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Specific files to process (overrides --dir discovery)
    #[arg(long, num_args = 1..)]
    pub files: Option<Vec<PathBuf>>,

    /// Maximum entities to process per file
    #[arg(long)]
    pub max_entities: Option<usize>,

    /// Skip creating the branch and committing changes
    #[arg(long)]
    pub no_commit: bool,

    /// Skip formatting updated files
    #[arg(long)]
    pub no_format: bool,

    /// List undocumented entities without generating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Branch to commit to, overrides BRANCH_NAME
    #[arg(long)]
    pub branch: Option<String>,
}

impl ConfigArgs {
    pub fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config_file,
            root: self.root,
            tool: self.tool,
            endpoint: self.endpoint,
            model: self.model,
            ..Default::default()
        }
    }
}

impl RunArgs {
    pub fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            files: self.files,
            max_entities: self.max_entities,
            no_commit: self.no_commit,
            no_format: self.no_format,
            dry_run: self.dry_run,
            branch: self.branch,
            ..self.config.into_overrides()
        }
    }
}

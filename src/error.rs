use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(doxgen_error))]
pub enum DoxgenError {
    #[snafu(display("doxyllm-it tool not found at: {}", path.display()))]
    ToolNotFound {
        path: PathBuf,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("cannot connect to generation endpoint at {endpoint}: {source}"))]
    EndpointUnreachable {
        endpoint: String,
        source: ProviderError,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to set up branch {branch}: {source}"))]
    BranchSetup {
        branch: String,
        source: GitError,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("no C++ header files found under {}", root.display()))]
    NoCandidateFiles {
        root: PathBuf,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("config error: {source}"))]
    Config {
        source: ConfigError,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("JSON error: {source}"))]
    Json {
        source: serde_json::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(tool_error))]
pub enum ToolError {
    #[snafu(display("failed to run {program}: {source}"))]
    Spawn {
        program: String,
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("`{command}` exited with {status}: {stderr}"))]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("malformed parse output for {path}: {source}"))]
    MalformedOutput {
        path: String,
        source: serde_json::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("no context returned for {entity}"))]
    EmptyContext {
        entity: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("temporary file error: {source}"))]
    TempFile {
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(provider_error))]
pub enum ProviderError {
    #[snafu(display("request timeout"))]
    Timeout {
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to parse response: {message}"))]
    ParseResponse {
        message: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("HTTP error: {source}"))]
    Http {
        source: Box<ureq::Transport>,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(git_error))]
pub enum GitError {
    #[snafu(display("git command failed: {message}"))]
    CommandFailed {
        message: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(config_error))]
pub enum ConfigError {
    #[snafu(display("failed to read {path}: {source}"))]
    ReadFile {
        path: String,
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("invalid config file {path}: {source}"))]
    Parse {
        path: String,
        source: toml::de::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

pub type Result<T, E = DoxgenError> = std::result::Result<T, E>;

pub mod ollama;

pub use ollama::OllamaProvider;

use crate::error::ProviderError;

/// Text-generation backend. MVP implements Ollama only.
pub trait LlmProvider {
    /// Send one prompt and return the raw generated text.
    fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Liveness probe, run once before any file is touched.
    fn check_health(&self) -> Result<(), ProviderError>;

    fn name(&self) -> &str;
    fn model(&self) -> &str;
}

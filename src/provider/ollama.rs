use std::error::Error as _;
use std::io;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snafu::IntoError;

use crate::config::DoxgenConfig;
use crate::error::provider_error::{ApiSnafu, HttpSnafu, ParseResponseSnafu, TimeoutSnafu};
use crate::error::ProviderError;
use crate::provider::LlmProvider;

const HEALTH_TIMEOUT_SECS: u64 = 5;

pub struct OllamaProvider {
    endpoint: String,
    tags_url: String,
    model: String,
    options: ApiOptions,
    agent: ureq::Agent,
    health_agent: ureq::Agent,
}

impl OllamaProvider {
    pub fn new(config: &DoxgenConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            tags_url: config.tags_url(),
            model: config.model.clone(),
            options: ApiOptions {
                temperature: config.temperature,
                top_p: config.top_p,
                num_ctx: config.num_ctx,
            },
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build(),
            health_agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS))
                .build(),
        }
    }
}

// -- Ollama API request/response types --

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a ApiOptions,
}

#[derive(Debug, Clone, Serialize)]
struct ApiOptions {
    temperature: f64,
    top_p: f64,
    num_ctx: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    response: String,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: String,
}

fn transport_error(t: ureq::Transport) -> ProviderError {
    let timed_out = t
        .source()
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock));
    if timed_out {
        return TimeoutSnafu.build();
    }
    HttpSnafu.into_error(Box::new(t))
}

impl LlmProvider for OllamaProvider {
    fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ApiRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: &self.options,
        };

        match self.agent.post(&self.endpoint).send_json(&request) {
            Ok(resp) => {
                let api_resp: ApiResponse = resp.into_json().map_err(|e| {
                    ParseResponseSnafu {
                        message: e.to_string(),
                    }
                    .build()
                })?;
                Ok(api_resp.response)
            }
            Err(ureq::Error::Status(code, resp)) => {
                let error_body = resp.into_string().unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorResponse>(&error_body)
                    .map(|e| e.error)
                    .unwrap_or_else(|_| format!("status {code}: {error_body}"));
                ApiSnafu { message }.fail()
            }
            Err(ureq::Error::Transport(t)) => Err(transport_error(t)),
        }
    }

    fn check_health(&self) -> Result<(), ProviderError> {
        match self.health_agent.get(&self.tags_url).call() {
            Ok(_) => Ok(()),
            // Any HTTP answer means the server is up.
            Err(ureq::Error::Status(code, _)) => {
                tracing::debug!("liveness probe got status {code} from {}", self.tags_url);
                Ok(())
            }
            Err(ureq::Error::Transport(t)) => Err(transport_error(t)),
        }
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

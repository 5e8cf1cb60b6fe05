use serde::Serialize;

use super::{AgentClient, AgentError, AgentInvocation, FileUploader, UploadOutcome};

/// HTTP gateway to the hosted agent service — implements both remote
/// collaborators against a single base URL.
pub struct HttpAgentGateway {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpAgentGateway {
    /// Create a gateway with an explicit request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// The base URL being used.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_transport_error(&self, e: reqwest::Error) -> AgentError {
        if e.is_connect() {
            AgentError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            AgentError::Timeout(self.timeout_secs)
        } else {
            AgentError::HttpClient(e.to_string())
        }
    }
}

/// Request body for agent invocation.
#[derive(Serialize)]
struct InvokeRequest<'a> {
    message: &'a str,
    assets: &'a [String],
}

impl AgentClient for HttpAgentGateway {
    fn invoke(
        &self,
        message: &str,
        agent_id: &str,
        assets: &[String],
    ) -> Result<AgentInvocation, AgentError> {
        let url = format!("{}/api/agents/{}/invoke", self.base_url, agent_id);
        let body = InvokeRequest { message, assets };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AgentError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| AgentError::ResponseParsing(e.to_string()))
    }
}

impl FileUploader for HttpAgentGateway {
    fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<UploadOutcome, AgentError> {
        let url = format!("{}/api/assets", self.base_url);

        let part = reqwest::blocking::multipart::Part::bytes(bytes.to_vec())
            .file_name(file_name.to_string());
        let form = reqwest::blocking::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AgentError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| AgentError::ResponseParsing(e.to_string()))
    }
}

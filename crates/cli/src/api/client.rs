use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::dto::{
    AccountSummary, Idea, IdeaPayload, IdeaWithOwner, IdeasPayload, LoginRequest, NewIdea,
    RegisterRequest, StatusRequest, User, UserPayload, UsersPayload,
};
use super::IdeasApi;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server could not be reached or the connection dropped.
    #[error("Network error. Please try again.")]
    Network(#[source] reqwest::Error),

    /// The server answered with `success: false`. The message is shown as-is.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("Unexpected response from server (HTTP {status})")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    message: Option<String>,
    #[serde(flatten)]
    payload: serde_json::Map<String, serde_json::Value>,
}

/// Unwrap a `{success, message?, ...payload}` body into `T`.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, ClientError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|source| ClientError::Decode { status, source })?;

    if !envelope.success {
        return Err(ClientError::Server {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| "Request failed".to_string()),
        });
    }

    serde_json::from_value(serde_json::Value::Object(envelope.payload))
        .map_err(|source| ClientError::Decode { status, source })
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid API URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Invalid API URL: {}", base_url);
        }
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Append `segments` to the base URL, keeping any path prefix it has
    /// (e.g. a reverse-proxy mount point).
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(ClientError::Network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::Network)?;
        decode_envelope(status, &body)
    }
}

#[async_trait]
impl IdeasApi for ApiClient {
    async fn register(
        &self,
        full_name: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let body = RegisterRequest {
            full_name,
            phone_number,
            password,
        };
        let payload: UserPayload = self
            .call(self.client.post(self.endpoint(&["api", "register"])).json(&body))
            .await?;
        Ok(payload.user)
    }

    async fn login(&self, phone_number: &str, password: &str) -> Result<User, ClientError> {
        let body = LoginRequest {
            phone_number,
            password,
        };
        let payload: UserPayload = self
            .call(self.client.post(self.endpoint(&["api", "login"])).json(&body))
            .await?;
        Ok(payload.user)
    }

    async fn list_users(&self) -> Result<Vec<AccountSummary>, ClientError> {
        let payload: UsersPayload = self
            .call(self.client.get(self.endpoint(&["api", "users"])))
            .await?;
        Ok(payload.users)
    }

    async fn submit_idea(&self, idea: &NewIdea) -> Result<Idea, ClientError> {
        let payload: IdeaPayload = self
            .call(self.client.post(self.endpoint(&["api", "ideas"])).json(idea))
            .await?;
        Ok(payload.idea)
    }

    async fn list_ideas(&self) -> Result<Vec<IdeaWithOwner>, ClientError> {
        let payload: IdeasPayload<IdeaWithOwner> = self
            .call(self.client.get(self.endpoint(&["api", "ideas"])))
            .await?;
        Ok(payload.ideas)
    }

    async fn list_user_ideas(&self, user_id: i64) -> Result<Vec<Idea>, ClientError> {
        let user_id = user_id.to_string();
        let url = self.endpoint(&["api", "ideas", "user", &user_id]);
        let payload: IdeasPayload<Idea> = self.call(self.client.get(url)).await?;
        Ok(payload.ideas)
    }

    async fn update_status(&self, idea_id: i64, status: &str) -> Result<Idea, ClientError> {
        let idea_id = idea_id.to_string();
        let url = self.endpoint(&["api", "ideas", &idea_id, "status"]);
        let payload: IdeaPayload = self
            .call(self.client.patch(url).json(&StatusRequest { status }))
            .await?;
        Ok(payload.idea)
    }
}

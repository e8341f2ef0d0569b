mod client;
pub(crate) mod types;

use anyhow::{anyhow, Result};

use client::GroqClient;
use types::{ChatRequest, WireMessage};

/// A Groq-hosted chat model. Cheap to clone; holds no connection state.
#[derive(Clone)]
pub struct Groq {
    api_key: String,
    model: String,
    base_url: Option<String>,
}

impl Groq {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| anyhow!("GROQ_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> GroqClient {
        let client = GroqClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// Single request/response completion. Returns the model's raw text,
    /// which may or may not be well-formed JSON.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(WireMessage::system(
                "Answer in exactly the output format the prompt requests, \
                 with no surrounding commentary.",
            ))
            .message(WireMessage::user(prompt))
            .temperature(0.0)
            .max_tokens(1024);

        let response = self.client().chat(&request).await?;

        response
            .text()
            .ok_or_else(|| anyhow!("No response from Groq"))
    }
}

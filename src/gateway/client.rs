use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::models::{
    Content, ErrorWrapper, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use super::ChatGateway;
use crate::config::Config;
use crate::error::{MedimateError, Result};
use crate::models::Message;
use crate::summary;

/// `ChatGateway` implementation over the Gemini `generateContent` REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    system_prompt: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: config.api_endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    async fn generate(&self, contents: Vec<Content>) -> Result<String> {
        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(self.system_prompt.clone())),
            generation_config: Some(GenerationConfig::default()),
        };

        let response = self
            .client
            .post(self.request_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_text(parsed)
    }
}

#[async_trait]
impl ChatGateway for GeminiClient {
    async fn send_turn(&self, history: &[Message], user_message: &str) -> Result<String> {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::user(user_message));
        self.generate(contents).await
    }

    async fn summarize(&self, user_message: &str, bot_reply: &str) -> Result<String> {
        let prompt = summary::build_prompt(user_message, bot_reply);
        let reply = self.generate(vec![Content::user(prompt)]).await?;
        Ok(reply.trim().to_string())
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| MedimateError::Gateway {
            status: StatusCode::OK.as_u16(),
            message: "model returned no text in the response candidates".to_string(),
        })
}

fn map_http_error(status: StatusCode, body: String) -> MedimateError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{}: {}", status_text, msg)
            }
        })
        .unwrap_or(body);

    MedimateError::Gateway {
        status: status.as_u16(),
        message,
    }
}

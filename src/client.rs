use std::time::{Duration, Instant};

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::observability::{
    CLIENT_AUTH_REJECTIONS, CLIENT_PROMPT_MESSAGES, CLIENT_REQUEST_DURATION,
    CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS,
};
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, Completion, Credential, Message, ModelConfig,
    Role,
};

/// Anything that can turn a transcript into the next assistant reply.
///
/// [`CompletionClient`] is the production implementation; the chat session
/// only ever talks to this trait.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issues one completion call for `transcript`.
    ///
    /// `transcript` must start with the system message.  An empty
    /// `credential` fails with [`Error::Authentication`] before any network
    /// traffic.
    async fn complete(
        &self,
        transcript: &[Message],
        credential: &Credential,
        config: &ModelConfig,
    ) -> Result<Completion>;
}

/// Client for OpenAI-compatible chat-completion endpoints.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: ReqwestClient,
}

impl CompletionClient {
    /// Create a new completion client.
    ///
    /// The endpoint, model and timeout are supplied per call through
    /// [`ModelConfig`], so one client serves a whole session even when the
    /// user switches models.
    pub fn new() -> Result<Self> {
        let client = ReqwestClient::builder().build().map_err(|e| {
            Error::http_client(
                format!("Failed to build HTTP client: {}", e),
                Some(Box::new(e)),
            )
        })?;
        Ok(Self { client })
    }

    /// Create a client around an existing reqwest client.
    pub fn with_client(client: ReqwestClient) -> Self {
        Self { client }
    }

    /// Create and return default headers for API requests.
    fn default_headers(credential: &Credential) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
            .map_err(|_| {
                Error::authentication("API key contains characters not allowed in a header")
            })?;
        bearer.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, bearer);
        Ok(headers)
    }

    /// Process API response errors and convert to our Error type
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();

        let request_id = request_id(&response);

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        error_from_response(status_code, &error_body, request_id, retry_after)
    }

    fn transport_error(e: reqwest::Error, timeout: Duration) -> Error {
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }
}

#[async_trait::async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(
        &self,
        transcript: &[Message],
        credential: &Credential,
        config: &ModelConfig,
    ) -> Result<Completion> {
        if credential.is_empty() {
            CLIENT_AUTH_REJECTIONS.click();
            return Err(Error::authentication("API key not set"));
        }
        match transcript.first() {
            Some(message) if message.role == Role::System => {}
            _ => {
                return Err(Error::validation(
                    "transcript must start with the system message",
                    Some("messages".to_string()),
                ));
            }
        }
        config.validate()?;
        let url = config.completions_url()?;
        let headers = Self::default_headers(credential)?;
        let params = ChatCompletionRequest::new(&config.model, transcript, config.temperature);

        CLIENT_REQUESTS.click();
        CLIENT_PROMPT_MESSAGES.add(transcript.len() as f64);
        debug!(
            model = %config.model,
            url = %url,
            messages = transcript.len(),
            "sending chat completion request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .headers(headers)
            .timeout(config.timeout)
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                CLIENT_REQUEST_ERRORS.click();
                Self::transport_error(e, config.timeout)
            })?;

        if !response.status().is_success() {
            CLIENT_REQUEST_ERRORS.click();
            CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());
            let err = Self::process_error_response(response).await;
            if err.is_authentication() {
                CLIENT_AUTH_REJECTIONS.click();
            }
            debug!(error = %err, "chat completion request failed");
            return Err(err);
        }

        let request_id = request_id(&response);
        let body = response.json::<ChatCompletionResponse>().await.map_err(|e| {
            CLIENT_REQUEST_ERRORS.click();
            if e.is_timeout() {
                Error::timeout(
                    format!("Timed out reading response: {}", e),
                    Some(config.timeout.as_secs_f64()),
                )
            } else {
                Error::serialization(
                    format!("Failed to parse response: {}", e),
                    Some(Box::new(e)),
                )
            }
        })?;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        completion_from_response(body, request_id)
    }
}

fn request_id(response: &Response) -> Option<String> {
    response
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .map(String::from)
}

/// Map a non-success status and its body to an error.
///
/// OpenAI-compatible providers report failures as
/// `{"error": {"message": ..., "type": ..., "param": ...}}`; anything else is
/// surfaced verbatim.
fn error_from_response(
    status_code: u16,
    body: &str,
    request_id: Option<String>,
    retry_after: Option<u64>,
) -> Error {
    #[derive(Deserialize)]
    struct ErrorResponse {
        error: Option<ErrorDetail>,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        #[serde(rename = "type")]
        error_type: Option<String>,
        message: Option<String>,
        param: Option<String>,
    }

    let parsed_error = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error);
    let error_type = parsed_error.as_ref().and_then(|e| e.error_type.clone());
    let error_message = parsed_error
        .as_ref()
        .and_then(|e| e.message.clone())
        .unwrap_or_else(|| body.to_string());
    let error_param = parsed_error.as_ref().and_then(|e| e.param.clone());

    match status_code {
        400 => Error::bad_request(error_message, error_param),
        401 => Error::authentication(error_message),
        403 => Error::permission(error_message),
        404 => Error::not_found(error_message),
        408 => Error::timeout(error_message, None),
        429 => Error::rate_limit(error_message, retry_after),
        500 => Error::internal_server(error_message, request_id),
        502..=504 => Error::service_unavailable(error_message, retry_after),
        _ => Error::api(status_code, error_type, error_message, request_id),
    }
}

fn completion_from_response(
    body: ChatCompletionResponse,
    request_id: Option<String>,
) -> Result<Completion> {
    let text = match body.first_text() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => {
            CLIENT_REQUEST_ERRORS.click();
            return Err(Error::empty_response(
                "provider returned no completion text",
                request_id,
            ));
        }
    };
    let finish_reason = body
        .first_choice()
        .and_then(|choice| choice.finish_reason.clone());
    Ok(Completion {
        text,
        usage: body.usage,
        model: body.model,
        finish_reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Choice, ChoiceMessage, Usage};

    fn response_with(content: Option<&str>) -> ChatCompletionResponse {
        ChatCompletionResponse {
            id: Some("chatcmpl-1".to_string()),
            model: Some("gpt-4o-mini".to_string()),
            choices: vec![Choice {
                index: 0,
                message: ChoiceMessage {
                    role: Some("assistant".to_string()),
                    content: content.map(String::from),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: Some(Usage::new(4, 2)),
        }
    }

    #[tokio::test]
    async fn empty_credential_fails_before_network() {
        let client = CompletionClient::new().unwrap();
        // Port 9 (discard) is never contacted: the credential check comes first.
        let config = ModelConfig::new().with_endpoint("http://127.0.0.1:9/v1");
        let transcript = vec![Message::system("persona"), Message::human("hello")];
        let err = client
            .complete(&transcript, &Credential::empty(), &config)
            .await
            .unwrap_err();
        assert!(err.is_authentication());
    }

    #[tokio::test]
    async fn transcript_must_start_with_system() {
        let client = CompletionClient::new().unwrap();
        let config = ModelConfig::new().with_endpoint("http://127.0.0.1:9/v1");
        let transcript = vec![Message::human("hello")];
        let err = client
            .complete(&transcript, &Credential::new("sk-test"), &config)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn headers_carry_bearer_token() {
        let headers = CompletionClient::default_headers(&Credential::new("sk-test")).unwrap();
        assert_eq!(
            headers.get(header::AUTHORIZATION).unwrap(),
            "Bearer sk-test"
        );
        assert!(headers.get(header::AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn headers_reject_control_characters() {
        let err = CompletionClient::default_headers(&Credential::new("sk-\ntest")).unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn status_codes_map_to_error_families() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "param": null, "code": "invalid_api_key"}}"#;
        let err = error_from_response(401, body, None, None);
        assert!(err.is_authentication());
        assert_eq!(
            err.to_string(),
            "Authentication error: Incorrect API key provided"
        );

        let err = error_from_response(429, "{}", None, Some(20));
        assert!(err.is_rate_limit());
        assert!(err.is_upstream());

        let err = error_from_response(503, "upstream overloaded", None, None);
        assert!(err.is_server_error());
        assert_eq!(
            err.to_string(),
            "Service unavailable: upstream overloaded"
        );

        let err = error_from_response(500, "{}", Some("req_9".to_string()), None);
        assert_eq!(err.request_id(), Some("req_9"));

        let err = error_from_response(
            422,
            r#"{"error": {"message": "nope", "type": "unprocessable"}}"#,
            None,
            None,
        );
        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.to_string(), "unprocessable: nope");

        let err = error_from_response(
            400,
            r#"{"error": {"message": "bad temperature", "param": "temperature"}}"#,
            None,
            None,
        );
        assert_eq!(
            err.to_string(),
            "Bad request: bad temperature (parameter: temperature)"
        );
    }

    #[test]
    fn completion_takes_first_choice() {
        let completion = completion_from_response(response_with(Some("Hi!")), None).unwrap();
        assert_eq!(completion.text, "Hi!");
        assert_eq!(completion.usage, Some(Usage::new(4, 2)));
        assert_eq!(completion.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn missing_or_blank_text_is_an_empty_response() {
        let err = completion_from_response(response_with(None), Some("req_2".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyResponse { .. }));
        assert_eq!(err.request_id(), Some("req_2"));

        let err = completion_from_response(response_with(Some("  ")), None).unwrap_err();
        assert!(err.is_upstream());

        let mut body = response_with(Some("unused"));
        body.choices.clear();
        assert!(completion_from_response(body, None).is_err());
    }
}

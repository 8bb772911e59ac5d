//! Client for the hosted email-relay API.

use std::sync::Arc;

use leptos::prelude::{use_context, ServerFnError};
use reqwest::{Client, Url};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    config::RelayConfig,
    contact::{ContactMessage, SEND_FAILED},
};

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid relay endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("Relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl RelayError {
    /// What the browser is told. The cause stays in the server log.
    pub fn to_server_error(&self) -> ServerFnError {
        ServerFnError::new(SEND_FAILED)
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: Url,
    config: Arc<RelayConfig>,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|source| RelayError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?;
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            config: Arc::new(config),
        })
    }

    /// The client installed in the request context by the server.
    pub fn from_context() -> Result<Self, ServerFnError> {
        use_context::<Self>().ok_or_else(|| ServerFnError::new("Email relay is not configured"))
    }

    /// Sends one message. There is no retry: any transport error or non-2xx
    /// answer is returned as is.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let config = &self.config;
        let body = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: TemplateParams {
                to_email: &config.recipient,
                from_name: &message.name,
                from_email: &message.email,
                subject: &message.subject,
                message: &message.message,
            },
        };

        debug!(endpoint = %self.endpoint, "relaying contact message");
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "relay rejected message");
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::{provide_context, Owner};
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    const PATH: &str = "/api/v1.0/email/send";

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    fn client_for(server: &mockito::Server) -> RelayClient {
        let config = RelayConfig {
            endpoint: format!("{}{PATH}", server.url()),
            ..RelayConfig::default()
        };
        RelayClient::new(config).expect("client should build")
    }

    #[tokio::test]
    async fn test_send_posts_all_fields_once() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "service_id": "service_q2qabta",
                "template_id": "template_lmi5r9b",
                "user_id": "25quhtfJxkNjs01Dq",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "subject": "Hello",
                    "message": "Let's build something",
                }
            })))
            .with_status(200)
            .with_body("OK")
            .expect(1)
            .create_async()
            .await;

        let relay = client_for(&server);
        relay.send(&message()).await.expect("send should succeed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_private_key_is_sent_as_access_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_body(Matcher::PartialJson(json!({ "accessToken": "secret" })))
            .with_status(200)
            .create_async()
            .await;

        let config = RelayConfig {
            endpoint: format!("{}{PATH}", server.url()),
            private_key: Some("secret".to_string()),
            ..RelayConfig::default()
        };
        let relay = RelayClient::new(config).unwrap();
        relay.send(&message()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(400)
            .with_body("The template ID is invalid")
            .create_async()
            .await;

        let relay = client_for(&server);
        let err = relay.send(&message()).await.unwrap_err();
        match err {
            RelayError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The template ID is invalid");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = RelayConfig {
            endpoint: "not a url".to_string(),
            ..RelayConfig::default()
        };
        assert!(matches!(
            RelayClient::new(config),
            Err(RelayError::InvalidEndpoint { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // nothing listens on port 1
        let config = RelayConfig {
            endpoint: format!("http://127.0.0.1:1{PATH}"),
            ..RelayConfig::default()
        };
        let relay = RelayClient::new(config).unwrap();
        let err = relay.send(&message()).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)), "got {err:?}");
    }

    #[test]
    fn test_every_failure_reaches_the_browser_as_the_same_message() {
        let errors = [
            RelayError::Rejected {
                status: 400,
                body: "The template ID is invalid".to_string(),
            },
            RelayError::InvalidEndpoint {
                endpoint: "nope".to_string(),
                source: url::ParseError::RelativeUrlWithoutBase,
            },
        ];
        for err in &errors {
            match err.to_server_error() {
                ServerFnError::ServerError(msg) => assert_eq!(msg, SEND_FAILED),
                other => panic!("unexpected server error {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_context() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(RelayClient::from_context().is_err());
            provide_context(RelayClient::new(RelayConfig::default()).unwrap());
            assert!(RelayClient::from_context().is_ok());
        });
    }
}

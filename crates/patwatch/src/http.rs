//! Shared HTTP plumbing
//!
//! One client per invocation, with a fixed timeout and no retries. A request
//! either yields a 200 response or an [`Error`]; callers never see other
//! statuses, so nothing downstream parses an error page.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::prelude::*;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the client used for every request of one invocation
pub fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

/// Reject any status other than 200 OK
pub fn ensure_ok(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::UnexpectedStatus {
            url: response.url().to_string(),
            status,
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_sends_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ua"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(Duration::from_secs(5)).unwrap();
        let response = client
            .get(format!("{}/ua", mock_server.uri()))
            .send()
            .await
            .unwrap();

        assert!(ensure_ok(response).is_ok());
    }

    #[tokio::test]
    async fn test_ensure_ok_rejects_non_200() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/created"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&mock_server)
            .await;

        let client = client(Duration::from_secs(5)).unwrap();
        let response = client
            .get(format!("{}/created", mock_server.uri()))
            .send()
            .await
            .unwrap();

        match ensure_ok(response) {
            Err(Error::UnexpectedStatus { status, url }) => {
                assert_eq!(status, StatusCode::CREATED);
                assert!(url.ends_with("/created"));
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }
}

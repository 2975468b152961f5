use anyhow::Result;
use http_body_util::{BodyExt, Full};
use hyper::{body::Bytes, Method, Request, Response, StatusCode};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone)]
pub struct TestClient {
    base_url: String,
    client: Client<hyper_util::client::legacy::connect::HttpConnector, Full<Bytes>>,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request::<()>(Method::GET, path, None, None).await
    }

    pub async fn get_with_auth(&self, path: &str, token: &str) -> Result<ApiResponse> {
        self.request::<()>(Method::GET, path, None, Some(token))
            .await
    }

    /// GET with a raw Authorization header value, for malformed-header cases
    pub async fn get_with_authorization(&self, path: &str, value: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path, Full::new(Bytes::new()), &[("Authorization", value)])
            .await
    }

    pub async fn get_with_header(&self, path: &str, name: &str, value: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path, Full::new(Bytes::new()), &[(name, value)])
            .await
    }

    /// POST without a body, as the toggle endpoints expect
    pub async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<ApiResponse> {
        self.request::<()>(Method::POST, path, None, token).await
    }

    pub async fn put_with_auth<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Result<ApiResponse> {
        self.request(Method::PUT, path, Some(body), Some(token))
            .await
    }

    pub async fn patch_with_auth<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Result<ApiResponse> {
        self.request(Method::PATCH, path, Some(body), Some(token))
            .await
    }

    pub async fn delete_with_auth(&self, path: &str, token: &str) -> Result<ApiResponse> {
        self.request::<()>(Method::DELETE, path, None, Some(token))
            .await
    }

    async fn request<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse> {
        let bearer = auth_token.map(|token| format!("Bearer {}", token));
        let mut headers = Vec::new();
        if let Some(bearer) = bearer.as_deref() {
            headers.push(("Authorization", bearer));
        }

        let body_bytes = if let Some(body) = body {
            headers.push(("Content-Type", "application/json"));
            Full::new(Bytes::from(serde_json::to_vec(body)?))
        } else {
            Full::new(Bytes::new())
        };

        self.send(method, path, body_bytes, &headers).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Full<Bytes>,
        headers: &[(&str, &str)],
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let mut req_builder = Request::builder().method(method).uri(&url);

        for (name, value) in headers {
            req_builder = req_builder.header(*name, *value);
        }

        let request = req_builder.body(body)?;
        let response = self.client.request(request).await?;

        ApiResponse::from_response(response).await
    }
}

pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
    pub body_bytes: Vec<u8>,
    pub headers: HashMap<String, String>,
}

impl ApiResponse {
    async fn from_response(response: Response<hyper::body::Incoming>) -> Result<Self> {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        let body_bytes = response.into_body().collect().await?.to_bytes().to_vec();

        let body = if !body_bytes.is_empty() {
            serde_json::from_slice(&body_bytes).ok()
        } else {
            None
        };

        Ok(Self {
            status,
            body,
            body_bytes,
            headers,
        })
    }

    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "Expected status {} but got {}. Body: {:?}",
            expected, self.status, self.body
        );
        self
    }

    /// The `message` field every error body carries
    pub fn message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
    }

    pub fn assert_error_message(&self, expected_message: &str) -> &Self {
        let message = self
            .message()
            .expect("Missing message field in error response");

        assert!(
            message.contains(expected_message),
            "Expected error message to contain '{}', but got '{}'",
            expected_message,
            message
        );
        self
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body_bytes)?)
    }

    pub fn assert_header(&self, name: &str, value: &str) -> &Self {
        let actual = self
            .headers
            .get(name)
            .unwrap_or_else(|| panic!("Header '{}' not found", name));
        assert_eq!(actual, value, "Header '{}' value mismatch", name);
        self
    }

    pub fn assert_header_exists(&self, name: &str) -> &Self {
        assert!(
            self.headers.contains_key(name),
            "Header '{}' not found",
            name
        );
        self
    }
}

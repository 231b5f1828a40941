//! Internal HTTP client that authenticates, dispatches and classifies panel requests.

use crate::{
    ClientConfig, PlexHostApiKey, PlexHostError, PlexHostResult, PlexHostUrl,
    core::domain::model::envelope::{Normalized, normalize},
};
use bytes::Bytes;
use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// The four verbs the panel accepts.
const ALLOWED_METHODS: [&str; 4] = ["GET", "POST", "DELETE", "PUT"];

/// Per-call inputs to [`ApiClient::execute`].
///
/// `body` and `output` are independent: asking for the raw response never
/// drops the payload, and vice versa.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query string pairs, sent with every verb.
    pub params: Vec<(String, String)>,
    /// JSON payload, sent with POST and PUT only.
    pub body: Option<Value>,
    /// `Some(true)` returns the decoded body, `Some(false)` the raw response,
    /// `None` the decoded body when it is non-empty and the raw response otherwise.
    pub output: Option<bool>,
}

impl RequestOptions {
    /// Options with no parameters, no body and automatic output selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON payload from any serializable value.
    ///
    /// # Errors
    /// Returns `PlexHostError::InvalidArgument` if the value cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> PlexHostResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            PlexHostError::InvalidArgument(format!("Request body cannot be encoded: {}", e))
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Chooses the output mode.
    pub fn output(mut self, json: bool) -> Self {
        self.output = Some(json);
        self
    }
}

/// The HTTP response of a successful call, with its body already read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    /// The HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// What [`ApiClient::execute`] returns, depending on the requested output mode.
#[derive(Debug, Clone)]
pub enum RawResult {
    Json(Value),
    Response(RawResponse),
}

impl RawResult {
    /// The decoded JSON body. A raw response is decoded on demand; an
    /// undecodable body yields an empty object.
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Response(raw) => decode_body(&raw.body),
        }
    }

    /// Returns the raw response, if that is what the call produced.
    pub fn as_response(&self) -> Option<&RawResponse> {
        match self {
            Self::Response(raw) => Some(raw),
            Self::Json(_) => None,
        }
    }
}

/// Internal HTTP client that carries the API key and talks to the panel.
///
/// Every request gets `Authorization: Bearer {key}`, `Accept` and
/// `Content-Type: application/json` headers. Each call is a single attempt:
/// nothing is retried and nothing is cached. The underlying `reqwest::Client`
/// pools connections across calls.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: PlexHostUrl,
}

impl ApiClient {
    /// Creates a new `ApiClient`. No request is made.
    ///
    /// # Errors
    /// Returns `PlexHostError::InvalidArgument` if the default headers cannot
    /// be built from the key, or `PlexHostError::Connection` if the HTTP client
    /// cannot be built.
    pub fn new(
        base_url: PlexHostUrl,
        api_key: PlexHostApiKey,
        config: &ClientConfig,
    ) -> PlexHostResult<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(default_headers(&api_key)?);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| PlexHostError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &PlexHostUrl {
        &self.base_url
    }

    /// Performs one request against `endpoint` and classifies the response.
    ///
    /// `method` must be one of GET, POST, PUT or DELETE (any case); anything
    /// else fails before a request is built. GET and DELETE carry only the
    /// query parameters, POST and PUT also carry the JSON body.
    ///
    /// # Errors
    /// - `PlexHostError::BadRequest` for an unsupported method.
    /// - `PlexHostError::InternalPanel` when the panel answers 400 or 422.
    /// - `PlexHostError::Http` for any other 4xx/5xx status.
    /// - `PlexHostError::Connection` if the request cannot be sent or read.
    pub async fn execute(
        &self,
        endpoint: &str,
        method: &str,
        options: RequestOptions,
    ) -> PlexHostResult<RawResult> {
        let method = parse_method(method)?;
        let url = self.base_url.join(endpoint);

        debug!(%method, endpoint, "dispatching panel request");

        let mut req_builder = self.http_client.request(method.clone(), &url);
        if !options.params.is_empty() {
            req_builder = req_builder.query(&options.params);
        }
        if method == Method::POST || method == Method::PUT {
            if let Some(body) = &options.body {
                req_builder = req_builder.json(body);
            }
        } else if options.body.is_some() {
            debug!(%method, endpoint, "ignoring body on a request without payload");
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| PlexHostError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            PlexHostError::Connection(format!("Failed to read response body: {}", e))
        })?;

        let decoded = decode_body(&body);
        classify(status, &decoded, &body)?;

        let raw = RawResponse {
            status,
            headers,
            body,
        };

        Ok(match options.output {
            Some(true) => RawResult::Json(decoded),
            Some(false) => RawResult::Response(raw),
            None if is_empty(&decoded) => RawResult::Response(raw),
            None => RawResult::Json(decoded),
        })
    }

    /// GETs `endpoint` and returns the decoded body.
    pub async fn get(&self, endpoint: &str, options: RequestOptions) -> PlexHostResult<Value> {
        self.execute(endpoint, "GET", options.output(true))
            .await
            .map(RawResult::into_json)
    }

    /// GETs `endpoint` and normalizes the decoded body.
    pub async fn get_normalized(
        &self,
        endpoint: &str,
        options: RequestOptions,
        detail: bool,
    ) -> PlexHostResult<Normalized> {
        let body = self.get(endpoint, options).await?;
        Ok(normalize(body, detail))
    }

    /// POSTs a JSON body to `endpoint`, discarding the response.
    pub async fn post_action<B>(&self, endpoint: &str, body: &B) -> PlexHostResult<()>
    where
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::new().json(body)?.output(false);
        self.execute(endpoint, "POST", options).await.map(|_| ())
    }

    /// POSTs a JSON body to `endpoint` and normalizes the decoded response.
    pub async fn post_normalized<B>(&self, endpoint: &str, body: &B) -> PlexHostResult<Normalized>
    where
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::new().json(body)?.output(true);
        let body = self.execute(endpoint, "POST", options).await?.into_json();
        Ok(normalize(body, false))
    }

    /// DELETEs `endpoint`, discarding the response.
    pub async fn delete(&self, endpoint: &str) -> PlexHostResult<()> {
        self.execute(endpoint, "DELETE", RequestOptions::new().output(false))
            .await
            .map(|_| ())
    }
}

fn default_headers(api_key: &PlexHostApiKey) -> PlexHostResult<HeaderMap> {
    let mut auth = HeaderValue::from_str(&api_key.as_bearer_header()).map_err(|_| {
        PlexHostError::InvalidArgument("API key contains invalid header characters".to_string())
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn parse_method(method: &str) -> PlexHostResult<Method> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        _ => Err(PlexHostError::BadRequest(format!(
            "Invalid request type specified ({}). Must be one of: {}",
            method,
            ALLOWED_METHODS.join(", ")
        ))),
    }
}

/// Decodes a body as JSON, treating anything undecodable as an empty object.
fn decode_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        warn!(error = %e, "response body is not valid JSON, treating it as empty");
        Value::Object(Map::new())
    })
}

fn classify(status: StatusCode, decoded: &Value, body: &[u8]) -> PlexHostResult<()> {
    if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
        let errors = match decoded.get("errors") {
            Some(Value::Array(errors)) => errors.clone(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![other.clone()],
        };
        warn!(%status, count = errors.len(), "panel rejected the request");
        return Err(PlexHostError::InternalPanel { errors });
    }

    if status.is_client_error() || status.is_server_error() {
        return Err(PlexHostError::Http {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    Ok(())
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
    }
}
